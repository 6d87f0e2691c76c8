use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("not a real number: {0}")]
pub struct NumberError(#[from] ParseFloatError);

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Args(#[from] clap::Error),
    #[error("failed to render verdict: {0}")]
    Render(#[from] serde_json::Error),
}

/// Value parser for every numeric positional argument.
pub fn parse_real(value: &str) -> Result<f64, NumberError> {
    Ok(value.trim().parse::<f64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_signed_numbers() {
        assert_eq!(parse_real("50.0").unwrap(), 50.0);
        assert_eq!(parse_real("-33.9").unwrap(), -33.9);
        assert_eq!(parse_real(" 1e3 ").unwrap(), 1000.0);
        assert_eq!(parse_real("300").unwrap(), 300.0);
    }

    #[test]
    fn accepts_non_finite_spellings() {
        assert!(parse_real("nan").unwrap().is_nan());
        assert_eq!(parse_real("inf").unwrap(), f64::INFINITY);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_real("ten").unwrap_err();
        assert!(err.to_string().starts_with("not a real number"));
        assert!(parse_real("").is_err());
        assert!(parse_real("1.0.0").is_err());
    }
}
