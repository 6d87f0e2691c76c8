use clap::ValueEnum;

use corridor_check::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `deviation speed_violation is_compliant`, two decimals
    Text,
    /// Serialized verdict at full precision
    Json,
}

pub fn render(verdict: &Verdict, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{:.2} {:.2} {}",
            verdict.deviation_m,
            verdict.speed_violation_kmh,
            u8::from(verdict.is_compliant)
        )),
        OutputFormat::Json => serde_json::to_string(verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(deviation_m: f64, speed_violation_kmh: f64, is_compliant: bool) -> Verdict {
        Verdict {
            deviation_m,
            speed_violation_kmh,
            is_compliant,
        }
    }

    #[test]
    fn text_two_decimals() {
        let line = render(&verdict(0.0, 0.0, true), OutputFormat::Text).unwrap();
        assert_eq!(line, "0.00 0.00 1");
        let line = render(&verdict(1000.004, 50.0, false), OutputFormat::Text).unwrap();
        assert_eq!(line, "1000.00 50.00 0");
        let line = render(&verdict(99.999, 0.126, true), OutputFormat::Text).unwrap();
        assert_eq!(line, "100.00 0.13 1");
    }

    #[test]
    fn json_full_precision() {
        let line = render(&verdict(123.456789, 0.0, true), OutputFormat::Json).unwrap();
        assert_eq!(
            line,
            r#"{"deviation":123.456789,"speed_violation":0.0,"is_compliant":true}"#
        );
    }

    #[test]
    fn json_non_finite_is_null() {
        let line = render(&verdict(f64::NAN, 0.0, false), OutputFormat::Json).unwrap();
        assert!(line.starts_with(r#"{"deviation":null"#));
    }
}
