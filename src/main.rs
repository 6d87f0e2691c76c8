mod cli;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use cli::{AppError, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(AppError::Args(e)) => {
            // clap renders its own usage block; help and version go to stdout
            if let Err(io) = e.print() {
                log::error!("failed to write argument diagnostics: {}", io);
            }
            if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, AppError> {
    let args = Cli::try_parse()?;

    let sample = args.sample();
    let segment = args.segment();
    let limits = args.limits();
    cli::warn_on_suspect_input(&sample, &segment);
    log::debug!("segment length {} m", segment.length_m());

    let verdict = corridor_check::evaluate(&sample, &segment, &limits);
    Ok(cli::render(&verdict, args.format)?)
}
