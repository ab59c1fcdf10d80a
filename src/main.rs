//! encscore - Web3 encryption reliability scoring CLI

use encscore::{cli, ScoreError};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = cli::Cli::parse_args();

    // Initialize logging (stderr, so stdout stays a clean report)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let score_err = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<ScoreError>());
            match score_err {
                Some(e) => {
                    eprintln!("error[{}]: {}", e.kind(), e);
                    ExitCode::from(e.exit_code())
                }
                None => {
                    eprintln!("error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
