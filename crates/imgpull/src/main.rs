use std::process::ExitCode;

use clap::Parser;
use imgpull::cli::{Cli, execute};
use imgpull::telemetry::Telemetry;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let code = if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            let _ = err.print();
            return code;
        }
    };

    let _telemetry = match Telemetry::init(&cli.logging_config()) {
        Ok(telemetry) => telemetry,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            if cli.progress {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
