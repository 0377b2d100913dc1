use clap::Parser;
use std::process::ExitCode;

use jdl_json::cli::{run_cli, Cli};
use jdl_json::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match init_logging(&LogConfig::from_env()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
