//! csv2tsql command-line entry point.

use std::io::{self, IsTerminal};

use clap::Parser;
use csv2tsql_cli::logging::{LogConfig, init_logging};
use csv2tsql_cli::pipeline::convert_directory;
use csv2tsql_cli::summary::print_summary;
use csv2tsql_cli::types::RunConfig;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig::from_debug(cli.debug)
        .with_env_format()
        .with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = RunConfig::new(&cli.directory);
    let exit_code = match convert_directory(&config) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "Conversion aborted");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
