//! Changelint: report linter findings only on lines touched by the current diff.
//!
//! This is the main entry point for the `changelint` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps the result to
//! an exit code.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Fatal errors are reported apart from findings
            error!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

