//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Logging setup and the process exit status

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();

    // stdout carries the report, so logs go to stderr.
    tracing_subscriber::fmt::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {err}");
            ExitCode::FAILURE
        }
    }
}
