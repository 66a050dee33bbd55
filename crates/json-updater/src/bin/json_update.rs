//! `json-update`: edit a JSON file by dotted property path.
//!
//! Usage:
//!   json-update [OPTIONS] <FILE> <COMMAND>
//!
//! Values are parsed as JSON; anything that is not valid JSON is taken as a
//! plain string.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use json_updater::json_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("json_updater=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(Some(output)) => {
            let mut stdout = io::stdout();
            if writeln!(stdout, "{output}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
