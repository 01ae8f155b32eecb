//! splunk-args - Build Splunk REST request arguments from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Stage job, job-summary, and user-creation arguments through the library builders.
//! - Render the staged arguments as a query string, form lines, or JSON.
//!
//! Does NOT handle:
//! - Sending requests to a Splunk server.
//! - Argument semantics (see `crates/args`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only the rendered arguments.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use splunk_config::JobDefaultsLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = JobDefaultsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ValidationError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
