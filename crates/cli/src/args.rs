//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not build REST arguments (see `commands`).
//! - Does not load job defaults (see `dispatch`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "splunk-args")]
#[command(about = "Build Splunk REST request arguments", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-args job 'search index=main | head 10' --exec-mode blocking\n  splunk-args --format json summary --field host --field source --top-count 5\n  splunk-args --format form user jdoe --role user --role power\n  splunk-args keys\n"
)]
pub struct Cli {
    /// Output format (query, form, json)
    #[arg(short, long, global = true, default_value = "query")]
    pub format: String,

    /// Path to a JSON file with job defaults.
    ///
    /// Can also be set via SPLUNK_DEFAULTS_PATH environment variable.
    #[arg(long, global = true, env = "SPLUNK_DEFAULTS_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage the arguments for creating a search job
    Job(commands::job::JobOptions),

    /// Stage the arguments for a job's field summary
    Summary(commands::summary::SummaryOptions),

    /// Stage the arguments for creating a user
    User(commands::user::UserOptions),

    /// List every known REST parameter name
    Keys,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_defaults_to_query() {
        let cli = Cli::try_parse_from(["splunk-args", "keys"]).unwrap();
        assert_eq!(cli.format, "query");
        assert!(matches!(cli.command, Commands::Keys));
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli =
            Cli::try_parse_from(["splunk-args", "summary", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_job_requires_query() {
        assert!(Cli::try_parse_from(["splunk-args", "job"]).is_err());
    }

    #[test]
    fn test_relative_times_accept_leading_hyphen() {
        let cli = Cli::try_parse_from([
            "splunk-args",
            "job",
            "search *",
            "--earliest",
            "-24h",
        ])
        .unwrap();
        match cli.command {
            Commands::Job(opts) => assert_eq!(opts.earliest.as_deref(), Some("-24h")),
            _ => panic!("expected job command"),
        }
    }
}
