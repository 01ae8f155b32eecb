//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Load job defaults for the `job` command.
//! - Write the rendered output to stdout.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - The output format is parsed before any command runs.
//! - Defaults are loaded only for `job`, and not at all with `--no-defaults`.

use std::path::Path;

use anyhow::{Context, Result};
use splunk_args::{JobDefaults, ParamKey};
use splunk_config::JobDefaultsLoader;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::{OutputFormat, format_args, format_keys};

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse()?;

    let output = match cli.command {
        Commands::Job(opts) => {
            let defaults = if opts.no_defaults {
                None
            } else {
                Some(load_job_defaults(cli.config_path.as_deref())?)
            };
            let args = commands::job::run(opts, defaults.as_ref())?;
            format_args(&args, format)?
        }
        Commands::Summary(opts) => {
            let args = commands::summary::run(opts)?;
            format_args(&args, format)?
        }
        Commands::User(opts) => {
            let args = commands::user::run(opts)?;
            format_args(&args, format)?
        }
        Commands::Keys => format_keys(ParamKey::ALL, format)?,
    };

    println!("{}", output);
    Ok(())
}

/// Load job defaults: environment first, then the defaults file.
///
/// A blank `--config-path` is ignored so `SPLUNK_DEFAULTS_PATH` can still apply.
fn load_job_defaults(config_path: Option<&Path>) -> Result<JobDefaults> {
    let mut loader = JobDefaultsLoader::new();

    if let Some(path) = config_path {
        if !path.to_string_lossy().trim().is_empty() {
            loader = loader.with_config_path(path);
        }
    }

    let defaults = loader
        .from_env()
        .context("Failed to load job defaults from environment")?
        .from_file()
        .context("Failed to load job defaults file")?
        .build();

    debug!(empty = defaults.is_empty(), "Loaded job defaults");
    Ok(defaults)
}
