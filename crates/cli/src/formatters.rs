//! Output formatters for staged arguments.
//!
//! Responsibilities:
//! - Parse the `--format` option.
//! - Render an [`Args`] container or the parameter-name table for stdout.
//!
//! Invariants:
//! - Entry order in every format is the container's insertion order.
//! - Secret values are rendered as `[REDACTED]` in every format.

use std::str::FromStr;

use anyhow::Result;
use splunk_args::url_encoding::encode_query_component;
use splunk_args::{Args, ParamKey, REDACTED};

use crate::error::CliError;

/// Output format for rendered arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One percent-encoded `k=v&k=v` line.
    Query,
    /// One unencoded `k=v` pair per line.
    Form,
    /// A JSON object in insertion order.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" => Ok(OutputFormat::Query),
            "form" => Ok(OutputFormat::Form),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

fn display_pairs(args: &Args) -> Vec<(&str, String)> {
    args.iter()
        .map(|(key, value)| {
            let shown = if value.is_secret() {
                REDACTED.to_string()
            } else {
                value.to_string()
            };
            (key, shown)
        })
        .collect()
}

/// Render staged arguments.
pub fn format_args(args: &Args, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Query => display_pairs(args)
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_query_component(key),
                    encode_query_component(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&"),
        OutputFormat::Form => display_pairs(args)
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(args)?,
    };
    Ok(output)
}

/// Render the parameter-name table.
pub fn format_keys(keys: &[ParamKey], format: OutputFormat) -> Result<String> {
    let names: Vec<&str> = keys.iter().map(ParamKey::as_str).collect();
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&names)?,
        OutputFormat::Query | OutputFormat::Form => names.join("\n"),
    };
    Ok(output)
}
