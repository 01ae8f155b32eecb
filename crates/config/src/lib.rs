//! Configuration for Splunk REST argument defaults.
//!
//! This crate loads the default search-job parameters that callers apply
//! before their own arguments, from builder values, environment variables,
//! a `.env` file, and a JSON defaults file.

pub mod constants;
mod loader;

pub use loader::{ConfigError, JobDefaults, JobDefaultsLoader, env_var_or_none};
