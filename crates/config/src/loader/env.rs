//! Environment variable parsing for job defaults.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use super::defaults::JobDefaults;
use super::error::ConfigError;
use crate::constants::{
    ENV_APP, ENV_AUTO_CANCEL, ENV_EARLIEST_TIME, ENV_JOB_TIMEOUT, ENV_LATEST_TIME, ENV_MAX_COUNT,
    ENV_STATUS_BUCKETS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_u32(var: &str) -> Result<Option<u32>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: "must be a non-negative integer".to_string(),
            })
        })
        .transpose()
}

/// Read the job defaults layer from the process environment.
pub fn read_env() -> Result<JobDefaults, ConfigError> {
    Ok(JobDefaults {
        earliest_time: env_var_or_none(ENV_EARLIEST_TIME),
        latest_time: env_var_or_none(ENV_LATEST_TIME),
        max_count: env_u32(ENV_MAX_COUNT)?,
        auto_cancel: env_u32(ENV_AUTO_CANCEL)?,
        timeout: env_u32(ENV_JOB_TIMEOUT)?,
        status_buckets: env_u32(ENV_STATUS_BUCKETS)?,
        namespace: env_var_or_none(ENV_APP),
    })
}
