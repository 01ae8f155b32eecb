//! JSON defaults file loading.

use std::path::Path;

use tracing::debug;

use super::defaults::JobDefaults;
use super::error::ConfigError;

/// Read a defaults layer from a JSON file.
///
/// A missing file is an error here; callers decide whether the path was
/// optional before calling.
pub fn read_defaults_file(path: &Path) -> Result<JobDefaults, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    let defaults: JobDefaults =
        serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), "Loaded job defaults file");
    Ok(defaults)
}
