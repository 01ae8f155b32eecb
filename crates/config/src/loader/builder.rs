//! Builder for layered job defaults.
//!
//! Responsibilities:
//! - Provide a builder-pattern `JobDefaultsLoader` that collects three layers
//!   (explicit builder values, environment, defaults file).
//! - Merge the layers into a single [`JobDefaults`].
//!
//! Does NOT handle:
//! - Environment parsing details (delegated to env.rs).
//! - File parsing details (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Precedence is builder > environment > file, regardless of call order.
//! - `load_dotenv()` must be called before `from_env()` for `.env` values to apply.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::defaults::JobDefaults;
use super::env::{env_var_or_none, read_env};
use super::error::ConfigError;
use super::file::read_defaults_file;
use crate::constants::{ENV_DEFAULTS_PATH, ENV_DOTENV_DISABLED};

/// Loader that builds [`JobDefaults`] from builder values, environment, and file.
#[derive(Debug, Clone, Default)]
pub struct JobDefaultsLoader {
    explicit: JobDefaults,
    env: JobDefaults,
    file: JobDefaults,
    config_path: Option<PathBuf>,
}

impl JobDefaultsLoader {
    /// Create a new loader with no layers populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file exists but has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("Skipping .env loading ({} is set)", ENV_DOTENV_DISABLED);
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the environment layer.
    ///
    /// Also picks up `SPLUNK_DEFAULTS_PATH` when no path was set explicitly.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.env = read_env()?;
        if self.config_path.is_none() {
            self.config_path = env_var_or_none(ENV_DEFAULTS_PATH).map(PathBuf::from);
        }
        Ok(self)
    }

    /// Set the defaults file path. The file is read by [`Self::from_file`].
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read the file layer from the configured path, if any.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = self.config_path.as_deref() {
            self.file = read_defaults_file(path)?;
        }
        Ok(self)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn with_earliest_time(mut self, earliest: impl Into<String>) -> Self {
        self.explicit.earliest_time = Some(earliest.into());
        self
    }

    pub fn with_latest_time(mut self, latest: impl Into<String>) -> Self {
        self.explicit.latest_time = Some(latest.into());
        self
    }

    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.explicit.max_count = Some(max_count);
        self
    }

    pub fn with_auto_cancel(mut self, seconds: u32) -> Self {
        self.explicit.auto_cancel = Some(seconds);
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.explicit.timeout = Some(seconds);
        self
    }

    pub fn with_status_buckets(mut self, buckets: u32) -> Self {
        self.explicit.status_buckets = Some(buckets);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.explicit.namespace = Some(namespace.into());
        self
    }

    /// Merge the layers: builder values, then environment, then file.
    pub fn build(self) -> JobDefaults {
        self.explicit.or(self.env).or(self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ENV_EARLIEST_TIME, ENV_LATEST_TIME, ENV_MAX_COUNT};
    use crate::test_util::global_test_lock;
    use serial_test::serial;
    use std::io::Write;

    fn defaults_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_empty_loader_builds_empty_defaults() {
        assert!(JobDefaultsLoader::new().build().is_empty());
    }

    #[test]
    fn test_builder_values() {
        let defaults = JobDefaultsLoader::new()
            .with_earliest_time("-1h")
            .with_latest_time("now")
            .with_max_count(10)
            .with_auto_cancel(30)
            .with_timeout(60)
            .with_status_buckets(0)
            .with_namespace("search")
            .build();
        assert_eq!(defaults.earliest_time.as_deref(), Some("-1h"));
        assert_eq!(defaults.latest_time.as_deref(), Some("now"));
        assert_eq!(defaults.max_count, Some(10));
        assert_eq!(defaults.auto_cancel, Some(30));
        assert_eq!(defaults.timeout, Some(60));
        assert_eq!(defaults.status_buckets, Some(0));
        assert_eq!(defaults.namespace.as_deref(), Some("search"));
    }

    #[test]
    #[serial]
    fn test_precedence_builder_env_file() {
        let _lock = global_test_lock().lock().unwrap();
        let file = defaults_file(
            r#"{"earliest_time": "-30d", "latest_time": "-1d", "max_count": 1}"#,
        );

        temp_env::with_vars(
            [
                (ENV_EARLIEST_TIME, Some("-7d")),
                (ENV_LATEST_TIME, Some("now")),
                (ENV_MAX_COUNT, None),
            ],
            || {
                let defaults = JobDefaultsLoader::new()
                    .with_config_path(file.path())
                    .from_file()
                    .unwrap()
                    .from_env()
                    .unwrap()
                    .with_earliest_time("-1h")
                    .build();

                assert_eq!(defaults.earliest_time.as_deref(), Some("-1h"));
                assert_eq!(defaults.latest_time.as_deref(), Some("now"));
                assert_eq!(defaults.max_count, Some(1));
            },
        );
    }

    #[test]
    #[serial]
    fn test_defaults_path_from_env() {
        let _lock = global_test_lock().lock().unwrap();
        let file = defaults_file(r#"{"namespace": "my_app"}"#);
        let path = file.path().to_string_lossy().to_string();

        temp_env::with_vars([(ENV_DEFAULTS_PATH, Some(path.as_str()))], || {
            let defaults = JobDefaultsLoader::new()
                .from_env()
                .unwrap()
                .from_file()
                .unwrap()
                .build();
            assert_eq!(defaults.namespace.as_deref(), Some("my_app"));
        });
    }

    #[test]
    #[serial]
    fn test_explicit_path_wins_over_env_path() {
        let _lock = global_test_lock().lock().unwrap();
        temp_env::with_vars([(ENV_DEFAULTS_PATH, Some("/nonexistent/defaults.json"))], || {
            let loader = JobDefaultsLoader::new()
                .with_config_path("/explicit/defaults.json")
                .from_env()
                .unwrap();
            assert_eq!(
                loader.config_path(),
                Some(Path::new("/explicit/defaults.json"))
            );
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_skips_loading() {
        let _lock = global_test_lock().lock().unwrap();
        temp_env::with_vars([(ENV_DOTENV_DISABLED, Some("1"))], || {
            assert!(JobDefaultsLoader::new().load_dotenv().is_ok());
        });
    }

    #[test]
    fn test_from_file_without_path_is_noop() {
        let defaults = JobDefaultsLoader::new().from_file().unwrap().build();
        assert!(defaults.is_empty());
    }
}
