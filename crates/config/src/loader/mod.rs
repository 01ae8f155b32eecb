//! Loader for search-job defaults.
//!
//! Responsibilities:
//! - Load defaults from `.env` files, environment variables, and a JSON file.
//! - Provide a builder-pattern `JobDefaultsLoader` that merges the layers.
//! - Enforce the `DOTENV_DISABLED` gate so tests can skip dotenv loading.
//!
//! Does NOT handle:
//! - Applying defaults to request arguments (see `splunk-args`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Builder values take precedence over environment variables.
//! - Environment variables take precedence over the defaults file.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod defaults;
mod env;
mod error;
mod file;

pub use builder::JobDefaultsLoader;
pub use defaults::JobDefaults;
pub use env::env_var_or_none;
pub use error::ConfigError;
