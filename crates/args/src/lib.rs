//! Typed REST arguments for the Splunk Enterprise API.
//!
//! This crate stages the parameters of Splunk REST calls in an ordered,
//! typed container ([`Args`]) through builders that know each endpoint's
//! exact wire names ([`JobArgs`], [`JobSummaryArgs`], [`CreateUserArgs`]),
//! and offers typed views over entity content ([`Password`], [`User`]).
//! Sending the request is left to the caller's HTTP client; the container
//! renders itself as form pairs or a query string for that purpose.

#[macro_use]
mod macros;

mod container;
pub mod entity;
pub mod error;
mod job;
mod job_summary;
mod keys;
mod modes;
mod passwords;
mod serde_helpers;
pub mod url_encoding;
mod users;
mod value;

pub use container::Args;
pub use error::{ArgsError, Result};
pub use job::JobArgs;
pub use job_summary::JobSummaryArgs;
pub use keys::ParamKey;
pub use modes::{ExecutionMode, SearchMode};
pub use passwords::Password;
pub use users::{CreateUserArgs, User};
pub use value::{ArgValue, REDACTED};

pub use splunk_config::JobDefaults;
