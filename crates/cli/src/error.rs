//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library and CLI errors to the appropriate exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Input the caller can fix (bad enumerated value, bad config) exits with 5.
//! - Everything else that fails exits with 1.

use splunk_args::ArgsError;
use splunk_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for splunk-args.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - arguments were rendered.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - invalid enumerated value, bad config, missing input.
    ///
    /// Scripts should fix the input and not retry the same invocation.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Usage errors detected by the CLI itself.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid output format: {0}. Valid options: query, form, json")]
    InvalidFormat(String),

    #[error("No password given. Use --password or set SPLUNK_NEW_USER_PASSWORD")]
    MissingPassword,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError for errors with no known cause.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(args_err) = cause.downcast_ref::<ArgsError>() {
                if args_err.is_validation_error() {
                    return ExitCode::ValidationError;
                }
            }
            if cause.downcast_ref::<ConfigError>().is_some()
                || cause.downcast_ref::<CliError>().is_some()
            {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
