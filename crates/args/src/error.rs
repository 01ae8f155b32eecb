//! Error types for argument construction.
//!
//! Populating an [`Args`](crate::Args) container never fails: the REST API
//! validates ranges and formats server-side. Errors only arise when parsing
//! wire strings back into typed values (CLI flags, configuration files).

use thiserror::Error;

/// Result type alias for argument operations.
pub type Result<T> = std::result::Result<T, ArgsError>;

/// Errors that can occur while translating wire strings into typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A string is not one of the wire values of a closed enumeration.
    #[error("Invalid {kind} value '{value}' (expected one of: {expected})")]
    UnknownWireValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// A string is not a known REST parameter name.
    #[error("Unknown parameter name: {0}")]
    UnknownParamKey(String),
}

impl ArgsError {
    /// Check if this error was caused by caller input that can be corrected.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownWireValue { .. } | Self::UnknownParamKey(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_wire_value_display() {
        let err = ArgsError::UnknownWireValue {
            kind: "execution mode",
            value: "BLOCKING".to_string(),
            expected: "normal, blocking, oneshot".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid execution mode value 'BLOCKING' (expected one of: normal, blocking, oneshot)"
        );
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_unknown_param_key_display() {
        let err = ArgsError::UnknownParamKey("autoCancel".to_string());
        assert_eq!(err.to_string(), "Unknown parameter name: autoCancel");
    }
}
