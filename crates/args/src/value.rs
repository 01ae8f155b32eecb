//! Typed argument values.
//!
//! Responsibilities:
//! - Hold one REST parameter value with its primitive type intact.
//! - Render the value to its wire string via `Display`.
//! - Flatten string lists into a single comma-joined value.
//!
//! Does NOT handle:
//! - Percent-encoding (see [`crate::url_encoding`]).
//! - Range or format validation; the server rejects invalid values.
//!
//! Invariants:
//! - Enumerated constants are stored as their wire string, never their name.
//! - List elements are joined with `,` without escaping embedded commas.
//! - `Secret` values are never exposed by `Debug` or `Serialize`.
//! - Integers that fit in `i64` are always `Int`; only larger unsigned
//!   values are `UInt`.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::modes::{ExecutionMode, SearchMode};

/// Placeholder shown instead of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// A single REST parameter value.
#[derive(Clone)]
pub enum ArgValue {
    Text(String),
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Text that must not appear in logs (passwords).
    Secret(SecretString),
}

impl ArgValue {
    /// Join list elements with `,` into a single text value.
    ///
    /// An empty list yields an empty string.
    pub fn joined<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut csv = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i != 0 {
                csv.push(',');
            }
            csv.push_str(item.as_ref());
        }
        ArgValue::Text(csv)
    }

    /// Borrow the text if this is a plain text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ArgValue::Int(v) => u64::try_from(*v).ok(),
            ArgValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, ArgValue::Secret(_))
    }
}

/// Renders the wire string. Secrets are exposed here and only here.
impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(s) => f.write_str(s),
            ArgValue::Int(v) => write!(f, "{}", v),
            ArgValue::UInt(v) => write!(f, "{}", v),
            ArgValue::Float(v) => write!(f, "{}", v),
            ArgValue::Bool(v) => write!(f, "{}", v),
            ArgValue::Secret(s) => f.write_str(s.expose_secret()),
        }
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            ArgValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            ArgValue::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            ArgValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            ArgValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            ArgValue::Secret(_) => f.debug_tuple("Secret").field(&REDACTED).finish(),
        }
    }
}

impl PartialEq for ArgValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArgValue::Text(a), ArgValue::Text(b)) => a == b,
            (ArgValue::Int(a), ArgValue::Int(b)) => a == b,
            (ArgValue::UInt(a), ArgValue::UInt(b)) => a == b,
            (ArgValue::Float(a), ArgValue::Float(b)) => a == b,
            (ArgValue::Bool(a), ArgValue::Bool(b)) => a == b,
            (ArgValue::Secret(a), ArgValue::Secret(b)) => a.expose_secret() == b.expose_secret(),
            _ => false,
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArgValue::Text(s) => serializer.serialize_str(s),
            ArgValue::Int(v) => serializer.serialize_i64(*v),
            ArgValue::UInt(v) => serializer.serialize_u64(*v),
            // JSON has no NaN or infinity; keep the wire spelling.
            ArgValue::Float(v) if !v.is_finite() => serializer.collect_str(v),
            ArgValue::Float(v) => serializer.serialize_f64(*v),
            ArgValue::Bool(v) => serializer.serialize_bool(*v),
            ArgValue::Secret(_) => serializer.serialize_str(REDACTED),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        ArgValue::Text(value.clone())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

macro_rules! from_lossless {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for ArgValue {
                fn from(value: $source) -> Self {
                    ArgValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

from_lossless!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
from_lossless!(Float(f64): f32, f64);

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => ArgValue::Int(v),
            Err(_) => ArgValue::UInt(value),
        }
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(v) => ArgValue::Int(v),
            Err(_) => ArgValue::UInt(value as u64),
        }
    }
}

impl From<isize> for ArgValue {
    fn from(value: isize) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<SecretString> for ArgValue {
    fn from(value: SecretString) -> Self {
        ArgValue::Secret(value)
    }
}

impl From<ExecutionMode> for ArgValue {
    fn from(value: ExecutionMode) -> Self {
        ArgValue::Text(value.as_str().to_string())
    }
}

impl From<SearchMode> for ArgValue {
    fn from(value: SearchMode) -> Self {
        ArgValue::Text(value.as_str().to_string())
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(value: Vec<String>) -> Self {
        ArgValue::joined(value)
    }
}

impl From<&[String]> for ArgValue {
    fn from(value: &[String]) -> Self {
        ArgValue::joined(value)
    }
}

impl From<&[&str]> for ArgValue {
    fn from(value: &[&str]) -> Self {
        ArgValue::joined(value)
    }
}

impl<const N: usize> From<[&str; N]> for ArgValue {
    fn from(value: [&str; N]) -> Self {
        ArgValue::joined(value)
    }
}
