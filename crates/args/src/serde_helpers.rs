//! Serde helpers for Splunk's inconsistent entity content typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or numeric strings for numeric fields.
//! - Accept either a single string or a list for multi-valued fields.
//! - Deserialize secret fields straight into `SecretString`.
//!
//! Invariants / assumptions:
//! - Splunk may return numbers as `"123"` or `123` depending on endpoint/version.
//! - Errors from these helpers never include secret content.

use secrecy::SecretString;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<U64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U64OrString::U64(v)) => Ok(Some(v)),
        Some(U64OrString::I64(v)) => Ok(Some(u64::try_from(v).map_err(D::Error::custom)?)),
        Some(U64OrString::String(s)) if s.is_empty() => Ok(None),
        Some(U64OrString::String(s)) => Ok(Some(s.parse::<u64>().map_err(D::Error::custom)?)),
    }
}

/// A single string becomes a one-element list; `null` becomes empty.
pub fn string_list_from_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

pub fn opt_secret_string<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(SecretString::from))
}
