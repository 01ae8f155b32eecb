//! Ordered argument container.
//!
//! Responsibilities:
//! - Stage the parameters of one REST call as wire-name to [`ArgValue`].
//! - Overwrite on repeated keys, keeping the key's first position.
//! - Render the parameters as form pairs or a query string for a transport.
//!
//! Does NOT handle:
//! - Sending requests, authentication, or response parsing.
//! - Validating values; the server is the authority on ranges and formats.
//!
//! Invariants:
//! - Each key appears at most once.
//! - Iteration order is insertion order.
//! - Keys are used verbatim; builders pass wire names from [`ParamKey`](crate::ParamKey).

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::url_encoding::encode_query_component;
use crate::value::ArgValue;

/// Parameters for a single REST call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, ArgValue)>,
}

impl Args {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// Returns the previous value if the key was already present.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Option<ArgValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => {
                trace!(key = %key, "overwriting argument");
                Some(std::mem::replace(&mut self.entries[idx].1, value))
            }
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Store a list of strings under `key`, joined with `,`.
    pub fn put_list<I, S>(&mut self, key: impl Into<String>, items: I) -> Option<ArgValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.put(key, ArgValue::joined(items))
    }

    /// Copy every entry of `other` into this container. Last write wins.
    pub fn put_all(&mut self, other: &Args) {
        for (key, value) in &other.entries {
            self.put(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&ArgValue> {
        self.position(key.as_ref()).map(|idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.position(key.as_ref()).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(entry_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Render as `(name, wire value)` pairs, ready for a form body.
    ///
    /// Secret values are exposed here; do not log the result.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Render as a percent-encoded `name=value&...` string.
    ///
    /// Secret values are exposed here; do not log the result.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&encode_query_component(key));
            query.push('=');
            query.push_str(&encode_query_component(&value.to_string()));
        }
        query
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

type EntryRef<'a> = (&'a str, &'a ArgValue);

fn entry_ref(entry: &(String, ArgValue)) -> EntryRef<'_> {
    (entry.0.as_str(), &entry.1)
}

impl<'a> IntoIterator for &'a Args {
    type Item = EntryRef<'a>;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, ArgValue)>,
        fn(&'a (String, ArgValue)) -> EntryRef<'a>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, ArgValue)) -> EntryRef<'a>)
    }
}

impl<K, V> Extend<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Args::new();
        args.extend(iter);
        args
    }
}

/// Serializes as a JSON object in insertion order. Secrets are redacted.
impl Serialize for Args {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ParamKey;
    use crate::modes::ExecutionMode;
    use secrecy::SecretString;

    #[test]
    fn test_put_and_get() {
        let mut args = Args::new();
        assert!(args.put("auto_cancel", 30u32).is_none());
        assert_eq!(args.get("auto_cancel"), Some(&ArgValue::Int(30)));
        assert_eq!(args.len(), 1);
        assert!(args.get("missing").is_none());
    }

    #[test]
    fn test_put_overwrites_and_returns_previous() {
        let mut args = Args::new();
        args.put("earliest_time", "-24h");
        let previous = args.put("earliest_time", "-7d");
        assert_eq!(previous, Some(ArgValue::Text("-24h".to_string())));
        assert_eq!(args.get("earliest_time"), Some(&ArgValue::from("-7d")));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut args = Args::new();
        args.put("a", 1i64);
        args.put("b", 2i64);
        args.put("a", 3i64);
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(args.get("a"), Some(&ArgValue::Int(3)));
    }

    #[test]
    fn test_put_with_param_key() {
        let mut args = Args::new();
        args.put(ParamKey::ExecMode, ExecutionMode::Blocking);
        assert_eq!(args.get(ParamKey::ExecMode), Some(&ArgValue::from("blocking")));
        assert!(args.contains_key("exec_mode"));
    }

    #[test]
    fn test_put_list_joins() {
        let mut args = Args::new();
        args.put_list("rf", ["host", "source"]);
        assert_eq!(args.get("rf"), Some(&ArgValue::from("host,source")));
    }

    #[test]
    fn test_put_array_value_joins() {
        let mut args = Args::new();
        let servers = vec!["idx1".to_string(), "idx2".to_string()];
        args.put("remote_server_list", servers);
        assert_eq!(
            args.get("remote_server_list"),
            Some(&ArgValue::from("idx1,idx2"))
        );
    }

    #[test]
    fn test_put_all_last_write_wins() {
        let mut first = Args::new();
        first.put("k", "v1");
        first.put("only_first", true);

        let mut second = Args::new();
        second.put("k", "v2");
        second.put("only_second", 7i64);

        first.put_all(&second);
        assert_eq!(first.get("k"), Some(&ArgValue::from("v2")));
        assert_eq!(first.get("only_first"), Some(&ArgValue::Bool(true)));
        assert_eq!(first.get("only_second"), Some(&ArgValue::Int(7)));
        assert_eq!(
            first.keys().collect::<Vec<_>>(),
            vec!["k", "only_first", "only_second"]
        );
    }

    #[test]
    fn test_to_form_pairs() {
        let mut args = Args::new();
        args.put("search", "search index=main");
        args.put("max_count", 10u32);
        args.put("rt_blocking", false);
        assert_eq!(
            args.to_form_pairs(),
            vec![
                ("search".to_string(), "search index=main".to_string()),
                ("max_count".to_string(), "10".to_string()),
                ("rt_blocking".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_query_string_encodes() {
        let mut args = Args::new();
        args.put("search", "search index=main | head 10");
        args.put("f", ArgValue::joined(["host", "source"]));
        assert_eq!(
            args.to_query_string(),
            "search=search%20index%3Dmain%20%7C%20head%2010&f=host%2Csource"
        );
    }

    #[test]
    fn test_to_query_string_empty() {
        assert_eq!(Args::new().to_query_string(), "");
    }

    #[test]
    fn test_collect_and_extend() {
        let mut args: Args = vec![("a", "1"), ("b", "2")].into_iter().collect();
        args.extend([("a", "3")]);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some(&ArgValue::from("3")));
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let args: Args = [("x", 1i64), ("y", 2i64)].into_iter().collect();
        let mut seen = Vec::new();
        for (key, value) in &args {
            seen.push(format!("{}={}", key, value));
        }
        assert_eq!(seen, vec!["x=1", "y=2"]);
    }

    #[test]
    fn test_serialize_preserves_order_and_redacts() {
        let mut args = Args::new();
        args.put("name", "bob");
        args.put("password", SecretString::from("s3cret"));
        args.put("auto_cancel", 5u32);
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            json,
            r#"{"name":"bob","password":"[REDACTED]","auto_cancel":5}"#
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut args = Args::new();
        args.put("password", SecretString::from("s3cret"));
        assert!(!format!("{:?}", args).contains("s3cret"));
    }
}
