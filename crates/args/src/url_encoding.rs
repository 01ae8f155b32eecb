//! Percent-encoding for REST paths and form/query components.
//!
//! Resource names (usernames, search IDs) are interpolated into paths and
//! argument values into query strings; both need encoding so that a `/`,
//! `&`, or `=` inside a value cannot change the request's structure.
//!
//! # Example
//!
//! ```
//! use splunk_args::url_encoding::{encode_path_segment, entity_path, USERS};
//!
//! assert_eq!(encode_path_segment("user/name"), "user%2Fname");
//! assert_eq!(entity_path(USERS, "jo doe"), "authentication/users/jo%20doe");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_encode};

/// Search job collection.
pub const SEARCH_JOBS: &str = "search/jobs";
/// User account collection.
pub const USERS: &str = "authentication/users";
/// Stored credential collection.
pub const PASSWORDS: &str = "storage/passwords";

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters with special meaning in Splunk REST
/// paths. `%` is included to prevent double-decoding and `/` to prevent
/// path traversal. `:` is left alone since Splunk stanza names use it.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Characters that must be percent-encoded in a form or query component.
///
/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`).
pub const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use splunk_args::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("user name"), "user%20name");
/// assert_eq!(encode_path_segment("user%test"), "user%25test");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode a parameter name or value for a query string or form body.
pub fn encode_query_component(component: &str) -> String {
    percent_encode(component.as_bytes(), QUERY_COMPONENT_ENCODE_SET).to_string()
}

/// Build the relative REST path of one entity within a collection.
///
/// The collection is trusted (one of the constants above); the name is
/// encoded as a single path segment.
pub fn entity_path(collection: &str, name: &str) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        encode_path_segment(name)
    )
}
