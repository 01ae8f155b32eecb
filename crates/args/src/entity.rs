//! Entry-name merging for entity content.
//!
//! Responsibilities:
//! - Splunk returns an entity's name at `entry[].name`, not always inside
//!   `entry[].content`. [`Entry`] models that shape and
//!   [`attach_entry_name`] copies the name into the typed content.
//!
//! Explicitly does NOT handle:
//! - Fetching or paginating entries (the transport's job).
//! - Validation of name formats.

use serde::Deserialize;

/// Entity types whose name can be filled from the enclosing entry.
pub trait HasName {
    /// Set the name if the content did not carry one.
    fn set_name_if_empty(&mut self, name: String);
}

/// One `entry[]` element of an Atom/JSON entity response.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry<T> {
    pub name: String,
    pub content: T,
}

impl<T: HasName> Entry<T> {
    /// Consume the entry and return its content with the name attached.
    pub fn into_content(self) -> T {
        attach_entry_name(self.name, self.content)
    }
}

pub fn attach_entry_name<T: HasName>(entry_name: String, mut content: T) -> T {
    content.set_name_if_empty(entry_name);
    content
}
