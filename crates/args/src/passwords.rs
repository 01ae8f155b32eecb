//! Stored credential entity (`storage/passwords`).
//!
//! A typed view over the `content` object of one credential entry. All three
//! password representations are held as `SecretString` so a `Debug` print of
//! a credential never shows them.

use secrecy::SecretString;
use serde::Deserialize;

use crate::serde_helpers::opt_secret_string;
use crate::url_encoding::{PASSWORDS, entity_path};

/// A credential stored in Splunk's secure storage.
#[derive(Debug, Clone, Deserialize)]
pub struct Password {
    #[serde(default)]
    pub username: String,
    /// Realm the credential belongs to; absent for realm-less credentials.
    #[serde(default)]
    pub realm: Option<String>,
    /// The masked password as displayed by the server.
    #[serde(default, deserialize_with = "opt_secret_string")]
    pub password: Option<SecretString>,
    /// The decrypted password. Only returned to sufficiently privileged users.
    #[serde(default, deserialize_with = "opt_secret_string")]
    pub clear_password: Option<SecretString>,
    /// The password as encrypted at rest.
    #[serde(default, deserialize_with = "opt_secret_string")]
    pub encr_password: Option<SecretString>,
}

impl Password {
    /// A credential is named by its username.
    pub fn name(&self) -> &str {
        &self.username
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// The server-side entity name: `realm:username:`, with an empty realm
    /// when none is set. `:` inside either part is escaped as `\:`.
    pub fn entity_name(&self) -> String {
        format!(
            "{}:{}:",
            escape_colons(self.realm.as_deref().unwrap_or("")),
            escape_colons(&self.username)
        )
    }

    /// Relative REST path of this credential.
    pub fn path(&self) -> String {
        entity_path(PASSWORDS, &self.entity_name())
    }
}

fn escape_colons(s: &str) -> String {
    s.replace(':', "\\:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_deserialize_password() {
        let json = r#"{
            "username": "svc_account",
            "realm": "splunk_app",
            "password": "********",
            "clear_password": "hunter2",
            "encr_password": "$7$abc"
        }"#;
        let credential: Password = serde_json::from_str(json).unwrap();
        assert_eq!(credential.name(), "svc_account");
        assert_eq!(credential.realm(), Some("splunk_app"));
        assert_eq!(
            credential.clear_password.as_ref().unwrap().expose_secret(),
            "hunter2"
        );
        assert_eq!(
            credential.encr_password.as_ref().unwrap().expose_secret(),
            "$7$abc"
        );
        assert_eq!(credential.password.as_ref().unwrap().expose_secret(), "********");
    }

    #[test]
    fn test_realm_defaults_to_none() {
        let credential: Password = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        assert_eq!(credential.realm(), None);
        assert!(credential.clear_password.is_none());
        assert_eq!(credential.entity_name(), ":bob:");
    }

    #[test]
    fn test_debug_does_not_expose_secrets() {
        let credential: Password =
            serde_json::from_str(r#"{"username": "bob", "clear_password": "hunter2"}"#).unwrap();
        assert!(!format!("{:?}", credential).contains("hunter2"));
    }

    #[test]
    fn test_entity_name_escapes_colons() {
        let credential: Password =
            serde_json::from_str(r#"{"username": "a:b", "realm": "r"}"#).unwrap();
        assert_eq!(credential.entity_name(), "r:a\\:b:");
        assert_eq!(credential.path(), "storage/passwords/r:a%5C:b:");
    }
}
