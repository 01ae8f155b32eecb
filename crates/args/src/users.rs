//! User accounts (`authentication/users`).
//!
//! This module contains the arguments for creating a user and the typed
//! view of a user entity's content.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::Args;
use crate::entity::HasName;
use crate::keys::ParamKey;
use crate::url_encoding::{USERS, entity_path};
use crate::value::ArgValue;

/// Arguments for creating a user.
///
/// The account name, password, and at least one role are required by the
/// endpoint, so they are constructor arguments. Caller-supplied extra
/// arguments are applied last and win on key collision.
///
/// ```
/// use secrecy::SecretString;
/// use splunk_args::{ArgValue, CreateUserArgs};
///
/// let args = CreateUserArgs::new("jdoe", SecretString::from("changeme"), "user")
///     .roles(["user", "power"])
///     .into_args();
/// assert_eq!(args.get("roles"), Some(&ArgValue::from("user,power")));
/// ```
#[derive(Debug, Clone)]
pub struct CreateUserArgs {
    name: String,
    password: SecretString,
    roles: Vec<String>,
    extra: Args,
}

impl CreateUserArgs {
    pub fn new(
        name: impl Into<String>,
        password: SecretString,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password,
            roles: vec![role.into()],
            extra: Args::new(),
        }
    }

    /// Replace the roles. Multiple roles are sent comma-joined.
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Append a role, keeping the ones already set.
    pub fn add_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Full name shown for the account.
    pub fn realname(mut self, realname: impl Into<String>) -> Self {
        self.extra.put(ParamKey::RealName, ArgValue::Text(realname.into()));
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.extra.put(ParamKey::Email, ArgValue::Text(email.into()));
        self
    }

    /// App the user lands in after logging in.
    pub fn default_app(mut self, app: impl Into<String>) -> Self {
        self.extra.put(ParamKey::DefaultApp, ArgValue::Text(app.into()));
        self
    }

    /// Additional endpoint arguments with no typed setter.
    pub fn extra(mut self, extra: &Args) -> Self {
        self.extra.put_all(extra);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative REST path the created user will live at.
    pub fn path(&self) -> String {
        entity_path(USERS, &self.name)
    }

    pub fn into_args(self) -> Args {
        let mut args = Args::new();
        args.put(ParamKey::Name, ArgValue::Text(self.name));
        args.put(ParamKey::Password, self.password);
        args.put_list(ParamKey::Roles, &self.roles);
        args.put_all(&self.extra);
        debug!(
            keys = ?args.keys().collect::<Vec<_>>(),
            "Built user creation arguments"
        );
        args
    }
}

impl From<CreateUserArgs> for Args {
    fn from(user: CreateUserArgs) -> Self {
        user.into_args()
    }
}

/// Splunk user information.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: String,
    pub realname: Option<String>,
    pub email: Option<String>,
    /// Account type, e.g. "Splunk" or "SSO".
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    #[serde(rename = "defaultApp")]
    pub default_app: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::string_list_from_one_or_many"
    )]
    pub roles: Vec<String>,
    #[serde(
        rename = "lastSuccessfulLogin",
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub last_successful_login: Option<u64>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl HasName for User {
    fn set_name_if_empty(&mut self, name: String) {
        if self.name.is_empty() {
            self.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entry;

    #[test]
    fn test_create_user_single_role() {
        let args = CreateUserArgs::new("jdoe", SecretString::from("pw"), "user").into_args();
        assert_eq!(
            args.keys().collect::<Vec<_>>(),
            vec!["name", "password", "roles"]
        );
        assert_eq!(args.get("roles"), Some(&ArgValue::from("user")));
        assert_eq!(args.get("password").map(|v| v.to_string()), Some("pw".to_string()));
        assert!(args.get("password").unwrap().is_secret());
    }

    #[test]
    fn test_add_role() {
        let args = CreateUserArgs::new("jdoe", SecretString::from("pw"), "user")
            .add_role("power")
            .into_args();
        assert_eq!(args.get("roles"), Some(&ArgValue::from("user,power")));
    }

    #[test]
    fn test_extra_wins_on_collision() {
        let mut extra = Args::new();
        extra.put("roles", "admin");
        extra.put("email", "jdoe@example.com");
        let args = CreateUserArgs::new("jdoe", SecretString::from("pw"), "user")
            .extra(&extra)
            .into_args();
        assert_eq!(args.get("roles"), Some(&ArgValue::from("admin")));
        assert_eq!(args.get("email"), Some(&ArgValue::from("jdoe@example.com")));
    }

    #[test]
    fn test_profile_setters_use_table_keys() {
        let args = CreateUserArgs::new("jdoe", SecretString::from("pw"), "user")
            .realname("Jane Doe")
            .email("jdoe@example.com")
            .default_app("search")
            .into_args();
        assert_eq!(
            args.keys().collect::<Vec<_>>(),
            vec!["name", "password", "roles", "realname", "email", "defaultApp"]
        );
        assert_eq!(args.get(ParamKey::RealName), Some(&ArgValue::from("Jane Doe")));
        assert_eq!(args.get(ParamKey::DefaultApp), Some(&ArgValue::from("search")));
    }

    #[test]
    fn test_extra_overrides_profile_setter() {
        let mut extra = Args::new();
        extra.put(ParamKey::Email, "other@example.com");
        let args = CreateUserArgs::new("jdoe", SecretString::from("pw"), "user")
            .email("jdoe@example.com")
            .extra(&extra)
            .into_args();
        assert_eq!(args.get("email"), Some(&ArgValue::from("other@example.com")));
    }

    #[test]
    fn test_path_encodes_name() {
        let user = CreateUserArgs::new("j doe", SecretString::from("pw"), "user");
        assert_eq!(user.name(), "j doe");
        assert_eq!(user.path(), "authentication/users/j%20doe");
    }

    #[test]
    fn test_debug_hides_password() {
        let user = CreateUserArgs::new("jdoe", SecretString::from("hunter2"), "user");
        assert!(!format!("{:?}", user).contains("hunter2"));
    }

    #[test]
    fn test_deserialize_user() {
        let json = r#"{
            "realname": "Administrator",
            "email": "admin@example.com",
            "type": "Splunk",
            "defaultApp": "search",
            "roles": ["admin", "power"],
            "lastSuccessfulLogin": "1737712345"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.user_type.as_deref(), Some("Splunk"));
        assert_eq!(user.default_app.as_deref(), Some("search"));
        assert!(user.has_role("power"));
        assert_eq!(user.last_successful_login, Some(1737712345));
    }

    #[test]
    fn test_entry_name_attached() {
        let json = r#"{"name": "admin", "content": {"roles": "admin"}}"#;
        let entry: Entry<User> = serde_json::from_str(json).unwrap();
        let user = entry.into_content();
        assert_eq!(user.name, "admin");
        assert_eq!(user.roles, vec!["admin"]);
    }
}
