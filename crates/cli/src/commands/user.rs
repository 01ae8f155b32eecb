//! User command implementation.
//!
//! Responsibilities:
//! - Stage the arguments for creating a user with one or more roles.
//! - Set the optional profile fields through the typed setters.
//!
//! Does NOT handle:
//! - Prompting for a password; it comes from a flag or the environment.
//!
//! Invariants:
//! - The password is held as a SecretString and never logged.
//! - Role names are passed through without validation.

use anyhow::Result;
use clap::Args as ClapArgs;
use secrecy::SecretString;
use splunk_args::{Args, CreateUserArgs, ParamKey};
use tracing::info;

use crate::error::CliError;

#[derive(Debug, ClapArgs)]
pub struct UserOptions {
    /// Username
    pub name: String,

    /// Role to assign (repeatable, at least one required)
    #[arg(short, long = "role", value_name = "ROLE", required = true)]
    pub roles: Vec<String>,

    /// Initial password
    #[arg(
        short,
        long,
        env = "SPLUNK_NEW_USER_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Real name of the user
    #[arg(long)]
    pub realname: Option<String>,

    /// Email address of the user
    #[arg(long)]
    pub email: Option<String>,

    /// Default app for the user
    #[arg(long)]
    pub default_app: Option<String>,
}

/// Build the user-creation arguments for `opts`.
pub fn run(opts: UserOptions) -> Result<Args> {
    info!(name = %opts.name, "Staging user creation arguments");

    let password = opts
        .password
        .filter(|p| !p.is_empty())
        .map(SecretString::from)
        .ok_or(CliError::MissingPassword)?;

    let mut roles = opts.roles.into_iter();
    let first_role = roles.next().unwrap_or_default();
    let mut user = CreateUserArgs::new(opts.name, password, first_role);
    for role in roles {
        user = user.add_role(role);
    }

    if let Some(realname) = opts.realname {
        user = user.realname(realname);
    }
    if let Some(email) = opts.email {
        user = user.email(email);
    }
    if let Some(app) = opts.default_app {
        user = user.default_app(app);
    }

    Ok(user.into_args())
}
