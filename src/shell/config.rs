// Configuration for the composition root.
//
// Every setting comes from the environment. Unset variables fall back to the defaults in
// `core::rules`; values that fail to parse are reported with the variable name.

use crate::core::rules::RegistrationRules;
use anyhow::Context;
use std::str::FromStr;

pub const MIN_LOGIN_LENGTH_VAR: &str = "REGISTRATION_MIN_LOGIN_LENGTH";
pub const MIN_PASSWORD_LENGTH_VAR: &str = "REGISTRATION_MIN_PASSWORD_LENGTH";
pub const MIN_AGE_VAR: &str = "REGISTRATION_MIN_AGE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub rules: RegistrationRules,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RegistrationRules::default();
        let rules = RegistrationRules {
            min_login_length: read_or(&lookup, MIN_LOGIN_LENGTH_VAR, defaults.min_login_length)?,
            min_password_length: read_or(
                &lookup,
                MIN_PASSWORD_LENGTH_VAR,
                defaults.min_password_length,
            )?,
            min_age: read_or(&lookup, MIN_AGE_VAR, defaults.min_age)?,
        };
        Ok(Self { rules })
    }
}

fn read_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value {raw:?} for {key}")),
    }
}
