use std::{fmt::Display, str::FromStr};

use crate::server::{error::config::ConfigError, model::app::AuthSettings};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 15 * 60;

/// Server configuration read from the environment.
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_lifetime_secs: i64,
    pub password_hash_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &str| lookup(var).ok_or(ConfigError::MissingEnvVar(var.to_string()));

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let backend_url =
            lookup("BACKEND_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        let token_lifetime_secs =
            parse_or(&lookup, "JWT_EXPIRES_SECS", DEFAULT_TOKEN_LIFETIME_SECS)?;
        if token_lifetime_secs <= 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_EXPIRES_SECS".to_string(),
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let password_hash_cost = parse_or(&lookup, "PASSWORD_HASH_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&password_hash_cost) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PASSWORD_HASH_COST".to_string(),
                reason: "bcrypt cost must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            port,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            token_lifetime_secs,
            password_hash_cost,
        })
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            jwt_secret: self.jwt_secret.clone(),
            token_lifetime_secs: self.token_lifetime_secs,
            password_hash_cost: self.password_hash_cost,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
