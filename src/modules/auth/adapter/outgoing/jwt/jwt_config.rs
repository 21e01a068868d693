use std::env;

use crate::shared::config::{non_empty, parse_or, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_SESSION_EXPIRY: i64 = 8 * 3600;
const MAX_SESSION_EXPIRY: i64 = 7 * 86400;
const DEFAULT_ISSUER: &str = "portfolio";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// `Ok(None)` when `JWT_SECRET` is unset: the server still starts but
    /// cannot issue or verify admin sessions.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));

        let Some(secret_key) = get("JWT_SECRET") else {
            return Ok(None);
        };

        // HS256 requires at least 32 bytes
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: format!("{} characters, need at least {MIN_SECRET_LEN}", secret_key.len()),
            });
        }

        // Admin sessions last a working day by default, at most a week.
        let session_expiry = parse_or(
            "JWT_SESSION_EXPIRY",
            get("JWT_SESSION_EXPIRY"),
            DEFAULT_SESSION_EXPIRY,
        )?;
        if session_expiry <= 0 || session_expiry > MAX_SESSION_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                value: session_expiry.to_string(),
            });
        }

        Ok(Some(Self {
            secret_key,
            issuer: get("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            session_expiry,
        }))
    }
}
