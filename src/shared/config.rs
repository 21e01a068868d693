use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GCS_PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";
const DEFAULT_OWNER_NAME: &str = "Portfolio Owner";
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 15 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Process-level settings.
///
/// Backends are optional: a missing `DATABASE_URL`,
/// `REDIS_URL` or `GCS_BUCKET` does not stop the server. Public reads then
/// degrade to empty results and admin writes fail with a "not configured"
/// error.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub gcs_bucket: Option<String>,
    pub gcs_public_base_url: String,
    pub owner_name: String,
    pub admin_email: Option<String>,
    pub admin_password_hash: Option<String>,
    pub login_max_attempts: u32,
    pub login_window_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            database_url: get("DATABASE_URL"),
            redis_url: get("REDIS_URL"),
            gcs_bucket: get("GCS_BUCKET"),
            gcs_public_base_url: get("GCS_PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GCS_PUBLIC_BASE_URL.to_string()),
            owner_name: get("OWNER_NAME").unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            admin_email: get("ADMIN_EMAIL").map(|email| email.to_lowercase()),
            admin_password_hash: get("ADMIN_PASSWORD_HASH"),
            login_max_attempts: parse_or(
                "LOGIN_MAX_ATTEMPTS",
                get("LOGIN_MAX_ATTEMPTS"),
                DEFAULT_LOGIN_MAX_ATTEMPTS,
            )?,
            login_window_secs: parse_or(
                "LOGIN_WINDOW_SECS",
                get("LOGIN_WINDOW_SECS"),
                DEFAULT_LOGIN_WINDOW_SECS,
            )?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
