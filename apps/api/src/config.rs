use std::time::Duration;

use anyhow::{Context, Result};

use crate::salary::cache::{DEFAULT_CACHE_TTL, DEFAULT_LOOKUP_TIMEOUT};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Upstream salary service. When unset, lookups go to the local database.
    pub salary_api_url: Option<String>,
    pub salary_cache_ttl: Duration,
    pub salary_lookup_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            salary_api_url: optional_env("SALARY_API_URL"),
            salary_cache_ttl: Duration::from_secs(parse_env_or(
                "SALARY_CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL.as_secs(),
            )?),
            salary_lookup_timeout: Duration::from_secs(parse_env_or(
                "SALARY_LOOKUP_TIMEOUT_SECS",
                DEFAULT_LOOKUP_TIMEOUT.as_secs(),
            )?),
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
