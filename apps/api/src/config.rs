use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no configuration at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the JSON document backing the résumé.
    pub data_file: PathBuf,
    pub max_body_bytes: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3001,
            data_file: PathBuf::from("resume-data.json"),
            max_body_bytes: 100 * 1024,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            data_file: std::env::var("RESUME_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
