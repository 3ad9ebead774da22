use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:5000/predict";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
/// 10 MiB, the form-size cap for uploaded CVs.
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 10 << 20;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scoring service endpoint that receives relayed uploads.
    pub upstream_url: Url,
    /// `None` disables the upstream timeout.
    pub upstream_timeout: Option<Duration>,
    pub allowed_origin: String,
    pub upload_limit_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream_url = env_or("UPSTREAM_URL", DEFAULT_UPSTREAM_URL);
        let upstream_url = Url::parse(&upstream_url)
            .with_context(|| format!("UPSTREAM_URL '{upstream_url}' is not a valid URL"))?;

        let timeout_secs = parse_env("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Config {
            upstream_url,
            upstream_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            allowed_origin: env_or("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
            upload_limit_bytes: parse_env("UPLOAD_LIMIT_BYTES", DEFAULT_UPLOAD_LIMIT_BYTES)?,
            port: parse_env("PORT", 4000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
