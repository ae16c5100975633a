use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; `CV_ANALYZER_URL` and `REDIS_URL` switch backends on.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external CV analysis service, e.g. `http://localhost:8000/api/cv/public`.
    /// When unset the built-in pattern analyzer is used.
    pub cv_analyzer_url: Option<String>,
    pub cv_analyzer_timeout_secs: u64,
    /// When unset profiles live in process memory and are lost on restart.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cv_analyzer_url: optional_env("CV_ANALYZER_URL"),
            cv_analyzer_timeout_secs: std::env::var("CV_ANALYZER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("CV_ANALYZER_TIMEOUT_SECS must be a whole number of seconds")?,
            redis_url: optional_env("REDIS_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
