use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Everything here has a default; CLI flags pick the server and the input path.
#[derive(Debug, Clone)]
pub struct Config {
    /// Overrides the host selected with `--server` when set.
    pub api_url: Option<String>,
    pub request_timeout: Duration,
    pub loop_pause: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: std::env::var("JDX_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            request_timeout: Duration::from_secs(
                parse_env_or("JDX_REQUEST_TIMEOUT_SECS", 120)
                    .context("JDX_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            loop_pause: Duration::from_secs(
                parse_env_or("JDX_LOOP_PAUSE_SECS", 0)
                    .context("JDX_LOOP_PAUSE_SECS must be a whole number of seconds")?,
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The base URL every request is issued against.
    pub fn base_url<'a>(&'a self, server_url: &'a str) -> &'a str {
        self.api_url.as_deref().unwrap_or(server_url)
    }
}

fn parse_env_or(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => Ok(raw.trim().parse::<u64>()?),
        Err(_) => Ok(default),
    }
}
