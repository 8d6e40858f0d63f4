//! # Client Configuration
//!
//! Loaded from environment variables (a `.env` file is honoured by the
//! binary):
//!
//! - `SALON_API_URL`: backend base URL including the `/api` prefix
//!   (default: `http://localhost:8080/api`)
//! - `SALON_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the salon backend
    pub api_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            request_timeout: 30,
            log_level: Level::INFO,
        }
    }

    /// Creates a ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SALON_API_URL` is set but is not an http(s) URL.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("SALON_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = validate_api_url(&api_url).wrap_err("Invalid SALON_API_URL value")?;

        let request_timeout = env::var("SALON_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            api_url,
            request_timeout,
            log_level,
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        eyre::bail!("expected an http(s) URL, got {:?}", raw);
    }
    Ok(trimmed.to_string())
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
