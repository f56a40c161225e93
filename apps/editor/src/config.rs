use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the resume backend, e.g. `https://api.example.com/prod`.
    pub resume_api_url: String,
    /// Bearer token forwarded on authenticated backend calls.
    pub resume_api_token: Option<String>,
    pub backend_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resume_api_url: require_env("RESUME_API_URL")?,
            resume_api_token: std::env::var("RESUME_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            backend_timeout_secs: std::env::var("BACKEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("BACKEND_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
