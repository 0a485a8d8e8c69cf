//! Env-driven configuration for the relay and the CLI.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults point at the public PicLumen API.
use std::env;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.piclumen.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub api_host: String,
    pub api_port: String,
    /// Only consulted by `relayctl`; the server always takes the token from the query.
    pub authorization_token: Option<String>,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        let timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid UPSTREAM_TIMEOUT_SECS '{}', falling back to {}", raw, DEFAULT_TIMEOUT_SECS);
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Config {
            upstream_url: env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            upstream_timeout: Duration::from_secs(timeout_secs),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8000".to_string()),
            authorization_token: env::var("AUTHORIZATION_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    pub fn log_env_vars() {
        for key in ["UPSTREAM_URL", "UPSTREAM_TIMEOUT_SECS", "API_HOST", "API_PORT"] {
            let value = env::var(key).unwrap_or_else(|_| "<unset>".to_string());
            tracing::info!("{}: {}", key, value);
        }
        // never echo the token itself
        let token = if env::var("AUTHORIZATION_TOKEN").is_ok() { "<set>" } else { "<unset>" };
        tracing::info!("AUTHORIZATION_TOKEN: {}", token);
    }
}
