//! Configuration management for the Candid CLI
//!
//! Settings come from environment variables (a `.env` file is loaded by
//! `main`) and are then overridden by command-line flags.

use crate::error::{CliError, Result};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Candid Premier v3 API base URL.
pub const DEFAULT_API_URL: &str = "https://api.candid.org/premier/v3";

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "CANDID_API_URL";

/// Environment variable holding the subscription key.
pub const API_KEY_ENV: &str = "CANDID_API_KEY";

/// Environment variable holding an optional request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "CANDID_API_TIMEOUT_SECS";

/// CLI configuration
#[derive(Clone, Default)]
pub struct Config {
    /// API base URL; identifiers are appended as the last path segment
    pub api_url: String,

    /// Subscription key sent with every request
    pub api_key: Option<String>,

    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

// Hand-written so the key never reaches logs through `{:?}`.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &self.masked_api_key())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(secs) = std::env::var(API_TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&secs)?);
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, api_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Get the API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Key suitable for display: first four characters, rest hidden
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            None => "(not set)".to_string(),
            Some(key) if key.chars().count() <= 4 => "****".to_string(),
            Some(key) => format!("{}****", key.chars().take(4).collect::<String>()),
        }
    }
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(CliError::config(format!(
            "{} must be a positive number of seconds, got '{}'",
            API_TIMEOUT_ENV, value
        ))),
    }
}
