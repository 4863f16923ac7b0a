//! Client configuration
//!
//! Centralized configuration with environment variable support and
//! sensible defaults. A `.env` file in the working directory is honoured.

use crate::constants::{DEFAULT_AGENT_ENDPOINT, DEFAULT_BASE_URL};
use crate::error::ClientError;
use std::env;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin of the agent backend (e.g. "http://127.0.0.1:5000")
    pub base_url: String,
    /// Path of the ask endpoint (e.g. "/api/agent")
    pub endpoint: String,
    /// Request timeout in seconds (None = wait indefinitely)
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_AGENT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load variables from a `.env` file, if one exists
    ///
    /// Variables already present in the environment win.
    pub fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Failed to load .env file: {}", e),
        }
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("AGENT_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            endpoint: env::var("AGENT_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs: env::var("AGENT_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok()),
        }
    }

    /// Check that the configuration can produce a usable request URL
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::Config("base_url cannot be empty".to_string()));
        }
        if !self.endpoint.starts_with('/') {
            return Err(ClientError::Config(format!(
                "endpoint must start with '/': {}",
                self.endpoint
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ClientError::Config("timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    /// Full URL of the ask endpoint
    pub fn agent_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    /// Full URL of the backend root, used for reachability checks
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
