//! Runtime settings
//!
//! Timeouts and logging options read from the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings, immutable after startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Request configuration
    pub request: RequestConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Deadline for one upstream call in seconds
    pub upstream_timeout: u64,
    /// Deadline for handling one inbound request in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request: RequestConfig {
                upstream_timeout: 10,
                timeout: 15,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl Settings {
    /// Create a new settings instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            request: RequestConfig {
                upstream_timeout: get_env_or_default("UPSTREAM_TIMEOUT", "10")
                    .parse()
                    .context("Invalid upstream timeout value")?,
                timeout: get_env_or_default("REQUEST_TIMEOUT", "15")
                    .parse()
                    .context("Invalid request timeout")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.request.upstream_timeout == 0 || self.request.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        // the upstream deadline has to fire first so its failure reaches the caller
        if self.request.timeout <= self.request.upstream_timeout {
            anyhow::bail!(
                "Request timeout ({}s) must exceed upstream timeout ({}s)",
                self.request.timeout,
                self.request.upstream_timeout
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.request.upstream_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request.timeout)
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
