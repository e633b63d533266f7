//! Admin console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BOOKSHOP_ADMIN_API_URL` - Base URL of the bookshop backend
//!   (default: `http://127.0.0.1:5000`)

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin console configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the backend exposing the books resource.
    pub api_base_url: Url,
}

impl AdminConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `BOOKSHOP_ADMIN_API_URL` is set but is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("BOOKSHOP_ADMIN_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_base_url = Url::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("BOOKSHOP_ADMIN_API_URL".to_string(), e.to_string())
        })?;

        Ok(Self { api_base_url })
    }

    /// Build a configuration for an explicit base URL.
    #[must_use]
    pub const fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }
}
