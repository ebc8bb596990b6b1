//! Configuration Module
//!
//! Handles loading the users endpoint and cache settings from environment variables.

use std::env;
use std::time::Duration;

/// Default endpoint serving `{ "users": [...] }`
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/users";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the users API
    pub api_url: String,
    /// How long fetched users stay cached, in seconds
    pub cache_ttl: u64,
    /// Per-request timeout applied by the HTTP client, in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `USERS_API_URL` - Users endpoint (default: https://dummyjson.com/users)
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("USERS_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: 300,
            request_timeout: 30,
        }
    }
}
