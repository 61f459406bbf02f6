//! # Rates Configuration
//!
//! Configuration for the exchange-rate API client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     NAMIB_RATES_BASE_URL=https://v6.exchangerate-api.com/v6            │
//! │     NAMIB_RATES_API_KEY=xxxxxxxxxxxx                                   │
//! │                                                                         │
//! │  2. Explicit values passed to RatesConfig::new                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     base_url = public exchangerate-api v6 endpoint                     │
//! │     api_key  = "" (requests fail → rate falls back to 1.0)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing API key is not an initialization error: rate lookups will fail
//! and the service falls back to rate 1.0, which keeps pricing usable.

use std::env;
use std::time::Duration;

use tracing::debug;

/// Environment variable overriding the rate API base URL.
pub const ENV_BASE_URL: &str = "NAMIB_RATES_BASE_URL";

/// Environment variable carrying the rate API key.
pub const ENV_API_KEY: &str = "NAMIB_RATES_API_KEY";

/// Default base URL of the pair-conversion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Default request timeout for rate lookups.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Rates Config
// =============================================================================

/// Settings for the exchange-rate API client.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Base URL; the client appends `/{api_key}/pair/NAD/{code}`.
    pub base_url: String,

    /// Account key for the rate API.
    pub api_key: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl RatesConfig {
    /// Creates a config with explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        RatesConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Loads the config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(ENV_API_KEY).unwrap_or_default();

        debug!(base_url = %base_url, has_api_key = !api_key.is_empty(), "rates config loaded");

        RatesConfig {
            base_url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RatesConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_explicit_config() {
        let config =
            RatesConfig::new("http://localhost:8080", "test-key").with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
