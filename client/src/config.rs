//! Client configuration.
//!
//! Configuration values should be provided by the application, not
//! hardcoded; defaults match the published six-cities REST service.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_NEARBY_LIMIT, DEFAULT_REQUEST_TIMEOUT_MS};
use std::time::Duration;

/// Client configuration.
///
/// # Example
///
/// ```
/// use six_cities_client::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://staging.example.com/six-cities".to_string())
///     .with_request_timeout(Duration::from_secs(10))
///     .with_nearby_limit(5);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout. The request fails with a timeout error once
    /// this elapses, whether or not bytes have arrived.
    ///
    /// Default: 5000 ms
    pub request_timeout: Duration,

    /// Maximum number of nearby offers kept for the detail page.
    ///
    /// Default: 3
    pub nearby_limit: usize,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            nearby_limit: DEFAULT_NEARBY_LIMIT,
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the nearby-offers limit.
    #[must_use]
    pub const fn with_nearby_limit(mut self, limit: usize) -> Self {
        self.nearby_limit = limit;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
        assert_eq!(config.nearby_limit, 3);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://example.com".to_string())
            .with_request_timeout(Duration::from_secs(2))
            .with_nearby_limit(10);

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.nearby_limit, 10);
    }
}
