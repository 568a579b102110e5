//! Error types for client operations.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error taxonomy for the six-cities client.
///
/// Every failed network call settles into exactly one of these variants,
/// which rejected actions carry back into state. Errors propagate
/// unchanged: no retries, no swallowing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Transport-level failure (DNS, connect, TLS, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("HTTP error: status {status}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Deserialize(String),

    /// Input rejected client-side before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Token persistence failed (read or write).
    #[error("Token storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Returns `true` if the server answered 404 for the requested resource.
    ///
    /// A missing primary offer routes to the not-found page instead of the
    /// generic rejection path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use six_cities_client::error::ClientError;
    /// assert!(ClientError::Http { status: 404 }.is_not_found());
    /// assert!(!ClientError::Http { status: 500 }.is_not_found());
    /// assert!(!ClientError::Timeout.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404 })
    }

    /// Returns `true` if the server rejected the request as unauthenticated.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Deserialize(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
