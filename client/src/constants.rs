//! Client constants.
//!
//! This module contains constant values shared across the client:
//! wire-protocol details and review validation bounds.

/// Request header carrying the session token.
pub const TOKEN_HEADER: &str = "x-token";

/// Default REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://14.design.pages.academy/six-cities";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Default number of nearby offers shown on the detail page.
pub const DEFAULT_NEARBY_LIMIT: usize = 3;

/// Review validation bounds.
pub mod review {
    /// Minimum review text length (characters).
    pub const MIN_LENGTH: usize = 50;

    /// Maximum review text length (characters).
    pub const MAX_LENGTH: usize = 300;

    /// Minimum rating value.
    pub const RATING_MIN: u8 = 1;

    /// Maximum rating value.
    pub const RATING_MAX: u8 = 5;
}

/// REST API endpoint paths.
pub mod endpoints {
    /// Offer catalog and single-offer resources.
    pub const OFFERS: &str = "/offers";

    /// Comment resources, keyed by offer id.
    pub const COMMENTS: &str = "/comments";

    /// Favorite offers collection and toggle endpoint.
    pub const FAVORITE: &str = "/favorite";

    /// Session check and login.
    pub const LOGIN: &str = "/login";

    /// Session termination.
    pub const LOGOUT: &str = "/logout";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_bounds() {
        assert!(review::MIN_LENGTH < review::MAX_LENGTH);
        assert!(review::RATING_MIN < review::RATING_MAX);
    }

    #[test]
    fn test_token_header_is_lowercase() {
        // Header names are matched case-insensitively on the wire, but the
        // server contract documents the lowercase form
        assert_eq!(TOKEN_HEADER, "x-token");
    }
}
