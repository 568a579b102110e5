//! Application routes.
//!
//! Navigation targets produced by reducers. The UI layer owns the actual
//! routing table; reducers only name destinations through the injected
//! `Navigator`.

use crate::state::OfferId;

/// Navigation target within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Offer catalog for the selected city.
    Main,

    /// Login form.
    Login,

    /// Favorite offers overview.
    Favorites,

    /// Detail page for a single offer.
    Offer(OfferId),

    /// Not-found page (missing offer, unknown path).
    NotFound,
}

impl AppRoute {
    /// Render the route as a URL path.
    #[must_use]
    pub fn as_path(&self) -> String {
        match self {
            Self::Main => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Favorites => "/favorites".to_string(),
            Self::Offer(id) => format!("/offer/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(AppRoute::Main.as_path(), "/");
        assert_eq!(AppRoute::Login.as_path(), "/login");
        assert_eq!(AppRoute::Favorites.as_path(), "/favorites");
        assert_eq!(AppRoute::Offer(OfferId(7)).as_path(), "/offer/7");
        assert_eq!(AppRoute::NotFound.as_path(), "/404");
    }

    #[test]
    fn test_display_matches_path() {
        assert_eq!(AppRoute::Favorites.to_string(), "/favorites");
    }
}
