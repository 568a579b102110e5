//! Client state and domain model.
//!
//! Wire types deserialize straight from the REST payloads (camelCase
//! renames) and are never computed locally: `Offer::is_favorite` only
//! changes through a server round trip.
//!
//! State mutation follows the three-phase lifecycle: a command flips its
//! slice to `Pending`, and only the matching terminal event writes the
//! result (`Fulfilled` replaces the collection wholesale, `Rejected`
//! leaves the previous value intact).

use crate::error::ClientError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use six_cities_core::effect::ScopeId;

use crate::constants::review;

/// Opaque offer identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OfferId(pub u64);

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic point with a map zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Map zoom level.
    pub zoom: u8,
}

/// A city offers are grouped under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// City name as shown in the catalog filter.
    pub name: String,

    /// Map center for the city.
    pub location: Location,
}

impl City {
    /// The default catalog city.
    #[must_use]
    pub fn paris() -> Self {
        Self {
            name: "Paris".to_string(),
            location: Location {
                latitude: 48.856_61,
                longitude: 2.351_499,
                zoom: 13,
            },
        }
    }
}

impl Default for City {
    fn default() -> Self {
        Self::paris()
    }
}

/// Offer host, also used as the comment author shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    /// Server-assigned user id.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Whether the user has "pro" status.
    pub is_pro: bool,
}

/// A rental offer as served by the REST API.
///
/// Fetched, never locally constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Offer identifier.
    pub id: OfferId,

    /// Listing title.
    pub title: String,

    /// Accommodation kind (apartment, room, house, hotel).
    #[serde(rename = "type")]
    pub kind: String,

    /// Price per night.
    pub price: u32,

    /// Aggregate rating, 0.0 to 5.0.
    pub rating: f64,

    /// City the offer belongs to.
    pub city: City,

    /// Offer position on the map.
    pub location: Location,

    /// Host details.
    pub host: Host,

    /// Gallery image URLs.
    pub images: Vec<String>,

    /// Card preview image URL.
    pub preview_image: String,

    /// Amenities list.
    pub goods: Vec<String>,

    /// Listing description.
    pub description: String,

    /// Number of bedrooms.
    pub bedrooms: u8,

    /// Maximum number of guests.
    pub max_adults: u8,

    /// Premium badge flag.
    pub is_premium: bool,

    /// Whether the current user bookmarked this offer.
    ///
    /// Server-authoritative; changes only via `set_favorite`.
    pub is_favorite: bool,
}

/// A published review on an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,

    /// Publication timestamp.
    pub date: DateTime<Utc>,

    /// Comment author.
    pub user: Host,

    /// Rating given, 1 to 5.
    pub rating: u8,

    /// Review text.
    pub comment: String,
}

/// Authenticated user as returned by the session endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Server-assigned user id.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Login email.
    pub email: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Whether the user has "pro" status.
    pub is_pro: bool,

    /// Session token to carry on subsequent requests.
    pub token: String,
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    /// Login email.
    pub email: String,

    /// Password, sent once over the login call and never stored.
    pub password: String,
}

/// Session authorization status.
///
/// Starts `Unknown`; becomes `Auth` only after a successful session
/// check or login, `NoAuth` on check failure or logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    /// Session not yet checked.
    #[default]
    Unknown,

    /// Valid session present.
    Auth,

    /// No valid session.
    NoAuth,
}

/// Explicit request lifecycle phase for a state slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// No request issued yet.
    #[default]
    Idle,

    /// Command dispatched, terminal event not yet settled.
    Pending,

    /// Last request succeeded.
    Fulfilled,

    /// Last request failed; previous data retained.
    Rejected,
}

impl RequestPhase {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// In-progress review form contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewDraft {
    /// Selected star rating, if any.
    pub rating: Option<u8>,

    /// Review text.
    pub comment: String,
}

impl ReviewDraft {
    /// Returns `true` if the draft passes client-side validation.
    ///
    /// A draft is submittable when a rating between 1 and 5 is selected
    /// and the comment is 50 to 300 characters long.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        let rating_ok = matches!(
            self.rating,
            Some(r) if (review::RATING_MIN..=review::RATING_MAX).contains(&r)
        );
        let length = self.comment.chars().count();
        rating_ok && (review::MIN_LENGTH..=review::MAX_LENGTH).contains(&length)
    }
}

/// A recorded failure: what went wrong and when.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// The settled error.
    pub error: ClientError,

    /// When the rejection was recorded.
    pub at: DateTime<Utc>,
}

/// Session slice: who is logged in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Current authorization status.
    pub authorization_status: AuthorizationStatus,

    /// Authenticated user, if any.
    pub user: Option<UserInfo>,

    /// Login request lifecycle.
    pub login_phase: RequestPhase,
}

/// Catalog slice: all offers plus the selected city filter.
#[derive(Debug, Clone, PartialEq)]
pub struct OffersState {
    /// Full offer catalog.
    pub items: Vec<Offer>,

    /// Catalog fetch lifecycle.
    pub phase: RequestPhase,

    /// Selected city filter.
    pub city: City,
}

impl Default for OffersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: RequestPhase::Idle,
            city: City::default(),
        }
    }
}

/// Favorites slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// Bookmarked offers.
    pub items: Vec<Offer>,

    /// Favorites fetch lifecycle.
    pub phase: RequestPhase,
}

/// Offer detail page slice.
///
/// Everything here is tied to one offer's lifetime on screen; the
/// cancellation scope guarantees in-flight fetches die with the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfferPageState {
    /// The offer being viewed.
    pub current: Option<Offer>,

    /// Primary offer fetch lifecycle.
    pub load_phase: RequestPhase,

    /// Reviews for the current offer.
    pub comments: Vec<Comment>,

    /// Comments fetch lifecycle.
    pub comments_phase: RequestPhase,

    /// Offers near the current one, trimmed to the configured limit.
    pub nearby: Vec<Offer>,

    /// Nearby fetch lifecycle.
    pub nearby_phase: RequestPhase,

    /// Review form contents.
    pub draft: ReviewDraft,

    /// Whether the review form is disabled while a submission is in flight.
    pub form_blocked: bool,

    /// Review submission lifecycle.
    pub submit_phase: RequestPhase,

    /// Cancellation scope for this page's in-flight effects.
    pub scope: Option<ScopeId>,
}

/// Root client state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Session slice.
    pub session: SessionState,

    /// Catalog slice.
    pub offers: OffersState,

    /// Favorites slice.
    pub favorites: FavoritesState,

    /// Offer detail page slice.
    pub offer_page: OfferPageState,

    /// Most recent settled error, for UI surfacing.
    pub last_error: Option<ErrorInfo>,
}

impl AppState {
    /// Record a settled error for UI surfacing.
    pub fn record_error(&mut self, error: ClientError, at: DateTime<Utc>) {
        self.last_error = Some(ErrorInfo { error, at });
    }

    /// Patch a server-authoritative offer into every collection holding
    /// its id.
    ///
    /// Favorites membership follows the offer's `is_favorite` flag.
    pub fn patch_offer(&mut self, offer: &Offer) {
        if let Some(existing) = self.offers.items.iter_mut().find(|o| o.id == offer.id) {
            *existing = offer.clone();
        }

        if let Some(existing) = self.offer_page.nearby.iter_mut().find(|o| o.id == offer.id) {
            *existing = offer.clone();
        }

        if self
            .offer_page
            .current
            .as_ref()
            .is_some_and(|o| o.id == offer.id)
        {
            self.offer_page.current = Some(offer.clone());
        }

        if offer.is_favorite {
            if let Some(existing) = self.favorites.items.iter_mut().find(|o| o.id == offer.id) {
                *existing = offer.clone();
            } else {
                self.favorites.items.push(offer.clone());
            }
        } else {
            self.favorites.items.retain(|o| o.id != offer.id);
        }
    }
}

/// Test fixtures shared across unit tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{City, Comment, Host, Offer, OfferId, UserInfo};
    use chrono::Utc;

    pub(crate) fn sample_offer(id: OfferId) -> Offer {
        Offer {
            id,
            title: "Test offer".to_string(),
            kind: "apartment".to_string(),
            price: 100,
            rating: 4.0,
            city: City::paris(),
            location: City::paris().location,
            host: Host {
                id: 1,
                name: "Host".to_string(),
                avatar_url: "img/avatar.jpg".to_string(),
                is_pro: false,
            },
            images: vec![],
            preview_image: "img/preview.jpg".to_string(),
            goods: vec![],
            description: "Test description".to_string(),
            bedrooms: 1,
            max_adults: 2,
            is_premium: false,
            is_favorite: false,
        }
    }

    pub(crate) fn sample_user() -> UserInfo {
        UserInfo {
            id: 1,
            name: "Oliver".to_string(),
            email: "oliver@example.com".to_string(),
            avatar_url: "img/avatar.jpg".to_string(),
            is_pro: false,
            token: "secret-token".to_string(),
        }
    }

    pub(crate) fn sample_comment(id: u64) -> Comment {
        Comment {
            id,
            date: Utc::now(),
            user: Host {
                id: 2,
                name: "Reviewer".to_string(),
                avatar_url: "img/avatar.jpg".to_string(),
                is_pro: true,
            },
            rating: 4,
            comment: "A quiet cozy house".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests are allowed to panic on failures
mod tests {
    use super::fixtures::sample_offer;
    use super::*;
    use proptest::prelude::*;

    fn draft(rating: Option<u8>, len: usize) -> ReviewDraft {
        ReviewDraft {
            rating,
            comment: "a".repeat(len),
        }
    }

    #[test]
    fn test_draft_submittable_bounds() {
        assert!(draft(Some(1), 50).is_submittable());
        assert!(draft(Some(5), 300).is_submittable());
        assert!(!draft(Some(3), 49).is_submittable());
        assert!(!draft(Some(3), 301).is_submittable());
        assert!(!draft(None, 100).is_submittable());
        assert!(!draft(Some(0), 100).is_submittable());
        assert!(!draft(Some(6), 100).is_submittable());
    }

    proptest! {
        #[test]
        fn prop_draft_submittable_iff_in_bounds(rating in 0u8..=10, len in 0usize..=400) {
            let d = draft(Some(rating), len);
            let expected = (1..=5).contains(&rating) && (50..=300).contains(&len);
            prop_assert_eq!(d.is_submittable(), expected);
        }

        #[test]
        fn prop_draft_without_rating_never_submittable(len in 0usize..=400) {
            prop_assert!(!draft(None, len).is_submittable());
        }
    }

    #[test]
    fn test_offer_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "id": 12,
            "title": "Canal View Prinsengracht",
            "type": "apartment",
            "price": 120,
            "rating": 4.8,
            "city": {
                "name": "Amsterdam",
                "location": { "latitude": 52.37454, "longitude": 4.897976, "zoom": 13 }
            },
            "location": { "latitude": 52.35514, "longitude": 4.673877, "zoom": 16 },
            "host": {
                "id": 3,
                "name": "Angelina",
                "avatarUrl": "img/avatar-angelina.jpg",
                "isPro": true
            },
            "images": ["img/1.png", "img/2.png"],
            "previewImage": "img/apartment-01.jpg",
            "goods": ["Heating", "Kitchen"],
            "description": "A new spacious villa.",
            "bedrooms": 3,
            "maxAdults": 4,
            "isPremium": true,
            "isFavorite": false
        });

        let offer: Offer = serde_json::from_value(json).unwrap();
        assert_eq!(offer.id, OfferId(12));
        assert_eq!(offer.kind, "apartment");
        assert_eq!(offer.host.name, "Angelina");
        assert!(offer.is_premium);
        assert!(!offer.is_favorite);
    }

    #[test]
    fn test_patch_offer_adds_and_removes_favorites() {
        let mut state = AppState::default();
        let mut offer = sample_offer(OfferId(1));

        offer.is_favorite = true;
        state.patch_offer(&offer);
        assert_eq!(state.favorites.items.len(), 1);

        offer.is_favorite = false;
        state.patch_offer(&offer);
        assert!(state.favorites.items.is_empty());
    }

    #[test]
    fn test_patch_offer_updates_catalog_and_current() {
        let mut state = AppState::default();
        let offer = sample_offer(OfferId(1));
        state.offers.items = vec![offer.clone(), sample_offer(OfferId(2))];
        state.offer_page.current = Some(offer.clone());

        let mut updated = offer;
        updated.is_favorite = true;
        state.patch_offer(&updated);

        assert!(state.offers.items[0].is_favorite);
        assert!(!state.offers.items[1].is_favorite);
        assert!(state.offer_page.current.as_ref().unwrap().is_favorite);
    }
}
