//! REST API client trait.
//!
//! This is the HTTP seam of the client: one method per server
//! operation, all returning `Result` with errors propagated unchanged.
//! Fail fast, no retries, no response transformation.

use crate::error::Result;
use crate::state::{AuthData, Comment, Offer, OfferId, UserInfo};

/// Six-cities REST API client.
///
/// # Implementation Notes
///
/// - Requests carry the stored session token in the `x-token` header
///   when one is present
/// - Non-2xx statuses map to `ClientError::Http { status }`
/// - Transport failures map to `Timeout` / `Network`
pub trait OffersApi: Send + Sync {
    /// Fetch the full offer catalog. GET `/offers`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn fetch_offers(&self) -> impl std::future::Future<Output = Result<Vec<Offer>>> + Send;

    /// Fetch a single offer. GET `/offers/{id}`.
    ///
    /// A missing offer surfaces as `ClientError::Http { status: 404 }`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn fetch_offer(&self, id: OfferId) -> impl std::future::Future<Output = Result<Offer>> + Send;

    /// Fetch offers near the given one. GET `/offers/{id}/nearby`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn fetch_nearby(
        &self,
        id: OfferId,
    ) -> impl std::future::Future<Output = Result<Vec<Offer>>> + Send;

    /// Fetch the reviews for an offer. GET `/comments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn fetch_comments(
        &self,
        id: OfferId,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>>> + Send;

    /// Publish a review. POST `/comments/{id}`.
    ///
    /// Returns the server's refreshed comment list for the offer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn post_comment(
        &self,
        id: OfferId,
        rating: u8,
        text: String,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>>> + Send;

    /// Fetch the bookmarked offers. GET `/favorite`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn fetch_favorites(&self) -> impl std::future::Future<Output = Result<Vec<Offer>>> + Send;

    /// Toggle an offer bookmark. POST `/favorite/{id}/{1|0}`.
    ///
    /// Returns the server's authoritative offer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not decode.
    fn set_favorite(
        &self,
        id: OfferId,
        flag: bool,
    ) -> impl std::future::Future<Output = Result<Offer>> + Send;

    /// Check whether the stored token maps to a valid session.
    /// GET `/login`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))`: valid session
    /// - `Ok(None)`: server answered 401 (no valid session)
    /// - `Err(...)`: any other failure
    ///
    /// # Errors
    ///
    /// Returns error if the request fails for a reason other than 401.
    fn check_auth(&self) -> impl std::future::Future<Output = Result<Option<UserInfo>>> + Send;

    /// Authenticate with credentials. POST `/login`.
    ///
    /// The returned user carries the fresh session token.
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected or the request fails.
    fn login(&self, auth: AuthData)
    -> impl std::future::Future<Output = Result<UserInfo>> + Send;

    /// Terminate the session. DELETE `/logout`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    fn logout(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}
