//! Mock REST API client for testing.

use crate::error::{ClientError, Result};
use crate::providers::api::OffersApi;
use crate::state::{AuthData, Comment, Offer, OfferId, UserInfo};
use std::sync::{Arc, Mutex};

/// A call recorded by [`MockApi`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `fetch_offers` was called.
    FetchOffers,

    /// `fetch_offer` was called.
    FetchOffer(OfferId),

    /// `fetch_nearby` was called.
    FetchNearby(OfferId),

    /// `fetch_comments` was called.
    FetchComments(OfferId),

    /// `post_comment` was called.
    PostComment {
        /// Target offer.
        id: OfferId,
        /// Submitted rating.
        rating: u8,
        /// Submitted text.
        text: String,
    },

    /// `fetch_favorites` was called.
    FetchFavorites,

    /// `set_favorite` was called.
    SetFavorite {
        /// Target offer.
        id: OfferId,
        /// Requested bookmark state.
        flag: bool,
    },

    /// `check_auth` was called.
    CheckAuth,

    /// `login` was called with this email.
    Login(String),

    /// `logout` was called.
    Logout,
}

#[derive(Default)]
struct Inner {
    latency: Option<std::time::Duration>,
    offers: Option<Result<Vec<Offer>>>,
    offer: Option<Result<Offer>>,
    nearby: Option<Result<Vec<Offer>>>,
    comments: Option<Result<Vec<Comment>>>,
    posted_comment: Option<Result<Vec<Comment>>>,
    favorites: Option<Result<Vec<Offer>>>,
    favorite_toggle: Option<Result<Offer>>,
    auth_check: Option<Result<Option<UserInfo>>>,
    login: Option<Result<UserInfo>>,
    logout: Option<Result<()>>,
    calls: Vec<RecordedCall>,
}

/// Mock REST API client.
///
/// Each operation answers with the programmed response; an unprogrammed
/// operation fails loudly so a test cannot silently depend on a call it
/// never set up. Every call is recorded.
///
/// # Example
///
/// ```
/// use six_cities_client::mocks::{MockApi, RecordedCall};
///
/// let api = MockApi::new();
/// api.set_offers(Ok(vec![]));
/// // ... drive the store ...
/// assert!(api.calls().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl MockApi {
    /// Create a mock with no programmed responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the `fetch_offers` response.
    pub fn set_offers(&self, response: Result<Vec<Offer>>) {
        self.inner.lock().unwrap().offers = Some(response);
    }

    /// Program the `fetch_offer` response.
    pub fn set_offer(&self, response: Result<Offer>) {
        self.inner.lock().unwrap().offer = Some(response);
    }

    /// Program the `fetch_nearby` response.
    pub fn set_nearby(&self, response: Result<Vec<Offer>>) {
        self.inner.lock().unwrap().nearby = Some(response);
    }

    /// Program the `fetch_comments` response.
    pub fn set_comments(&self, response: Result<Vec<Comment>>) {
        self.inner.lock().unwrap().comments = Some(response);
    }

    /// Program the `post_comment` response.
    pub fn set_posted_comment(&self, response: Result<Vec<Comment>>) {
        self.inner.lock().unwrap().posted_comment = Some(response);
    }

    /// Program the `fetch_favorites` response.
    pub fn set_favorites(&self, response: Result<Vec<Offer>>) {
        self.inner.lock().unwrap().favorites = Some(response);
    }

    /// Program the `set_favorite` response.
    pub fn set_favorite_toggle(&self, response: Result<Offer>) {
        self.inner.lock().unwrap().favorite_toggle = Some(response);
    }

    /// Program the `check_auth` response.
    pub fn set_auth_check(&self, response: Result<Option<UserInfo>>) {
        self.inner.lock().unwrap().auth_check = Some(response);
    }

    /// Program the `login` response.
    pub fn set_login(&self, response: Result<UserInfo>) {
        self.inner.lock().unwrap().login = Some(response);
    }

    /// Program the `logout` response.
    pub fn set_logout(&self, response: Result<()>) {
        self.inner.lock().unwrap().logout = Some(response);
    }

    /// Delay every response by the given duration.
    ///
    /// Lets tests keep a request in flight long enough to race it
    /// against cancellation.
    pub fn set_latency(&self, latency: std::time::Duration) {
        self.inner.lock().unwrap().latency = Some(latency);
    }

    /// All recorded calls, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of recorded calls matching the predicate.
    #[must_use]
    pub fn count_calls(&self, predicate: impl Fn(&RecordedCall) -> bool) -> usize {
        self.inner.lock().unwrap().calls.iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: RecordedCall) {
        self.inner.lock().unwrap().calls.push(call);
    }

    async fn delay(&self) {
        let latency = self.inner.lock().unwrap().latency;
        if let Some(duration) = latency {
            tokio::time::sleep(duration).await;
        }
    }

    fn respond<T: Clone>(&self, programmed: &Option<Result<T>>, operation: &str) -> Result<T> {
        programmed.clone().unwrap_or_else(|| {
            Err(ClientError::Network(format!(
                "mock: no response programmed for {operation}"
            )))
        })
    }
}

impl std::fmt::Debug for MockApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockApi").finish_non_exhaustive()
    }
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl OffersApi for MockApi {
    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        self.record(RecordedCall::FetchOffers);
        self.delay().await;
        let programmed = self.inner.lock().unwrap().offers.clone();
        self.respond(&programmed, "fetch_offers")
    }

    async fn fetch_offer(&self, id: OfferId) -> Result<Offer> {
        self.record(RecordedCall::FetchOffer(id));
        self.delay().await;
        let programmed = self.inner.lock().unwrap().offer.clone();
        self.respond(&programmed, "fetch_offer")
    }

    async fn fetch_nearby(&self, id: OfferId) -> Result<Vec<Offer>> {
        self.record(RecordedCall::FetchNearby(id));
        self.delay().await;
        let programmed = self.inner.lock().unwrap().nearby.clone();
        self.respond(&programmed, "fetch_nearby")
    }

    async fn fetch_comments(&self, id: OfferId) -> Result<Vec<Comment>> {
        self.record(RecordedCall::FetchComments(id));
        self.delay().await;
        let programmed = self.inner.lock().unwrap().comments.clone();
        self.respond(&programmed, "fetch_comments")
    }

    async fn post_comment(&self, id: OfferId, rating: u8, text: String) -> Result<Vec<Comment>> {
        self.record(RecordedCall::PostComment { id, rating, text });
        self.delay().await;
        let programmed = self.inner.lock().unwrap().posted_comment.clone();
        self.respond(&programmed, "post_comment")
    }

    async fn fetch_favorites(&self) -> Result<Vec<Offer>> {
        self.record(RecordedCall::FetchFavorites);
        self.delay().await;
        let programmed = self.inner.lock().unwrap().favorites.clone();
        self.respond(&programmed, "fetch_favorites")
    }

    async fn set_favorite(&self, id: OfferId, flag: bool) -> Result<Offer> {
        self.record(RecordedCall::SetFavorite { id, flag });
        self.delay().await;
        let programmed = self.inner.lock().unwrap().favorite_toggle.clone();
        self.respond(&programmed, "set_favorite")
    }

    async fn check_auth(&self) -> Result<Option<UserInfo>> {
        self.record(RecordedCall::CheckAuth);
        self.delay().await;
        let programmed = self.inner.lock().unwrap().auth_check.clone();
        self.respond(&programmed, "check_auth")
    }

    async fn login(&self, auth: AuthData) -> Result<UserInfo> {
        self.record(RecordedCall::Login(auth.email));
        self.delay().await;
        let programmed = self.inner.lock().unwrap().login.clone();
        self.respond(&programmed, "login")
    }

    async fn logout(&self) -> Result<()> {
        self.record(RecordedCall::Logout);
        self.delay().await;
        let programmed = self.inner.lock().unwrap().logout.clone();
        self.respond(&programmed, "logout")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests are allowed to panic on failures
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unprogrammed_operation_fails() {
        let api = MockApi::new();
        let result = api.fetch_offers().await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }

    #[tokio::test]
    async fn test_programmed_response_and_recording() {
        let api = MockApi::new();
        api.set_offers(Ok(vec![]));

        let offers = api.fetch_offers().await.unwrap();
        assert!(offers.is_empty());
        assert_eq!(api.calls(), vec![RecordedCall::FetchOffers]);
    }

    #[tokio::test]
    async fn test_set_favorite_records_flag() {
        let api = MockApi::new();
        api.set_favorite_toggle(Err(ClientError::Http { status: 401 }));

        let _ = api.set_favorite(OfferId(3), true).await;
        assert_eq!(
            api.calls(),
            vec![RecordedCall::SetFavorite {
                id: OfferId(3),
                flag: true
            }]
        );
    }
}
