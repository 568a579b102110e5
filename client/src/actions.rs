//! Client actions.
//!
//! Every asynchronous operation is a named command with an explicit
//! lifecycle: the command arriving at the reducer is the pending step,
//! and exactly one terminal event (fulfilled or rejected) follows.
//! State is written only by terminal events; commands may flip a
//! `Pending` flag and return effects, nothing more.

use crate::error::ClientError;
use crate::state::{AuthData, City, Comment, Offer, OfferId, ReviewDraft, UserInfo};

/// All client actions.
#[derive(Debug, Clone)]
pub enum AppAction {
    // ═══════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════
    /// Check whether a stored token still maps to a valid session.
    CheckAuth,

    /// Session check succeeded.
    ///
    /// Dispatches `FetchFavorites` without awaiting it; the favorites
    /// fetch settling before or after unrelated actions is intentional.
    AuthConfirmed(UserInfo),

    /// Session check settled without a valid session.
    AuthDenied,

    /// Submit login credentials.
    Login(AuthData),

    /// Login succeeded; carries the user including the fresh token.
    LoginSucceeded(UserInfo),

    /// Login rejected.
    LoginFailed(ClientError),

    /// Terminate the session server-side.
    Logout,

    /// Logout succeeded.
    LogoutSucceeded,

    /// Logout rejected.
    LogoutFailed(ClientError),

    // ═══════════════════════════════════════════════════════════
    // Catalog
    // ═══════════════════════════════════════════════════════════
    /// Load the full offer catalog.
    FetchOffers,

    /// Catalog loaded.
    OffersLoaded(Vec<Offer>),

    /// Catalog fetch rejected.
    OffersFailed(ClientError),

    /// Change the city filter (pure state change, no network call).
    ChangeCity(City),

    // ═══════════════════════════════════════════════════════════
    // Favorites
    // ═══════════════════════════════════════════════════════════
    /// Load the bookmarked offers.
    FetchFavorites,

    /// Favorites loaded.
    FavoritesLoaded(Vec<Offer>),

    /// Favorites fetch rejected.
    FavoritesFailed(ClientError),

    /// Bookmark an offer. Non-optimistic: state changes only once the
    /// server's authoritative offer comes back.
    AddFavorite(Offer),

    /// Remove an offer bookmark. Non-optimistic.
    RemoveFavorite(Offer),

    /// Server confirmed the toggle; carries the authoritative offer.
    FavoriteUpdated(Offer),

    /// Favorite toggle rejected.
    FavoriteFailed(ClientError),

    // ═══════════════════════════════════════════════════════════
    // Offer detail page
    // ═══════════════════════════════════════════════════════════
    /// Open the detail page for an offer.
    OpenOffer(OfferId),

    /// Primary offer loaded; comments and nearby fetches start only now.
    OfferLoaded(Offer),

    /// Server answered 404 for the primary offer.
    OfferMissing(OfferId),

    /// Primary offer fetch rejected (non-404).
    OfferFailed(ClientError),

    /// Load the reviews for an offer.
    FetchComments(OfferId),

    /// Reviews loaded.
    CommentsLoaded(Vec<Comment>),

    /// Reviews fetch rejected.
    CommentsFailed(ClientError),

    /// Load the offers near an offer.
    FetchNearby(OfferId),

    /// Nearby offers loaded.
    NearbyLoaded(Vec<Offer>),

    /// Nearby fetch rejected.
    NearbyFailed(ClientError),

    /// Edit the review form.
    UpdateDraft(ReviewDraft),

    /// Submit the review form. Rejected client-side when the draft
    /// fails validation; no network call is made in that case.
    SubmitComment {
        /// Offer the review targets.
        id: OfferId,
        /// Form contents at submission time.
        draft: ReviewDraft,
    },

    /// Review accepted; carries the server's refreshed comment list.
    CommentAccepted(Vec<Comment>),

    /// Review rejected.
    CommentRejected(ClientError),

    /// Leave the detail page, cancelling its in-flight fetches.
    LeaveOffer,
}

/// Which reducer owns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDomain {
    /// Session check, login, logout.
    Session,

    /// Catalog fetch and city filter.
    Offers,

    /// Favorites fetch and toggling.
    Favorites,

    /// Detail page aggregation, reviews, submission.
    OfferPage,
}

impl AppAction {
    /// Which reducer this action is routed to.
    #[must_use]
    pub const fn domain(&self) -> ActionDomain {
        match self {
            Self::CheckAuth
            | Self::AuthConfirmed(_)
            | Self::AuthDenied
            | Self::Login(_)
            | Self::LoginSucceeded(_)
            | Self::LoginFailed(_)
            | Self::Logout
            | Self::LogoutSucceeded
            | Self::LogoutFailed(_) => ActionDomain::Session,

            Self::FetchOffers
            | Self::OffersLoaded(_)
            | Self::OffersFailed(_)
            | Self::ChangeCity(_) => ActionDomain::Offers,

            Self::FetchFavorites
            | Self::FavoritesLoaded(_)
            | Self::FavoritesFailed(_)
            | Self::AddFavorite(_)
            | Self::RemoveFavorite(_)
            | Self::FavoriteUpdated(_)
            | Self::FavoriteFailed(_) => ActionDomain::Favorites,

            Self::OpenOffer(_)
            | Self::OfferLoaded(_)
            | Self::OfferMissing(_)
            | Self::OfferFailed(_)
            | Self::FetchComments(_)
            | Self::CommentsLoaded(_)
            | Self::CommentsFailed(_)
            | Self::FetchNearby(_)
            | Self::NearbyLoaded(_)
            | Self::NearbyFailed(_)
            | Self::UpdateDraft(_)
            | Self::SubmitComment { .. }
            | Self::CommentAccepted(_)
            | Self::CommentRejected(_)
            | Self::LeaveOffer => ActionDomain::OfferPage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_domains() {
        assert_eq!(AppAction::CheckAuth.domain(), ActionDomain::Session);
        assert_eq!(AppAction::FetchOffers.domain(), ActionDomain::Offers);
        assert_eq!(AppAction::FetchFavorites.domain(), ActionDomain::Favorites);
        assert_eq!(AppAction::LeaveOffer.domain(), ActionDomain::OfferPage);
    }
}
