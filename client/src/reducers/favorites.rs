//! Favorites reducer.
//!
//! Loads the bookmarked offers and handles non-optimistic toggling:
//! nothing changes locally until the server's authoritative offer comes
//! back, which is then patched into every collection holding its id.

use crate::actions::AppAction;
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, OffersApi, TokenStore};
use crate::state::{AppState, Offer, RequestPhase};
use six_cities_core::effect::Effect;
use six_cities_core::environment::Clock;
use six_cities_core::reducer::Reducer;
use six_cities_core::{SmallVec, smallvec};

/// Favorites reducer.
#[derive(Debug, Clone)]
pub struct FavoritesReducer<A, T, N, C> {
    _phantom: std::marker::PhantomData<(A, T, N, C)>,
}

impl<A, T, N, C> FavoritesReducer<A, T, N, C> {
    /// Create a new favorites reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, C> Default for FavoritesReducer<A, T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, C> FavoritesReducer<A, T, N, C>
where
    A: OffersApi + Clone + Send + Sync + 'static,
    T: TokenStore + Clone,
    N: Navigator + Clone,
    C: Clock + Clone,
{
    fn toggle(
        env: &ClientEnvironment<A, T, N, C>,
        offer: &Offer,
        flag: bool,
    ) -> SmallVec<[Effect<AppAction>; 4]> {
        let api = env.api.clone();
        let id = offer.id;
        smallvec![Effect::future(async move {
            match api.set_favorite(id, flag).await {
                Ok(updated) => Some(AppAction::FavoriteUpdated(updated)),
                Err(err) => Some(AppAction::FavoriteFailed(err)),
            }
        })]
    }
}

impl<A, T, N, C> Reducer for FavoritesReducer<A, T, N, C>
where
    A: OffersApi + Clone + Send + Sync + 'static,
    T: TokenStore + Clone,
    N: Navigator + Clone,
    C: Clock + Clone,
{
    type State = AppState;
    type Action = AppAction;
    type Environment = ClientEnvironment<A, T, N, C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::FetchFavorites => {
                state.favorites.phase = RequestPhase::Pending;

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.fetch_favorites().await {
                        Ok(offers) => Some(AppAction::FavoritesLoaded(offers)),
                        Err(err) => Some(AppAction::FavoritesFailed(err)),
                    }
                })]
            },

            AppAction::FavoritesLoaded(offers) => {
                state.favorites.items = offers;
                state.favorites.phase = RequestPhase::Fulfilled;
                smallvec![Effect::None]
            },

            AppAction::FavoritesFailed(err) => {
                state.favorites.phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // Non-optimistic: no local write at command time
            AppAction::AddFavorite(offer) => Self::toggle(env, &offer, true),
            AppAction::RemoveFavorite(offer) => Self::toggle(env, &offer, false),

            AppAction::FavoriteUpdated(offer) => {
                state.patch_offer(&offer);
                smallvec![Effect::None]
            },

            AppAction::FavoriteFailed(err) => {
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // Routed to other reducers
            _ => smallvec![Effect::None],
        }
    }
}
