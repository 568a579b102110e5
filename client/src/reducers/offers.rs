//! Catalog reducer.
//!
//! Loads the full offer catalog and tracks the selected city filter.
//! Filtering itself is a view concern; state holds the whole catalog
//! plus the chosen city.

use crate::actions::AppAction;
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, OffersApi, TokenStore};
use crate::state::{AppState, RequestPhase};
use six_cities_core::effect::Effect;
use six_cities_core::environment::Clock;
use six_cities_core::reducer::Reducer;
use six_cities_core::{SmallVec, smallvec};

/// Catalog reducer.
#[derive(Debug, Clone)]
pub struct OffersReducer<A, T, N, C> {
    _phantom: std::marker::PhantomData<(A, T, N, C)>,
}

impl<A, T, N, C> OffersReducer<A, T, N, C> {
    /// Create a new catalog reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, C> Default for OffersReducer<A, T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, C> Reducer for OffersReducer<A, T, N, C>
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
            AppAction::FetchOffers => {
                state.offers.phase = RequestPhase::Pending;

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.fetch_offers().await {
                        Ok(offers) => Some(AppAction::OffersLoaded(offers)),
                        Err(err) => Some(AppAction::OffersFailed(err)),
                    }
                })]
            },

            AppAction::OffersLoaded(offers) => {
                tracing::debug!(count = offers.len(), "Catalog loaded");
                state.offers.items = offers;
                state.offers.phase = RequestPhase::Fulfilled;
                smallvec![Effect::None]
            },

            AppAction::OffersFailed(err) => {
                // Previous catalog contents stay intact
                state.offers.phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            AppAction::ChangeCity(city) => {
                state.offers.city = city;
                smallvec![Effect::None]
            },

            // Routed to other reducers
            _ => smallvec![Effect::None],
        }
    }
}
