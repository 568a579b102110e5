//! Client reducers.
//!
//! One reducer per domain slice, composed under [`AppReducer`]. Every
//! reducer follows the same lifecycle contract: commands flip `Pending`
//! and return effects, terminal events write results, rejected events
//! record the error and leave previous data intact.

pub mod favorites;
pub mod offer_page;
pub mod offers;
pub mod session;

pub use favorites::FavoritesReducer;
pub use offer_page::OfferPageReducer;
pub use offers::OffersReducer;
pub use session::SessionReducer;

use crate::actions::{ActionDomain, AppAction};
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, OffersApi, TokenStore};
use crate::state::AppState;
use six_cities_core::effect::Effect;
use six_cities_core::environment::Clock;
use six_cities_core::reducer::Reducer;
use six_cities_core::SmallVec;

/// Root reducer delegating each action to its domain reducer.
#[derive(Debug, Clone)]
pub struct AppReducer<A, T, N, C> {
    session: SessionReducer<A, T, N, C>,
    offers: OffersReducer<A, T, N, C>,
    favorites: FavoritesReducer<A, T, N, C>,
    offer_page: OfferPageReducer<A, T, N, C>,
}

impl<A, T, N, C> AppReducer<A, T, N, C> {
    /// Create the root reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: SessionReducer::new(),
            offers: OffersReducer::new(),
            favorites: FavoritesReducer::new(),
            offer_page: OfferPageReducer::new(),
        }
    }
}

impl<A, T, N, C> Default for AppReducer<A, T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, C> Reducer for AppReducer<A, T, N, C>
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
        match action.domain() {
            ActionDomain::Session => self.session.reduce(state, action, env),
            ActionDomain::Offers => self.offers.reduce(state, action, env),
            ActionDomain::Favorites => self.favorites.reduce(state, action, env),
            ActionDomain::OfferPage => self.offer_page.reduce(state, action, env),
        }
    }
}

/// Shared test environment construction.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::ClientConfig;
    use crate::environment::ClientEnvironment;
    use crate::mocks::{MockApi, MockNavigator, MemoryTokenStore};
    use six_cities_testing::FixedClock;

    pub(crate) type TestEnv =
        ClientEnvironment<MockApi, MemoryTokenStore, MockNavigator, FixedClock>;

    pub(crate) fn test_env() -> TestEnv {
        ClientEnvironment::new(
            MockApi::new(),
            MemoryTokenStore::new(),
            MockNavigator::new(),
            six_cities_testing::test_clock(),
            ClientConfig::default(),
        )
    }
}
