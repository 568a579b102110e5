//! Client environment.
//!
//! All external dependencies reducers touch are injected here, so the
//! reducers stay pure and tests swap in recording mocks.

use crate::config::ClientConfig;
use crate::providers::{Navigator, OffersApi, TokenStore};
use six_cities_core::environment::Clock;

/// Client environment.
///
/// # Type Parameters
///
/// - `A`: REST API client
/// - `T`: Token store
/// - `N`: Navigator
/// - `C`: Clock
#[derive(Debug, Clone)]
pub struct ClientEnvironment<A, T, N, C>
where
    A: OffersApi + Clone,
    T: TokenStore + Clone,
    N: Navigator + Clone,
    C: Clock + Clone,
{
    /// REST API client.
    pub api: A,

    /// Session token persistence.
    pub tokens: T,

    /// Navigation sink.
    pub navigator: N,

    /// Time source (error timestamps).
    pub clock: C,

    /// Client configuration.
    pub config: ClientConfig,
}

impl<A, T, N, C> ClientEnvironment<A, T, N, C>
where
    A: OffersApi + Clone,
    T: TokenStore + Clone,
    N: Navigator + Clone,
    C: Clock + Clone,
{
    /// Create a new client environment.
    #[must_use]
    pub const fn new(api: A, tokens: T, navigator: N, clock: C, config: ClientConfig) -> Self {
        Self {
            api,
            tokens,
            navigator,
            clock,
            config,
        }
    }
}
