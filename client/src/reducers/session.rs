//! Session reducer.
//!
//! Handles the session check, login, and logout flows.
//!
//! # Flow
//!
//! 1. `CheckAuth` asks the server whether the stored token still maps
//!    to a session; `AuthConfirmed` additionally kicks off a favorites
//!    fetch without awaiting it
//! 2. `Login` posts credentials; `LoginSucceeded` persists the fresh
//!    token (exactly one write), navigates to the favorites page, and
//!    stores the user
//! 3. `Logout` tears the session down server-side first;
//!    `LogoutSucceeded` drops the token (exactly one drop)
//!
//! Failures never touch the token store or the navigator.

use crate::actions::AppAction;
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, OffersApi, Token, TokenStore};
use crate::routes::AppRoute;
use crate::state::{AppState, AuthorizationStatus, RequestPhase};
use six_cities_core::effect::Effect;
use six_cities_core::environment::Clock;
use six_cities_core::reducer::Reducer;
use six_cities_core::{SmallVec, smallvec};

/// Session reducer.
#[derive(Debug, Clone)]
pub struct SessionReducer<A, T, N, C> {
    _phantom: std::marker::PhantomData<(A, T, N, C)>,
}

impl<A, T, N, C> SessionReducer<A, T, N, C> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, C> Default for SessionReducer<A, T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, C> Reducer for SessionReducer<A, T, N, C>
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
            // ═══════════════════════════════════════════════════════════════
            // CheckAuth: does the stored token still map to a session?
            // ═══════════════════════════════════════════════════════════════
            AppAction::CheckAuth => {
                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.check_auth().await {
                        Ok(Some(user)) => Some(AppAction::AuthConfirmed(user)),
                        Ok(None) => Some(AppAction::AuthDenied),
                        Err(err) => {
                            tracing::debug!(error = %err, "Session check failed");
                            Some(AppAction::AuthDenied)
                        },
                    }
                })]
            },

            AppAction::AuthConfirmed(user) => {
                state.session.user = Some(user);
                state.session.authorization_status = AuthorizationStatus::Auth;

                // Kick off the favorites fetch without awaiting it. Whether
                // it settles before or after unrelated actions is
                // intentionally unspecified.
                smallvec![Effect::future(async { Some(AppAction::FetchFavorites) })]
            },

            AppAction::AuthDenied => {
                state.session.user = None;
                state.session.authorization_status = AuthorizationStatus::NoAuth;
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Login
            // ═══════════════════════════════════════════════════════════════
            AppAction::Login(auth) => {
                state.session.login_phase = RequestPhase::Pending;

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.login(auth).await {
                        Ok(user) => Some(AppAction::LoginSucceeded(user)),
                        Err(err) => Some(AppAction::LoginFailed(err)),
                    }
                })]
            },

            AppAction::LoginSucceeded(user) => {
                // Exactly one token write per successful login
                if let Err(err) = env.tokens.save(&Token::new(user.token.clone())) {
                    tracing::warn!(error = %err, "Failed to persist session token");
                }
                env.navigator.navigate(&AppRoute::Favorites);

                state.session.user = Some(user);
                state.session.authorization_status = AuthorizationStatus::Auth;
                state.session.login_phase = RequestPhase::Fulfilled;
                smallvec![Effect::None]
            },

            AppAction::LoginFailed(err) => {
                tracing::debug!(error = %err, "Login rejected");
                state.session.login_phase = RequestPhase::Rejected;
                // Authorization status is left as it was: a failed login
                // attempt says nothing about the existing session
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Logout
            // ═══════════════════════════════════════════════════════════════
            AppAction::Logout => {
                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.logout().await {
                        Ok(()) => Some(AppAction::LogoutSucceeded),
                        Err(err) => Some(AppAction::LogoutFailed(err)),
                    }
                })]
            },

            AppAction::LogoutSucceeded => {
                // Exactly one token drop per successful logout
                if let Err(err) = env.tokens.drop_token() {
                    tracing::warn!(error = %err, "Failed to drop session token");
                }

                state.session.user = None;
                state.session.authorization_status = AuthorizationStatus::NoAuth;
                smallvec![Effect::None]
            },

            AppAction::LogoutFailed(err) => {
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // Routed to other reducers
            _ => smallvec![Effect::None],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests are allowed to panic on failures
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::reducers::test_support::test_env;
    use crate::state::fixtures::sample_user;
    use crate::state::AuthData;
    use six_cities_testing::{ReducerTest, assertions};

    fn credentials() -> AuthData {
        AuthData {
            email: "oliver@example.com".to_string(),
            password: "p4ssword".to_string(),
        }
    }

    #[test]
    fn test_login_flips_pending_and_fires_request() {
        ReducerTest::new(SessionReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Login(credentials()))
            .then_state(|state| {
                assert_eq!(state.session.login_phase, RequestPhase::Pending);
                // Nothing else is written at command time
                assert!(state.session.user.is_none());
            })
            .then_effects(|effects| {
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_login_succeeded_saves_token_once_and_navigates() {
        let env = test_env();
        let tokens = env.tokens.clone();
        let navigator = env.navigator.clone();

        ReducerTest::new(SessionReducer::new())
            .with_env(env)
            .given_state(AppState::default())
            .when_action(AppAction::LoginSucceeded(sample_user()))
            .then_state(|state| {
                assert_eq!(
                    state.session.authorization_status,
                    AuthorizationStatus::Auth
                );
                assert_eq!(state.session.login_phase, RequestPhase::Fulfilled);
                assert_eq!(
                    state.session.user.as_ref().map(|u| u.email.as_str()),
                    Some("oliver@example.com")
                );
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();

        assert_eq!(tokens.save_count(), 1);
        assert_eq!(
            tokens.get().unwrap().map(|t| t.as_str().to_string()),
            Some("secret-token".to_string())
        );
        assert_eq!(navigator.routes(), vec![AppRoute::Favorites]);
    }

    #[test]
    fn test_login_failed_writes_nothing() {
        let env = test_env();
        let tokens = env.tokens.clone();
        let navigator = env.navigator.clone();

        ReducerTest::new(SessionReducer::new())
            .with_env(env)
            .given_state(AppState::default())
            .when_action(AppAction::LoginFailed(ClientError::Http { status: 400 }))
            .then_state(|state| {
                assert_eq!(state.session.login_phase, RequestPhase::Rejected);
                assert_eq!(
                    state.session.authorization_status,
                    AuthorizationStatus::Unknown
                );
                assert!(state.last_error.is_some());
            })
            .run();

        assert_eq!(tokens.save_count(), 0);
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_logout_succeeded_drops_token_and_clears_user() {
        let env = test_env();
        let tokens = env.tokens.clone();

        let mut state = AppState::default();
        state.session.user = Some(sample_user());
        state.session.authorization_status = AuthorizationStatus::Auth;

        ReducerTest::new(SessionReducer::new())
            .with_env(env)
            .given_state(state)
            .when_action(AppAction::LogoutSucceeded)
            .then_state(|state| {
                assert!(state.session.user.is_none());
                assert_eq!(
                    state.session.authorization_status,
                    AuthorizationStatus::NoAuth
                );
            })
            .run();

        assert_eq!(tokens.drop_count(), 1);
    }

    #[test]
    fn test_auth_confirmed_sets_user_and_fires_favorites_fetch() {
        ReducerTest::new(SessionReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::AuthConfirmed(sample_user()))
            .then_state(|state| {
                assert_eq!(
                    state.session.authorization_status,
                    AuthorizationStatus::Auth
                );
                assert!(state.session.user.is_some());
            })
            .then_effects(|effects| {
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_auth_denied_sets_noauth() {
        ReducerTest::new(SessionReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::AuthDenied)
            .then_state(|state| {
                assert_eq!(
                    state.session.authorization_status,
                    AuthorizationStatus::NoAuth
                );
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }
}
