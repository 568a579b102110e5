//! # Six Cities Client
//!
//! Client-side session and data coordinator for the six-cities rental
//! listing application.
//!
//! ## Features
//!
//! - **Explicit lifecycle**: every network operation is a command with
//!   exactly one terminal event (fulfilled or rejected)
//! - **Server-authoritative**: collections are replaced wholesale on
//!   fulfilment, favorites toggle non-optimistically
//! - **Cancellable**: the offer detail page ties its fetches to a
//!   cancellation scope so stale responses die with the page
//! - **Testable**: every dependency sits behind a trait with a
//!   recording mock; reducer logic runs at memory speed
//!
//! ## Architecture
//!
//! The client is implemented as reducers and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! ## Example: login flow
//!
//! ```rust,ignore
//! use six_cities_client::*;
//! use six_cities_runtime::Store;
//!
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! // 1. Submit credentials
//! store.send(AppAction::Login(AuthData {
//!     email: "user@example.com".into(),
//!     password: "secret".into(),
//! })).await?;
//!
//! // 2. On LoginSucceeded the token is persisted and the navigator
//! //    is pointed at the favorites page
//! let status = store.state(|s| s.session.authorization_status).await;
//! ```

// Public modules
pub mod actions;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod routes;
pub mod state;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::AppAction;
pub use config::ClientConfig;
pub use environment::ClientEnvironment;
pub use error::{ClientError, Result};
pub use reducers::AppReducer;
pub use routes::AppRoute;
pub use state::{AppState, AuthData, AuthorizationStatus, Offer, OfferId, RequestPhase, UserInfo};
