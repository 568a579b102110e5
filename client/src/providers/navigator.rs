//! Navigator trait.
//!
//! Navigation is an injected side effect: reducers name a destination
//! and the UI layer decides what a route change means. Tests inject a
//! recording navigator and assert on destinations.

use crate::routes::AppRoute;

/// Navigation sink.
pub trait Navigator: Send + Sync {
    /// Navigate to a route. Infallible from the reducer's point of view.
    fn navigate(&self, route: &AppRoute);
}

/// Navigator that only logs destinations.
///
/// Useful for headless runs and as a default until a UI layer wires in
/// a real router.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &AppRoute) {
        tracing::info!(route = %route, "Navigating");
    }
}
