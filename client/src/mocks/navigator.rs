//! Recording navigator for testing.

use crate::providers::navigator::Navigator;
use crate::routes::AppRoute;
use std::sync::{Arc, Mutex};

/// Navigator that records every destination.
#[derive(Clone, Default)]
pub struct MockNavigator {
    routes: Arc<Mutex<Vec<AppRoute>>>,
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl MockNavigator {
    /// Create a navigator with no recorded destinations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded destinations, in navigation order.
    #[must_use]
    pub fn routes(&self) -> Vec<AppRoute> {
        self.routes.lock().unwrap().clone()
    }

    /// The most recent destination, if any.
    #[must_use]
    pub fn last(&self) -> Option<AppRoute> {
        self.routes.lock().unwrap().last().copied()
    }
}

impl std::fmt::Debug for MockNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockNavigator").finish_non_exhaustive()
    }
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl Navigator for MockNavigator {
    fn navigate(&self, route: &AppRoute) {
        self.routes.lock().unwrap().push(*route);
    }
}
