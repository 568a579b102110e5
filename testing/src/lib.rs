//! # Six Cities Testing
//!
//! Testing utilities and helpers for the six-cities client architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Fluent Given-When-Then reducer testing
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use six_cities_testing::ReducerTest;
//!
//! #[test]
//! fn login_success_stores_user() {
//!     ReducerTest::new(SessionReducer)
//!         .with_env(test_environment())
//!         .given_state(AppState::default())
//!         .when_action(AppAction::LoginSucceeded(auth_info))
//!         .then_state(|state| {
//!             assert!(state.session.user.is_some());
//!         })
//!         .run();
//! }
//! ```

use chrono::{DateTime, Utc};
use six_cities_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
///
/// Feature crates carry their own domain mocks (API client, token store,
/// navigator); only the universally shared ones live here.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use six_cities_testing::mocks::FixedClock;
    /// use six_cities_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
