//! Mock providers for testing.
//!
//! Programmable, recording implementations of the provider traits so
//! reducer and store tests run at memory speed with no network.

pub mod api;
pub mod navigator;
pub mod token_store;

pub use api::{MockApi, RecordedCall};
pub use navigator::MockNavigator;
pub use token_store::MemoryTokenStore;
