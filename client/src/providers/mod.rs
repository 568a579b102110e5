//! Provider traits and production implementations.
//!
//! All external dependencies sit behind traits so reducers stay pure
//! and tests run at memory speed against mocks.

pub mod api;
pub mod http;
pub mod navigator;
pub mod token_file;
pub mod token_store;

pub use api::OffersApi;
pub use http::HttpApi;
pub use navigator::{Navigator, TracingNavigator};
pub use token_file::FileTokenStore;
pub use token_store::{Token, TokenStore};
