//! Token store trait.
//!
//! Abstracts persistence of the single opaque session token. Reads and
//! writes are synchronous: they run inside reducer terminal-event
//! branches, where blocking on local storage is acceptable.

use crate::error::Result;

/// Opaque session token.
///
/// The client never inspects the value; it is stored verbatim and sent
/// back in the `x-token` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token value.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// The raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Session token persistence.
///
/// # Contract
///
/// - At most one token is stored at a time; `save` replaces it
/// - `get` after `save` returns the saved value
/// - `get` after `drop_token` (or before any save) returns `None`
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be read.
    fn get(&self) -> Result<Option<Token>>;

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be written.
    fn save(&self, token: &Token) -> Result<()>;

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be written.
    fn drop_token(&self) -> Result<()>;
}
