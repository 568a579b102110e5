//! In-memory token store for testing.

use crate::error::Result;
use crate::providers::token_store::{Token, TokenStore};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    token: Option<Token>,
    save_count: usize,
    drop_count: usize,
}

/// In-memory token store that counts writes and drops.
///
/// The counters exist so tests can assert "exactly one token write"
/// style properties, not just the final value.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Inner>>,
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` was called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    /// How many times `drop_token` was called.
    #[must_use]
    pub fn drop_count(&self) -> usize {
        self.inner.lock().unwrap().drop_count
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore").finish_non_exhaustive()
    }
}

#[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<Token>> {
        Ok(self.inner.lock().unwrap().token.clone())
    }

    fn save(&self, token: &Token) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.token = Some(token.clone());
        inner.save_count += 1;
        Ok(())
    }

    fn drop_token(&self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.token = None;
        inner.drop_count += 1;
        Ok(())
    }
}
