//! File-backed token store.
//!
//! Persists the single opaque session token to a file so it survives
//! restarts, the durable-storage analog of a browser's local storage.

use crate::error::{ClientError, Result};
use crate::providers::token_store::{Token, TokenStore};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Token store persisting to a single file.
///
/// A missing file reads as "no token". Concurrent writers are not
/// supported; the client owns the file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<Token>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Token::new(trimmed.to_string())))
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ClientError::Storage(err.to_string())),
        }
    }

    fn save(&self, token: &Token) -> Result<()> {
        std::fs::write(&self.path, token.as_str())
            .map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn drop_token(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::Storage(err.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests are allowed to panic on failures
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn test_get_before_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let token = Token::new("secret-token".to_string());
        store.save(&token).unwrap();
        assert_eq!(store.get().unwrap(), Some(token));
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Token::new("first".to_string())).unwrap();
        store.save(&Token::new("second".to_string())).unwrap();
        assert_eq!(
            store.get().unwrap(),
            Some(Token::new("second".to_string()))
        );
    }

    #[test]
    fn test_drop_token_removes_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Token::new("secret".to_string())).unwrap();
        store.drop_token().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_drop_token_without_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.drop_token().unwrap();
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        FileTokenStore::new(path.clone())
            .save(&Token::new("persisted".to_string()))
            .unwrap();

        let reopened = FileTokenStore::new(path);
        assert_eq!(
            reopened.get().unwrap(),
            Some(Token::new("persisted".to_string()))
        );
    }
}
