use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the in-progress answer sheet is kept.
pub const ANSWERS_KEY: &str = "quiz_answers";
/// Key under which the interaction log is kept.
pub const INTERACTIONS_KEY: &str = "quiz_interactions";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Browser-style key/value store holding client state between page loads.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub local: Arc<dyn LocalStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let local: Arc<dyn LocalStore> = Arc::new(InMemoryStore::new());
        Self { local }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_round_trip() {
        let store = InMemoryStore::new();
        assert_eq!(store.get(ANSWERS_KEY).await.unwrap(), None);

        store.set(ANSWERS_KEY, r#"{"1":"a"}"#).await.unwrap();
        store.set(ANSWERS_KEY, r#"{"1":"b"}"#).await.unwrap();
        assert_eq!(
            store.get(ANSWERS_KEY).await.unwrap().as_deref(),
            Some(r#"{"1":"b"}"#)
        );

        store.remove(ANSWERS_KEY).await.unwrap();
        store.remove(ANSWERS_KEY).await.unwrap();
        assert_eq!(store.get(ANSWERS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn storage_clones_share_entries() {
        let storage = Storage::in_memory();
        let other = storage.clone();
        storage.local.set(INTERACTIONS_KEY, "[]").await.unwrap();
        assert!(other.local.get(INTERACTIONS_KEY).await.unwrap().is_some());
    }
}
