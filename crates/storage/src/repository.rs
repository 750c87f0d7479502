use portal_core::model::SessionKey;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by session storage adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Session-scoped key/value storage.
///
/// Values are plain strings; callers own encoding. Contents live for one
/// application session and are never written to disk.
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &SessionKey) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &SessionKey, value: &str) -> Result<(), StorageError>;

    /// Drop every key, including ones this flow did not write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn clear(&self) -> Result<(), StorageError>;

    /// Raw keys currently stored, sorted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemorySessionStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemorySessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw key, bypassing `SessionKey`. Mirrors other writers sharing
    /// the same session (tests, embedding shells).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lock is poisoned.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    /// Copy of every stored pair.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &SessionKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.get(&key.to_string()).cloned())
    }

    fn set_item(&self, key: &SessionKey, value: &str) -> Result<(), StorageError> {
        self.set_raw(&key.to_string(), value)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.keys().cloned().collect())
    }
}

/// Storage that refuses every operation, as when session storage is turned off.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledSessionStorage;

impl DisabledSessionStorage {
    fn refuse<T>() -> Result<T, StorageError> {
        Err(StorageError::Unavailable("session storage is disabled".into()))
    }
}

impl SessionStorage for DisabledSessionStorage {
    fn get_item(&self, _key: &SessionKey) -> Result<Option<String>, StorageError> {
        Self::refuse()
    }

    fn set_item(&self, _key: &SessionKey, _value: &str) -> Result<(), StorageError> {
        Self::refuse()
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::refuse()
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Self::refuse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::StepId;

    #[test]
    fn stores_and_overwrites_values() {
        let storage = InMemorySessionStorage::new();
        assert_eq!(storage.get_item(&SessionKey::CurrentStep).unwrap(), None);

        storage.set_item(&SessionKey::CurrentStep, "2").unwrap();
        storage.set_item(&SessionKey::CurrentStep, "3").unwrap();
        assert_eq!(
            storage.get_item(&SessionKey::CurrentStep).unwrap().as_deref(),
            Some("3")
        );
    }

    #[test]
    fn clones_share_state_and_clear_drops_foreign_keys() {
        let storage = InMemorySessionStorage::new();
        let other = storage.clone();
        other.set_raw("theme", "dark").unwrap();
        storage
            .set_item(&SessionKey::StepAnswer(StepId::new(1)), "{}")
            .unwrap();

        assert_eq!(storage.keys().unwrap(), vec!["answers.step.1", "theme"]);

        storage.clear().unwrap();
        assert!(other.snapshot().unwrap().is_empty());
    }

    #[test]
    fn disabled_storage_refuses_everything() {
        let storage = DisabledSessionStorage;
        assert!(storage.get_item(&SessionKey::ParticipantId).is_err());
        assert!(storage.set_item(&SessionKey::ParticipantId, "P1").is_err());
        assert!(storage.clear().is_err());
        assert!(storage.keys().is_err());
    }

    #[test]
    fn storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemorySessionStorage>();
        assert_send_sync::<DisabledSessionStorage>();
    }
}
