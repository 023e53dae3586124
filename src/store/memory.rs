//! In-memory store for tests and throwaway sessions.

use super::{StateStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Map-backed store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value under `key`.
    pub fn with_entry(self, key: &str, value: Vec<u8>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
        self
    }

    /// Make subsequent saves fail with `StoreError::Unavailable`.
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_saves.lock() {
            *flag = fail;
        }
    }

    /// Raw bytes stored under `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let fail = self
            .fail_saves
            .lock()
            .map(|flag| *flag)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if fail {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
