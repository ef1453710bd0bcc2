use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use gymbook_domain as domain;

use crate::KeyValueStore;

/// Volatile store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| domain::StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| domain::StorageError::Unavailable)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
