//! In-process storage.

use crate::storage::{KeyValueStorage, StorageError};
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// Implementation of [`KeyValueStorage`] backed by a shared in-memory map.
///
/// Clones share the same slots, the way two browsing contexts share one `localStorage` scope.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty [`MemoryStorage`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`MemoryStorage`] that already holds `value` under `key`.
    pub fn with_value<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.slots.lock().insert(key.into(), value.into());
        storage
    }

    /// Returns a copy of the raw value under `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl From<MemoryStorage> for Box<dyn KeyValueStorage> {
    fn from(storage: MemoryStorage) -> Self {
        Box::new(storage)
    }
}
