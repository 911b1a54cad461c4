//! The single persisted slot holding every note.
//!
//! [`NoteStore`] is the only way the collection is read or written. Each mutation is one
//! read-modify-write cycle over the whole collection: load it, change it in memory, write it back.
//! There is no locking across owners. Two owners sharing one storage scope can lose each other's
//! updates, and the last write wins.

use crate::{
    note::NoteCollection,
    storage::{KeyValueStorage, StorageError},
};
use std::fmt;
#[cfg(feature = "tracing")]
use tracing::{debug, error, warn};

/// Key under which the collection is stored.
pub const NOTES_STORAGE_KEY: &str = "notes";

/// The stored value exists but is not a valid note collection.
#[derive(Debug, thiserror::Error)]
#[error("Stored value under `{key}` is not a valid note collection: {source}")]
pub struct CorruptDataError {
    /// The storage key that was read.
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// The error type for [`NoteStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed to read or write, or the collection could not be serialized.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// Existing data could not be decoded. Nothing is overwritten in this case.
    #[error(transparent)]
    CorruptData(#[from] CorruptDataError),
}

/// Owner of the persisted note collection.
pub struct NoteStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl NoteStore {
    /// Creates a store over `storage` using [`NOTES_STORAGE_KEY`].
    pub fn new<S>(storage: S) -> Self
    where
        S: Into<Box<dyn KeyValueStorage>>,
    {
        Self::with_key(storage, NOTES_STORAGE_KEY)
    }

    /// Creates a store over `storage` using a custom key.
    pub fn with_key<S, K>(storage: S, key: K) -> Self
    where
        S: Into<Box<dyn KeyValueStorage>>,
        K: Into<String>,
    {
        Self {
            storage: storage.into(),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the whole collection.
    ///
    /// A missing value, or a stored JSON `null`, is an empty collection. Anything that does not
    /// decode is reported as [`StoreError::CorruptData`] rather than being treated as empty.
    pub fn load(&mut self) -> Result<NoteCollection, StoreError> {
        let raw = self.storage.get(&self.key).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not read `{}`: {e}", self.key);
            e
        })?;
        let Some(raw) = raw else {
            #[cfg(feature = "tracing")]
            debug!("No value under `{}`, starting empty", self.key);
            return Ok(NoteCollection::new());
        };
        let notes: Option<NoteCollection> = serde_json::from_str(&raw).map_err(|source| {
            #[cfg(feature = "tracing")]
            warn!("Corrupt value under `{}`: {source}", self.key);
            CorruptDataError {
                key: self.key.clone(),
                source,
            }
        })?;
        let notes = notes.unwrap_or_default();
        #[cfg(feature = "tracing")]
        debug!("Loaded {} notes from `{}`", notes.len(), self.key);
        Ok(notes)
    }

    /// Replaces the stored collection with `notes`.
    pub fn save_all(&mut self, notes: &NoteCollection) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(notes).map_err(StorageError::from)?;
        self.storage.set(&self.key, &serialized).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not write `{}`: {e}", self.key);
            e
        })?;
        #[cfg(feature = "tracing")]
        debug!("Saved {} notes to `{}`", notes.len(), self.key);
        Ok(())
    }

    /// Runs one read-modify-write cycle.
    ///
    /// `f` receives a freshly loaded collection and returns whether it changed anything. The
    /// collection is written back only when it did. Returns the resulting collection together with
    /// that flag.
    pub fn modify<F>(&mut self, f: F) -> Result<(NoteCollection, bool), StoreError>
    where
        F: FnOnce(&mut NoteCollection) -> bool,
    {
        let mut notes = self.load()?;
        let changed = f(&mut notes);
        if changed {
            self.save_all(&notes)?;
        }
        Ok((notes, changed))
    }
}
