//! Key-value storage backends holding the serialized note collection.
//!
//! Every backend stores plain strings under string keys and applies each [`KeyValueStorage::set`]
//! as one atomic replace of the previous value.

#[cfg(all(feature = "file", not(target_family = "wasm")))]
pub mod file;
pub mod memory;
#[cfg(feature = "wasm-js")]
pub mod wasm_js;

#[cfg(all(feature = "file", not(target_family = "wasm")))]
pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "wasm-js")]
pub use wasm_js::LocalStorage;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (e.g. no `window.localStorage`).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// A filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The browser rejected the operation, typically because the quota was exceeded.
    #[error("Web storage error: {0}")]
    WebSys(String),
    /// The value could not be serialized before writing.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Any other backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A persistent slot store addressed by string keys.
pub trait KeyValueStorage: Send {
    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if the key exists
    /// * `Ok(None)` if the key has never been written
    /// * `Err(StorageError)` if the backend could not be read
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// Once this returns `Ok(())` later calls to [`get`](Self::get) observe `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
