//! Browser `localStorage` backend.

use crate::storage::{KeyValueStorage, StorageError};
#[cfg(feature = "tracing")]
use tracing::error;
use web_sys::{Storage, wasm_bindgen::JsValue};

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::WebSys(format!("{value:?}"))
    }
}

/// Implementation of [`KeyValueStorage`] over `window.localStorage`.
///
/// Keys are used verbatim, so the collection lives under `notes` exactly as the browser app
/// stored it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    /// Creates a new instance of [`LocalStorage`].
    pub fn new() -> Self {
        Self
    }

    fn get_local_storage(&self) -> Result<Storage, StorageError> {
        match gloo_utils::window().local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable(
                "LocalStorage not available".to_string(),
            )),
            Err(e) => {
                #[cfg(feature = "tracing")]
                error!("Could not find local storage: {e:?}");
                Err(StorageError::Unavailable(format!("{e:?}")))
            }
        }
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        let local_storage = self.get_local_storage()?;
        Ok(local_storage.get_item(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let local_storage = self.get_local_storage()?;
        local_storage.set_item(key, value).map_err(|e| {
            #[cfg(feature = "tracing")]
            error!("Could not set item in local storage: {e:?}");
            StorageError::from(e)
        })
    }
}

impl From<LocalStorage> for Box<dyn KeyValueStorage> {
    fn from(storage: LocalStorage) -> Self {
        Box::new(storage)
    }
}
