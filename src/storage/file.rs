//! File-based storage implementation for native environments.
//!
//! Each key is persisted as its own JSON file inside one directory. Every write lands in its own
//! temporary file in that directory first and is then renamed over the target, so readers only
//! ever see a complete value, even with several handles writing at once.

use crate::storage::{KeyValueStorage, StorageError};
use std::{
    fmt::Write as _,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
#[cfg(feature = "tracing")]
use tracing::debug;

const STORAGE_FILE_EXTENSION: &str = "json";

/// File-based storage backend that persists values to JSON files on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates a new instance of [`FileStorage`].
    ///
    /// # Arguments
    ///
    /// * `directory` - The directory where the storage files will be stored. It is created on the
    ///   first write if missing.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory holding the storage files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn ensure_directory(&self) -> Result<&Path, StorageError> {
        if self.directory.as_os_str().is_empty() {
            return Ok(Path::new(".")); // current directory
        }
        fs::create_dir_all(&self.directory)?;
        Ok(&self.directory)
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{STORAGE_FILE_EXTENSION}", escape_key(key)))
    }
}

/// Maps a key to a file stem that is safe on every filesystem and unique per key.
///
/// ASCII letters, digits and `-` are kept. Every other byte, `_` included, becomes `_` followed by
/// two lowercase hex digits.
fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            escaped.push(char::from(byte));
        } else {
            let _ = write!(escaped, "_{byte:02x}");
        }
    }
    escaped
}

impl KeyValueStorage for FileStorage {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let directory = self.ensure_directory()?;
        // dropped without `persist` on any error below, which deletes it
        let mut temp = NamedTempFile::new_in(directory)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;

        let target = self.file_path(key);
        temp.persist(&target).map_err(|e| e.error)?;
        #[cfg(feature = "tracing")]
        debug!("Wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }
}

impl From<FileStorage> for Box<dyn KeyValueStorage> {
    fn from(storage: FileStorage) -> Self {
        Box::new(storage)
    }
}
