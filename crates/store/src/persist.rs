//! Durable key-value persistence over a single JSON document.
//!
//! The whole store lives in one pretty-printed JSON file whose top-level
//! object maps keys to independently written values. Reads and writes are
//! synchronous full-file operations: a save reads the current document,
//! merges one key, and rewrites the file. There is no locking and no
//! partial-write recovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Document key holding the entity snapshot.
pub const KEY_APP_DATA: &str = "appData";

/// Document key holding the group registry, independent of the snapshot.
pub const KEY_AVAILABLE_GROUPS: &str = "availableGroups";

/// Errors that can occur reading or writing the data file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be read or written.
    #[error("data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file or a stored value is not valid JSON for the expected shape.
    #[error("data file contains invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the JSON document backing a store.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Create a handle for the document at `path`. The file itself is only
    /// touched by [`load`](Self::load) and [`save`](Self::save).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the value stored under `key`.
    ///
    /// A missing file, empty file, missing key, or explicit JSON `null` all
    /// read as `None` - absence, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] if the file exists but cannot be read,
    /// or [`PersistError::Json`] if the document or the stored value does
    /// not parse.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistError> {
        let document = self.read_document()?;
        match document.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    /// Store `value` under `key`, leaving every other key untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] on read/write failure and
    /// [`PersistError::Json`] if the existing document does not parse (the
    /// file is then left as it was).
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PersistError> {
        let mut document = self.read_document()?;
        document.insert(key.to_owned(), serde_json::to_value(value)?);
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }

    fn read_document(&self) -> Result<Map<String, Value>, PersistError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}
