//! Small key-value persistence
//!
//! Highscores and settings are tiny JSON documents stored under fixed keys.
//! The backend is pluggable:
//! - `MemoryStore`: in-process, for tests and ephemeral sessions
//! - `FileStore`: one JSON file per key in a data directory (native)
//! - `LocalStore`: browser LocalStorage (wasm32)
//!
//! Readers treat any failure as "nothing stored"; the game never stops over a
//! bad save.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Storage failure
#[derive(Debug)]
pub enum StorageError {
    /// Backend missing (no data dir, LocalStorage disabled)
    Unavailable(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(why) => write!(f, "storage unavailable: {why}"),
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Json(e) => write!(f, "malformed stored data: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Unavailable(_) => None,
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Stored value for `key`, `None` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and parse the JSON document under `key`
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`
pub fn save_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
