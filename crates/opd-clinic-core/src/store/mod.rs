//! Clinic state persistence.
//!
//! The registry keeps patients, doctors and appointments in memory and
//! mirrors every change into an injected key-value store. The store is an
//! explicit placeholder for browser-local storage: load at init, save on
//! change, nothing more. The chart and builder never depend on it.

mod fixtures;
mod registry;
mod sqlite;

pub use fixtures::*;
pub use registry::*;
pub use sqlite::*;

use std::collections::HashMap;

use thiserror::Error;

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Injected key-value persistence collaborator.
pub trait KvStore {
    /// Load the value for `key`, or `None` when never saved.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Save `value` under `key`, replacing any prior value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).save(key, value)
    }
}

/// HashMap-backed store (for testing).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
