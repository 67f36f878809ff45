//! Key-value storage substrate for the record store.
//!
//! # Responsibility
//! - Define the get/set-by-key contract the record store persists through.
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - Values are opaque strings; the store never inspects them.
//! - SQLite schema version is tracked via `PRAGMA user_version`.

use crate::config::StorageLocation;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod sqlite_kv;

pub use open::{open_db, open_db_in_memory};
pub use sqlite_kv::SqliteKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-valued key-value storage provider.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// Opens the store a configuration points at.
pub fn open_location(location: &StorageLocation) -> StorageResult<Box<dyn KeyValueStore>> {
    match location {
        StorageLocation::File(path) => Ok(Box::new(SqliteKeyValueStore::open(path)?)),
        StorageLocation::InMemory => Ok(Box::new(MemoryKeyValueStore::new())),
    }
}

/// Process-local store, used for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }
}
