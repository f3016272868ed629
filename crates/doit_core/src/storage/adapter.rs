//! Typed binding of a value to a fixed string key.
//!
//! # Responsibility
//! - Serialize/deserialize JSON values on top of the raw key-value contract.
//! - Absorb read/parse failures into a caller-supplied default.
//!
//! # Invariants
//! - Malformed persisted data is treated as absent, never as a hard failure.
//! - Write failures propagate to the caller unchanged.

use crate::storage::local_store::LocalStore;
use crate::storage::{StorageError, StorageResult};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed JSON binding over a raw key-value store.
pub struct StorageAdapter<S: LocalStore> {
    store: S,
}

impl<S: LocalStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access to the raw store, for marker keys that bypass JSON encoding.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads and deserializes the value stored under `key`.
    ///
    /// # Contract
    /// - Absent key, read failure, and malformed JSON all yield `default`.
    /// - Failures are logged, never surfaced.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load_failed module=storage status=error key={key} error={err}"
                );
                return default;
            }
        };

        match raw {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(err) => {
                    error!(
                        "event=store_load_failed module=storage status=error key={key} error_code=malformed_json error={err}"
                    );
                    default
                }
            },
            None => default,
        }
    }

    /// Serializes `value` and writes it under `key`.
    ///
    /// # Errors
    /// - `StorageError::Serialize` when the value cannot be encoded.
    /// - `StorageError::Sqlite` when the underlying write fails (for example
    ///   capacity exceeded).
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let text = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        self.store.set(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::StorageAdapter;
    use crate::storage::{open_store_in_memory, LocalStore, SqliteLocalStore};

    #[test]
    fn load_returns_default_for_absent_key() {
        let conn = open_store_in_memory().unwrap();
        let adapter = StorageAdapter::new(SqliteLocalStore::new(&conn));

        let value: Vec<String> = adapter.load("missing", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn load_returns_default_for_malformed_json() {
        let conn = open_store_in_memory().unwrap();
        let adapter = StorageAdapter::new(SqliteLocalStore::new(&conn));

        adapter.store().set("broken", "{not json").unwrap();

        let value: Vec<u32> = adapter.load("broken", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let conn = open_store_in_memory().unwrap();
        let adapter = StorageAdapter::new(SqliteLocalStore::new(&conn));

        adapter.save("numbers", &vec![1u32, 2, 3]).unwrap();

        let value: Vec<u32> = adapter.load("numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }
}
