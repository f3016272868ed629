//! Raw string key-value contract over the local store.
//!
//! # Responsibility
//! - Define the synchronous get/set/remove contract used by the typed
//!   storage adapter.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Keys map to at most one value; `set` overwrites in place.
//! - Callers must only pass connections returned by `open_store*`.

use crate::storage::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Synchronous string key-value store contract.
///
/// The trait seam lets the goal store be exercised against fakes that fail
/// on demand, mirroring quota-exceeded behavior of the real substrate.
pub trait LocalStore {
    /// Reads the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Deletes `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// SQLite-backed key-value store over the `kv` table.
pub struct SqliteLocalStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocalStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LocalStore for SqliteLocalStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}
