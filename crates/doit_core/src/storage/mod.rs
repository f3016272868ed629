//! Local persistent store bootstrap and key-value access.
//!
//! # Responsibility
//! - Open and configure the SQLite-backed local store.
//! - Apply schema migrations in deterministic order.
//! - Expose the raw string key-value contract and a typed binding over it.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod adapter;
pub mod local_store;
pub mod migrations;
mod open;

pub use adapter::StorageAdapter;
pub use local_store::{LocalStore, SqliteLocalStore};
pub use open::{open_store, open_store_in_memory};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by the local store or the typed binding over it.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying SQLite read/write failure (including capacity errors).
    Sqlite(rusqlite::Error),
    /// Store file was written by a newer schema than this binary supports.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Value could not be serialized for persistence.
    Serialize(serde_json::Error),
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
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize value: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
