//! Goal store: the authoritative list and its only mutation surface.
//!
//! # Responsibility
//! - Own the in-memory goal list and derive the active/completed views.
//! - Write every mutation through to the storage adapter.
//! - Run pending data migrations once at initialization.
//!
//! # Invariants
//! - Mutations are the only way the list changes; no ambient singleton.
//! - Unknown ids are silent no-ops, never errors.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal_store;
pub mod migrations;
pub(crate) mod ordering;

pub use goal_store::{GoalStore, GOALS_KEY};
pub use migrations::MIGRATION_V2_KEY;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by goal store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence failed; the in-memory list is already updated and stays
    /// ahead of storage until the next successful write.
    Storage(StorageError),
    /// Reorder index falls outside the targeted status partition.
    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "reorder index {index} out of bounds for partition of {len}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
