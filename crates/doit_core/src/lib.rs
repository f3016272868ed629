//! Core goal-tracking logic for DoIt.
//! This crate is the single source of truth for business invariants.

pub mod dates;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use dates::{days_remaining, days_remaining_text, today_local, urgency_level, UrgencyLevel};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{validate_goal_input, Goal, GoalId, GoalStatus, GoalValidationError};
pub use storage::{
    open_store, open_store_in_memory, LocalStore, SqliteLocalStore, StorageAdapter, StorageError,
    StorageResult,
};
pub use store::{GoalStore, StoreError, StoreResult, GOALS_KEY, MIGRATION_V2_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
