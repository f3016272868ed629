//! Domain model for goal tracking.
//!
//! # Responsibility
//! - Define the canonical goal record persisted by the storage layer.
//! - Provide caller-side input validation for goal creation.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId` that is never reused.
//! - Deletion is permanent; there are no tombstones.

pub mod goal;
