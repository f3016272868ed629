//! Goal domain model.
//!
//! # Responsibility
//! - Define the canonical goal record shared by store and storage layers.
//! - Provide lifecycle helpers for the active/completed transition.
//! - Validate raw user input before a goal is ever created.
//!
//! # Invariants
//! - `id` is stable and never reused for another goal.
//! - `completed_at` is present if and only if `status == Completed`.
//! - `order` is `None` only for legacy records that predate the manual
//!   ordering migration; every record written by this crate carries a value.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Not completed yet; shown in the active column.
    Active,
    /// Completed; shown in the completed column.
    Completed,
}

/// Canonical goal record.
///
/// Serialized field names follow the persisted JSON layout
/// (`{id, title, endDate, status, createdAt, completedAt?, order?}`), so a
/// stored list round-trips field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Stable UUID assigned at creation.
    pub id: GoalId,
    /// User-provided description, trimmed at creation.
    pub title: String,
    /// Deadline date (`YYYY-MM-DD` on the wire).
    pub end_date: NaiveDate,
    /// Current lifecycle state.
    pub status: GoalStatus,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Set on completion, cleared when the goal becomes active again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Manual position among goals sharing the same status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Goal {
    /// Creates a new active goal with a generated stable ID.
    ///
    /// # Invariants
    /// - `title` is trimmed of leading/trailing whitespace.
    /// - `status` starts as `Active` with no completion timestamp.
    pub fn new(title: impl Into<String>, end_date: NaiveDate, order: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, end_date, order)
    }

    /// Creates a goal with a caller-provided stable ID.
    ///
    /// Used by tests and migration fixtures where identity already exists.
    pub fn with_id(id: GoalId, title: impl Into<String>, end_date: NaiveDate, order: u32) -> Self {
        Self {
            id,
            title: title.into().trim().to_string(),
            end_date,
            status: GoalStatus::Active,
            created_at: Utc::now(),
            completed_at: None,
            order: Some(order),
        }
    }

    /// Marks this goal as completed at the given time.
    ///
    /// Does not touch `order`; partition renumbering is the store's concern.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.status = GoalStatus::Completed;
        self.completed_at = Some(at);
    }

    /// Returns this goal to the active state and clears `completed_at`.
    pub fn uncomplete(&mut self) {
        self.status = GoalStatus::Active;
        self.completed_at = None;
    }

    /// Returns whether this goal is in the active partition.
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// Field-level validation failure for goal creation input.
///
/// Surfaced to the user as a per-field message; the store is never invoked
/// when validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    /// Title is blank after trimming.
    TitleRequired,
    /// End-date text is blank.
    EndDateRequired,
    /// End-date text does not parse as a `YYYY-MM-DD` date.
    EndDateInvalid(String),
    /// End date is earlier than today.
    EndDateInPast(NaiveDate),
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title is required"),
            Self::EndDateRequired => write!(f, "end date is required"),
            Self::EndDateInvalid(raw) => {
                write!(f, "end date `{raw}` is not a valid YYYY-MM-DD date")
            }
            Self::EndDateInPast(date) => write!(f, "end date {date} cannot be in the past"),
        }
    }
}

impl Error for GoalValidationError {}

/// Validates raw goal-creation input against today's date.
///
/// # Contract
/// - Returns the trimmed title and parsed end date on success.
/// - An end date equal to `today` is valid; only strictly earlier dates are
///   rejected.
pub fn validate_goal_input(
    title: &str,
    end_date: &str,
    today: NaiveDate,
) -> Result<(String, NaiveDate), GoalValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(GoalValidationError::TitleRequired);
    }

    let end_date = end_date.trim();
    if end_date.is_empty() {
        return Err(GoalValidationError::EndDateRequired);
    }

    let parsed = NaiveDate::parse_from_str(end_date, "%Y-%m-%d")
        .map_err(|_| GoalValidationError::EndDateInvalid(end_date.to_string()))?;

    if parsed < today {
        return Err(GoalValidationError::EndDateInPast(parsed));
    }

    Ok((title.to_string(), parsed))
}
