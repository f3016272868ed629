//! Deadline display helpers.
//!
//! # Responsibility
//! - Derive days-remaining, urgency, and display text from a goal deadline.
//!
//! # Invariants
//! - A deadline equal to `today` is "due today", never overdue.
//! - Functions take `today` explicitly so callers and tests stay
//!   deterministic; `today_local` is the convenience entry point.

use crate::model::goal::Goal;
use chrono::{Local, NaiveDate};

/// Urgency bucket derived from days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyLevel {
    /// More than three days remain.
    Normal,
    /// Between zero and three days remain.
    Urgent,
    /// Deadline has passed.
    Overdue,
}

/// Signed day count from `today` to the goal deadline.
///
/// Negative values mean the goal is overdue.
pub fn days_remaining(goal: &Goal, today: NaiveDate) -> i64 {
    (goal.end_date - today).num_days()
}

/// Urgency bucket for the goal deadline.
pub fn urgency_level(goal: &Goal, today: NaiveDate) -> UrgencyLevel {
    let days = days_remaining(goal, today);
    if days < 0 {
        UrgencyLevel::Overdue
    } else if days <= 3 {
        UrgencyLevel::Urgent
    } else {
        UrgencyLevel::Normal
    }
}

/// Human-readable deadline text, e.g. `"2 days left"` or `"Overdue"`.
pub fn days_remaining_text(goal: &Goal, today: NaiveDate) -> String {
    match days_remaining(goal, today) {
        days if days < 0 => "Overdue".to_string(),
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        days => format!("{days} days left"),
    }
}

/// Today in the local timezone, for UI callers.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
