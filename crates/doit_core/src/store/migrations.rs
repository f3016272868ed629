//! Data migration registry run once at store initialization.
//!
//! # Responsibility
//! - Register data migrations with their marker keys.
//! - Apply pending migrations and persist the migrated list exactly once.
//!
//! # Invariants
//! - A marker value of `"true"` means the migration never reruns.
//! - Markers are written even when the list needed no changes, so the check
//!   stays a single key read on every subsequent open.

use crate::model::goal::Goal;
use crate::storage::{LocalStore, StorageAdapter};
use crate::store::goal_store::GOALS_KEY;
use crate::store::StoreResult;
use log::info;
use std::cmp::Reverse;

/// Marker key recording that the manual-order migration has been applied.
pub const MIGRATION_V2_KEY: &str = "doit-migration-v2";

const MARKER_DONE: &str = "true";

struct DataMigration {
    marker_key: &'static str,
    /// Returns whether the list was modified.
    apply: fn(&mut [Goal]) -> bool,
}

const MIGRATIONS: &[DataMigration] = &[DataMigration {
    marker_key: MIGRATION_V2_KEY,
    apply: assign_manual_order,
}];

/// Applies all data migrations whose marker key is not yet set.
///
/// Persists the migrated list under the goals key when a migration changed
/// it, then records the marker.
pub(crate) fn run_pending<S: LocalStore>(
    adapter: &StorageAdapter<S>,
    goals: &mut [Goal],
) -> StoreResult<()> {
    for migration in MIGRATIONS {
        let marker = adapter.store().get(migration.marker_key)?;
        if marker.as_deref() == Some(MARKER_DONE) {
            continue;
        }

        let changed = (migration.apply)(&mut *goals);
        if changed {
            adapter.save(GOALS_KEY, &goals)?;
        }
        adapter.store().set(migration.marker_key, MARKER_DONE)?;

        info!(
            "event=order_migration module=store status=ok marker={} changed={}",
            migration.marker_key, changed
        );
    }

    Ok(())
}

/// Assigns `order` to legacy goals missing it.
///
/// Legacy sort keys: active goals by ascending end date, completed goals by
/// descending completion time. Goals that already carry an order keep it.
fn assign_manual_order(goals: &mut [Goal]) -> bool {
    let mut changed = false;

    let mut active: Vec<usize> = Vec::new();
    let mut completed: Vec<usize> = Vec::new();
    for (index, goal) in goals.iter().enumerate() {
        if goal.is_active() {
            active.push(index);
        } else {
            completed.push(index);
        }
    }

    active.sort_by_key(|&index| goals[index].end_date);
    completed.sort_by_key(|&index| Reverse(goals[index].completed_at));

    for partition in [active, completed] {
        for (position, &index) in partition.iter().enumerate() {
            if goals[index].order.is_none() {
                goals[index].order = Some(position as u32);
                changed = true;
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::assign_manual_order;
    use crate::model::goal::Goal;
    use chrono::{Duration, NaiveDate, Utc};

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn legacy(title: &str, end_date: &str) -> Goal {
        let mut goal = Goal::new(title, date(end_date), 0);
        goal.order = None;
        goal
    }

    #[test]
    fn assigns_active_order_by_ascending_end_date() {
        let mut goals = vec![
            legacy("later", "2099-03-01"),
            legacy("sooner", "2099-01-01"),
            legacy("middle", "2099-02-01"),
        ];

        assert!(assign_manual_order(&mut goals));

        assert_eq!(goals[0].order, Some(2));
        assert_eq!(goals[1].order, Some(0));
        assert_eq!(goals[2].order, Some(1));
    }

    #[test]
    fn assigns_completed_order_by_descending_completion_time() {
        let now = Utc::now();
        let mut first = legacy("finished first", "2099-01-01");
        first.complete(now - Duration::hours(2));
        let mut second = legacy("finished last", "2099-01-02");
        second.complete(now);

        let mut goals = vec![first, second];
        assert!(assign_manual_order(&mut goals));

        // Most recently completed sorts first.
        assert_eq!(goals[0].order, Some(1));
        assert_eq!(goals[1].order, Some(0));
    }

    #[test]
    fn keeps_existing_order_values_untouched() {
        let mut goals = vec![
            Goal::new("already ordered", date("2099-02-01"), 5),
            legacy("legacy", "2099-01-01"),
        ];

        assert!(assign_manual_order(&mut goals));
        assert_eq!(goals[0].order, Some(5));
        assert_eq!(goals[1].order, Some(0));
    }

    #[test]
    fn reports_unchanged_when_every_goal_is_ordered() {
        let mut goals = vec![
            Goal::new("a", date("2099-01-01"), 0),
            Goal::new("b", date("2099-01-02"), 1),
        ];

        assert!(!assign_manual_order(&mut goals));
    }
}
