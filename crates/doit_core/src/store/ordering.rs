//! Manual ordering within a status partition.
//!
//! # Responsibility
//! - Produce the stable order-sorted view of one status partition.
//! - Move one entry within that view and renumber the partition 0..n-1.
//!
//! # Invariants
//! - Sorting is stable: equal or missing orders keep underlying list
//!   position, so legacy collisions stay deterministic.
//! - Renumbering touches only the targeted partition.

use crate::model::goal::{Goal, GoalStatus};
use crate::store::{StoreError, StoreResult};

/// Sort key placing order-less legacy records after every numbered one.
fn order_key(goal: &Goal) -> u64 {
    goal.order.map_or(u64::from(u32::MAX) + 1, u64::from)
}

/// Returns indices into `goals` for the given status, stable-sorted by
/// `order` ascending.
pub(crate) fn partition_indices(goals: &[Goal], status: GoalStatus) -> Vec<usize> {
    let mut indices: Vec<usize> = goals
        .iter()
        .enumerate()
        .filter(|(_, goal)| goal.status == status)
        .map(|(index, _)| index)
        .collect();
    indices.sort_by_key(|&index| order_key(&goals[index]));
    indices
}

/// Moves the partition entry at `old_index` to `new_index`, then reassigns
/// `order = position` for every goal in the partition.
///
/// This is a full renormalization, not a sparse shift; the other partition
/// is left untouched.
pub(crate) fn reorder_partition(
    goals: &mut [Goal],
    status: GoalStatus,
    old_index: usize,
    new_index: usize,
) -> StoreResult<()> {
    let mut sequence = partition_indices(goals, status);
    let len = sequence.len();

    if old_index >= len {
        return Err(StoreError::IndexOutOfBounds {
            index: old_index,
            len,
        });
    }
    if new_index >= len {
        return Err(StoreError::IndexOutOfBounds {
            index: new_index,
            len,
        });
    }

    let moved = sequence.remove(old_index);
    sequence.insert(new_index, moved);

    for (position, &goal_index) in sequence.iter().enumerate() {
        goals[goal_index].order = Some(position as u32);
    }

    Ok(())
}
