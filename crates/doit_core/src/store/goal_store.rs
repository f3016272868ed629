//! Goal store over the typed storage adapter.
//!
//! # Responsibility
//! - Hold the authoritative goal list and expose the only mutation surface.
//! - Write the full list through to storage on every mutation.
//!
//! # Invariants
//! - Writes are optimistic: on persistence failure the in-memory list stays
//!   updated and the error propagates; there is no rollback or retry.
//! - `add` and `reorder` leave the touched partition numbered 0..n-1;
//!   `complete`/`uncomplete`/`delete` do not renumber, so collisions and
//!   gaps can exist and the stable-sorted views keep them deterministic.

use crate::model::goal::{Goal, GoalId, GoalStatus};
use crate::storage::{LocalStore, StorageAdapter};
use crate::store::{migrations, ordering, StoreResult};
use chrono::{NaiveDate, Utc};
use log::{error, info};

/// Storage key holding the full goal list as a JSON array.
pub const GOALS_KEY: &str = "doit-goals";

/// Owned, encapsulated goal store.
///
/// Generic over the raw store so tests can exercise persistence failures
/// without a real substrate.
pub struct GoalStore<S: LocalStore> {
    adapter: StorageAdapter<S>,
    goals: Vec<Goal>,
}

impl<S: LocalStore> GoalStore<S> {
    /// Loads the persisted list and runs pending data migrations.
    ///
    /// # Contract
    /// - Absent or malformed persisted data loads as an empty list.
    /// - Migration marker keys are honored; a migrated list is persisted
    ///   before this returns.
    pub fn open(store: S) -> StoreResult<Self> {
        let adapter = StorageAdapter::new(store);
        let mut goals: Vec<Goal> = adapter.load(GOALS_KEY, Vec::new());
        migrations::run_pending(&adapter, &mut goals)?;

        info!(
            "event=goal_store_open module=store status=ok goal_count={}",
            goals.len()
        );
        Ok(Self { adapter, goals })
    }

    /// The raw underlying list, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Active goals, stable-sorted ascending by manual order.
    pub fn active_goals(&self) -> Vec<&Goal> {
        self.partition(GoalStatus::Active)
    }

    /// Completed goals, stable-sorted ascending by manual order.
    pub fn completed_goals(&self) -> Vec<&Goal> {
        self.partition(GoalStatus::Completed)
    }

    fn partition(&self, status: GoalStatus) -> Vec<&Goal> {
        ordering::partition_indices(&self.goals, status)
            .into_iter()
            .map(|index| &self.goals[index])
            .collect()
    }

    /// Creates a new active goal and appends it to the list.
    ///
    /// # Contract
    /// - `title` is trimmed; non-emptiness and "end date not in the past"
    ///   are the caller's responsibility (`validate_goal_input`).
    /// - `order` becomes one greater than the current maximum active order,
    ///   or 0 when no active goal carries one.
    pub fn add(&mut self, title: &str, end_date: NaiveDate) -> StoreResult<GoalId> {
        let order = self
            .goals
            .iter()
            .filter(|goal| goal.is_active())
            .filter_map(|goal| goal.order)
            .max()
            .map_or(0, |max| max + 1);

        let goal = Goal::new(title, end_date, order);
        let id = goal.id;
        self.goals.push(goal);
        self.persist()?;

        info!("event=goal_add module=store status=ok goal_id={id} order={order}");
        Ok(id)
    }

    /// Marks the goal as completed; no-op on unknown id.
    ///
    /// Leaves `order` untouched, so it may collide with orders already in
    /// the completed partition.
    pub fn complete(&mut self, id: GoalId) -> StoreResult<()> {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return Ok(());
        };
        goal.complete(Utc::now());
        self.persist()?;

        info!("event=goal_complete module=store status=ok goal_id={id}");
        Ok(())
    }

    /// Returns the goal to the active partition; no-op on unknown id.
    pub fn uncomplete(&mut self, id: GoalId) -> StoreResult<()> {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return Ok(());
        };
        goal.uncomplete();
        self.persist()?;

        info!("event=goal_uncomplete module=store status=ok goal_id={id}");
        Ok(())
    }

    /// Removes the goal permanently; no-op on unknown id.
    ///
    /// Remaining orders in the former partition are not renumbered; gaps
    /// are tolerated by the stable-sorted views.
    pub fn delete(&mut self, id: GoalId) -> StoreResult<()> {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return Ok(());
        }
        self.persist()?;

        info!("event=goal_delete module=store status=ok goal_id={id}");
        Ok(())
    }

    /// Moves the goal from `old_index` to `new_index` within the
    /// order-sorted view of `status`, then renumbers that partition 0..n-1.
    ///
    /// # Contract
    /// - No-op on unknown id.
    /// - `StoreError::IndexOutOfBounds` when either index falls outside the
    ///   partition.
    /// - The other partition is untouched.
    pub fn reorder(
        &mut self,
        id: GoalId,
        old_index: usize,
        new_index: usize,
        status: GoalStatus,
    ) -> StoreResult<()> {
        if !self.goals.iter().any(|goal| goal.id == id) {
            return Ok(());
        }

        ordering::reorder_partition(&mut self.goals, status, old_index, new_index)?;
        self.persist()?;

        info!(
            "event=goal_reorder module=store status=ok goal_id={id} old_index={old_index} new_index={new_index}"
        );
        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        self.adapter.save(GOALS_KEY, &self.goals).map_err(|err| {
            error!("event=store_save_failed module=store status=error error={err}");
            err.into()
        })
    }
}
