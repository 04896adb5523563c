//! In-memory task snapshot for one board mount.

use super::{Task, TaskId, TaskStatus};
use mockable::Clock;
use std::collections::HashMap;

/// Ordered in-memory collection of a project's tasks.
///
/// The snapshot is the source of truth for board rendering during one mount.
/// It preserves the listing service's order, supports the synchronous
/// optimistic status write, and restores a status when a remote mutation
/// fails. It is only ever mutated from the single event-handling context, so
/// no locking is involved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
}

impl TaskSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from listed tasks, preserving their order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let index = tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (task.id(), position))
            .collect();
        Self { tasks, index }
    }

    /// Returns all tasks in listing order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.index
            .get(&id)
            .and_then(|&position| self.tasks.get(position))
    }

    /// Returns the number of tasks in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the snapshot holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Applies an optimistic in-place status write.
    ///
    /// Visible immediately to all consumers. Returns the previous status for
    /// rollback, or `None` when the id is unknown (no-op).
    pub fn replace_status(
        &mut self,
        id: TaskId,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Option<TaskStatus> {
        let position = *self.index.get(&id)?;
        self.tasks
            .get_mut(position)
            .map(|task| task.replace_status(status, clock))
    }

    /// Restores a task's status after a failed remote mutation.
    ///
    /// Unknown ids are a no-op.
    pub fn revert(&mut self, id: TaskId, previous: TaskStatus, clock: &impl Clock) {
        let _ = self.replace_status(id, previous, clock);
    }
}
