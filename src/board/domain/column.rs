//! Derived board column layout.

use super::{Task, TaskStatus};
use serde::Serialize;

/// One board column: a status and the ordered tasks currently in it.
///
/// Columns are derived views. They are recomputed from the task snapshot on
/// every change and never mutated directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Creates a column for the given status.
    #[must_use]
    pub const fn new(status: TaskStatus, tasks: Vec<Task>) -> Self {
        Self { status, tasks }
    }

    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the tasks in snapshot order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Projects tasks into the four fixed board columns.
///
/// Columns appear in [`TaskStatus::BOARD_ORDER`]. Each column is a stable
/// partition: tasks keep the snapshot's relative order and are not re-sorted
/// by any other key. O(n) over the task set; no caching.
#[must_use]
pub fn project_columns(tasks: &[Task]) -> Vec<BoardColumn> {
    TaskStatus::BOARD_ORDER
        .into_iter()
        .map(|status| {
            let grouped = tasks
                .iter()
                .filter(|task| task.status() == status)
                .cloned()
                .collect();
            BoardColumn::new(status, grouped)
        })
        .collect()
}
