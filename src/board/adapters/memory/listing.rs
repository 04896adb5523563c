//! In-memory task listing backed by per-project fixtures.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ProjectId, Task},
    ports::{TaskListing, TaskListingError, TaskListingResult},
};

/// Thread-safe in-memory task listing.
///
/// Serves fixed task fixtures per project plus a personal task list, with
/// optional failure injection for exercising load-error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListing {
    state: Arc<RwLock<ListingState>>,
}

#[derive(Debug, Default)]
struct ListingState {
    project_tasks: HashMap<ProjectId, Vec<Task>>,
    actor_tasks: Vec<Task>,
    failure: Option<String>,
}

impl InMemoryTaskListing {
    /// Creates an empty listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task fixtures for a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError::Transport`] when internal state is
    /// poisoned.
    pub fn set_project_tasks(
        &self,
        project: ProjectId,
        tasks: impl IntoIterator<Item = Task>,
    ) -> TaskListingResult<()> {
        let mut state = self.write_state()?;
        state.project_tasks.insert(project, tasks.into_iter().collect());
        Ok(())
    }

    /// Replaces the personal task fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError::Transport`] when internal state is
    /// poisoned.
    pub fn set_actor_tasks(&self, tasks: impl IntoIterator<Item = Task>) -> TaskListingResult<()> {
        let mut state = self.write_state()?;
        state.actor_tasks = tasks.into_iter().collect();
        Ok(())
    }

    /// Makes every subsequent listing call fail with the given message.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError::Transport`] when internal state is
    /// poisoned.
    pub fn fail_with(&self, message: impl Into<String>) -> TaskListingResult<()> {
        let mut state = self.write_state()?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Clears a previously injected failure.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError::Transport`] when internal state is
    /// poisoned.
    pub fn clear_failure(&self) -> TaskListingResult<()> {
        let mut state = self.write_state()?;
        state.failure = None;
        Ok(())
    }

    fn write_state(&self) -> TaskListingResult<std::sync::RwLockWriteGuard<'_, ListingState>> {
        self.state
            .write()
            .map_err(|err| TaskListingError::transport(std::io::Error::other(err.to_string())))
    }

    fn read_state(&self) -> TaskListingResult<std::sync::RwLockReadGuard<'_, ListingState>> {
        self.state
            .read()
            .map_err(|err| TaskListingError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskListing for InMemoryTaskListing {
    async fn list_for_project(&self, project: ProjectId) -> TaskListingResult<Vec<Task>> {
        let state = self.read_state()?;
        if let Some(message) = &state.failure {
            return Err(TaskListingError::Unavailable(message.clone()));
        }
        Ok(state.project_tasks.get(&project).cloned().unwrap_or_default())
    }

    async fn list_for_actor(&self) -> TaskListingResult<Vec<Task>> {
        let state = self.read_state()?;
        if let Some(message) = &state.failure {
            return Err(TaskListingError::Unavailable(message.clone()));
        }
        Ok(state.actor_tasks.clone())
    }
}
