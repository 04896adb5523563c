//! Listing port for fetching board and personal tasks.

use crate::board::domain::{ProjectId, Task};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task listing operations.
pub type TaskListingResult<T> = Result<T, TaskListingError>;

/// Task listing contract.
///
/// Both listings are fetched once per board mount, concurrently with
/// identity resolution. A failure leaves any prior snapshot untouched.
#[async_trait]
pub trait TaskListing: Send + Sync {
    /// Lists all tasks of the given project in board order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError`] when the listing service is unavailable
    /// or the request fails.
    async fn list_for_project(&self, project: ProjectId) -> TaskListingResult<Vec<Task>>;

    /// Lists the tasks personally assigned to the current actor.
    ///
    /// Only the ids are consumed; the full records are returned because that
    /// is the shape the listing service exposes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListingError`] when the listing service is unavailable
    /// or the request fails.
    async fn list_for_actor(&self) -> TaskListingResult<Vec<Task>>;
}

/// Errors returned by task listing implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListingError {
    /// The listing service reported a failure.
    #[error("task listing failed: {0}")]
    Unavailable(String),

    /// Transport-level failure while reaching the listing service.
    #[error("task listing transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListingError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
