//! Mutation port for the authoritative status update.

use crate::board::domain::{TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status mutation operations.
pub type StatusUpdateResult<T> = Result<T, StatusUpdateError>;

/// Authoritative status mutation contract.
///
/// Invoked after the optimistic local write. On failure the caller reverts
/// the local write; no automatic retry is performed.
#[async_trait]
pub trait StatusGateway: Send + Sync {
    /// Requests the authoritative status update for one task.
    ///
    /// # Errors
    ///
    /// Returns [`StatusUpdateError::Rejected`] with a human-readable message
    /// when the service refuses the update, or
    /// [`StatusUpdateError::Transport`] for transport-level failures.
    async fn update_status(&self, task: TaskId, status: TaskStatus) -> StatusUpdateResult<()>;
}

/// Errors returned by status gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusUpdateError {
    /// The mutation service refused the update.
    #[error("status update rejected: {0}")]
    Rejected(String),

    /// Transport-level failure while reaching the mutation service.
    #[error("status update transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusUpdateError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
