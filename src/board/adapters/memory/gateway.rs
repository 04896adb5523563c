//! Recording status gateway with failure injection.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{TaskId, TaskStatus},
    ports::{StatusGateway, StatusUpdateError, StatusUpdateResult},
};

/// Thread-safe in-memory status gateway.
///
/// Records every update request it receives (including rejected ones) so
/// tests can assert that silent rejections never reach the mutation service,
/// and can be switched into a failing mode to exercise rollback.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatusGateway {
    state: Arc<RwLock<GatewayState>>,
}

#[derive(Debug, Default)]
struct GatewayState {
    calls: Vec<(TaskId, TaskStatus)>,
    failure: Option<String>,
}

impl RecordingStatusGateway {
    /// Creates a gateway that accepts every update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent update fail with the given message.
    ///
    /// # Errors
    ///
    /// Returns [`StatusUpdateError::Transport`] when internal state is
    /// poisoned.
    pub fn fail_with(&self, message: impl Into<String>) -> StatusUpdateResult<()> {
        let mut state = self.write_state()?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Clears a previously injected failure.
    ///
    /// # Errors
    ///
    /// Returns [`StatusUpdateError::Transport`] when internal state is
    /// poisoned.
    pub fn clear_failure(&self) -> StatusUpdateResult<()> {
        let mut state = self.write_state()?;
        state.failure = None;
        Ok(())
    }

    /// Returns every update request received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusUpdateError::Transport`] when internal state is
    /// poisoned.
    pub fn recorded_calls(&self) -> StatusUpdateResult<Vec<(TaskId, TaskStatus)>> {
        let state = self
            .state
            .read()
            .map_err(|err| StatusUpdateError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.calls.clone())
    }

    fn write_state(&self) -> StatusUpdateResult<std::sync::RwLockWriteGuard<'_, GatewayState>> {
        self.state
            .write()
            .map_err(|err| StatusUpdateError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl StatusGateway for RecordingStatusGateway {
    async fn update_status(&self, task: TaskId, status: TaskStatus) -> StatusUpdateResult<()> {
        let mut state = self.write_state()?;
        state.calls.push((task, status));
        match &state.failure {
            Some(message) => Err(StatusUpdateError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}
