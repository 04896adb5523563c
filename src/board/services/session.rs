//! Board session: mount-time loading and the status transition protocol.

use crate::board::{
    domain::{
        Actor, BoardColumn, ProjectId, Task, TaskId, TaskSnapshot, TaskStatus, can_drag,
        project_columns,
    },
    ports::{StatusGateway, StatusUpdateError, TaskListing, TaskListingError},
};
use crate::identity::ports::{IdentityError, IdentityProvider};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Payload carried by a drop gesture.
///
/// A payload may arrive without a task id (forged or mangled drops); such
/// drops are rejected silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DropPayload {
    task_id: Option<TaskId>,
}

impl DropPayload {
    /// Creates a payload carrying the given task id.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id: Some(task_id),
        }
    }

    /// Creates a payload carrying no task id.
    #[must_use]
    pub const fn empty() -> Self {
        Self { task_id: None }
    }

    /// Returns the carried task id, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        self.task_id
    }
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The optimistic write was applied and confirmed by the gateway.
    Applied,
    /// The request was rejected silently: same column, unknown or missing
    /// task id, or authorization denied. No state changed and no remote
    /// call was made.
    Ignored,
}

/// Errors surfaced when loading the board.
#[derive(Debug, Clone, Error)]
pub enum BoardLoadError {
    /// Identity resolution failed; all drag authorization is disabled.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Task listing failed; the prior snapshot is left untouched.
    #[error(transparent)]
    Listing(#[from] TaskListingError),
}

/// Result type for board load operations.
pub type BoardLoadResult<T> = Result<T, BoardLoadError>;

/// Errors surfaced by a failed status transition.
#[derive(Debug, Clone, Error)]
pub enum TransitionError {
    /// The authoritative mutation failed; the optimistic write was reverted.
    #[error(transparent)]
    Mutation(#[from] StatusUpdateError),
}

/// Result type for status transition operations.
pub type TransitionResult<T> = Result<T, TransitionError>;

/// One mounted board for one project.
///
/// Owns the task snapshot and the resolved actor for the lifetime of the
/// mount and exposes the render and gesture surface consumed by the host
/// page: render-ready columns, the drag affordance query, and the status
/// transition entry points. All mutation goes through `&mut self`; the
/// session is single-mutator by construction and needs no locking.
///
/// Dropping the session (or an in-flight [`BoardSession::mount`] future)
/// discards outstanding load results without mutating anything; there is no
/// cancellation primitive.
pub struct BoardSession<L, G, I, C>
where
    L: TaskListing,
    G: StatusGateway,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    listing: Arc<L>,
    gateway: Arc<G>,
    identity: Arc<I>,
    clock: Arc<C>,
    project_id: ProjectId,
    snapshot: TaskSnapshot,
    actor: Option<Actor>,
    notice: Option<String>,
}

impl<L, G, I, C> BoardSession<L, G, I, C>
where
    L: TaskListing,
    G: StatusGateway,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates an unmounted session for the given project.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        listing: Arc<L>,
        gateway: Arc<G>,
        identity: Arc<I>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            listing,
            gateway,
            identity,
            clock,
            project_id,
            snapshot: TaskSnapshot::new(),
            actor: None,
            notice: None,
        }
    }

    /// Loads the actor and task snapshot for this board.
    ///
    /// Identity resolution, the project listing, and the personal listing
    /// are issued concurrently and may complete in any order. On success the
    /// snapshot and actor are replaced atomically from this call's results.
    ///
    /// Remounting is calling `mount` again; the actor is re-resolved and the
    /// snapshot rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`BoardLoadError::Identity`] when identity resolution fails;
    /// the actor is cleared so every authorization check fails closed.
    /// Returns [`BoardLoadError::Listing`] when either listing fails; the
    /// prior snapshot and actor are left untouched. Either failure records a
    /// notice for the host to display.
    pub async fn mount(&mut self) -> BoardLoadResult<()> {
        let (identity, project_tasks, actor_tasks) = tokio::join!(
            self.identity.current_identity(),
            self.listing.list_for_project(self.project_id),
            self.listing.list_for_actor(),
        );

        let identity = match identity {
            Ok(identity) => identity,
            Err(err) => {
                self.actor = None;
                self.notice = Some(err.to_string());
                return Err(err.into());
            }
        };
        let project_tasks = self.accept_listing(project_tasks)?;
        let actor_tasks = self.accept_listing(actor_tasks)?;

        let my_task_ids: Vec<TaskId> = actor_tasks.iter().map(Task::id).collect();
        self.actor = Some(Actor::new(identity, my_task_ids));
        self.snapshot = TaskSnapshot::from_tasks(project_tasks);
        self.notice = None;
        Ok(())
    }

    /// Returns the render-ready column layout.
    ///
    /// Recomputed from the snapshot on every call; columns are derived
    /// views, never patched.
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn> {
        project_columns(self.snapshot.tasks())
    }

    /// Returns whether the current actor may drag the given task.
    ///
    /// The host uses this to style drag affordances; the drop path re-checks
    /// it regardless. Unknown tasks and an unresolved actor both yield
    /// `false`.
    #[must_use]
    pub fn can_drag(&self, task: TaskId) -> bool {
        self.snapshot
            .get(task)
            .is_some_and(|candidate| can_drag(self.actor.as_ref(), candidate))
    }

    /// Handles a drop gesture targeting the given column.
    ///
    /// A payload without a task id is rejected silently; otherwise this is
    /// [`BoardSession::request_status_change`].
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Mutation`] when the authoritative update
    /// fails after the optimistic write; the write is rolled back first.
    pub async fn drop_on_column(
        &mut self,
        payload: DropPayload,
        target: TaskStatus,
    ) -> TransitionResult<TransitionOutcome> {
        let Some(task_id) = payload.task_id() else {
            return Ok(TransitionOutcome::Ignored);
        };
        self.request_status_change(task_id, target).await
    }

    /// Requests a status change for one task.
    ///
    /// Shared by the drop handler and the tasks-list selector view; the
    /// triggering gesture differs, the protocol does not. The request is
    /// rejected silently when the task is unknown, already in the target
    /// status, or not draggable by the current actor. Otherwise the status
    /// is written optimistically, the authoritative update is requested, and
    /// a failure reverts exactly this task's status and records a notice.
    /// Success keeps the optimistic state without a re-fetch and clears any
    /// prior notice.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Mutation`] when the authoritative update
    /// fails; the snapshot is already rolled back when this returns.
    pub async fn request_status_change(
        &mut self,
        task_id: TaskId,
        target: TaskStatus,
    ) -> TransitionResult<TransitionOutcome> {
        let authorized = match self.snapshot.get(task_id) {
            Some(task) if task.status() == target => return Ok(TransitionOutcome::Ignored),
            Some(task) => can_drag(self.actor.as_ref(), task),
            None => return Ok(TransitionOutcome::Ignored),
        };
        if !authorized {
            return Ok(TransitionOutcome::Ignored);
        }

        let Some(previous) = self.snapshot.replace_status(task_id, target, &*self.clock) else {
            return Ok(TransitionOutcome::Ignored);
        };

        match self.gateway.update_status(task_id, target).await {
            Ok(()) => {
                self.notice = None;
                Ok(TransitionOutcome::Applied)
            }
            Err(err) => {
                self.snapshot.revert(task_id, previous, &*self.clock);
                self.notice = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Returns the project this board is mounted for.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the resolved actor, if identity resolution succeeded.
    #[must_use]
    pub const fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// Returns the current task snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &TaskSnapshot {
        &self.snapshot
    }

    /// Returns the error notice to display, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn accept_listing(&mut self, result: Result<Vec<Task>, TaskListingError>) -> BoardLoadResult<Vec<Task>> {
        result.map_err(|err| {
            self.notice = Some(err.to_string());
            err.into()
        })
    }
}
