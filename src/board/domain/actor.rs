//! Board-side actor: resolved identity plus the personal task set.

use super::TaskId;
use crate::identity::domain::{Identity, OrgRole, TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The authenticated user in board context.
///
/// Composes the resolved [`Identity`] with the set of task ids personally
/// assigned to the user ("my tasks"), which the identity service does not
/// carry and the task listing service supplies at mount. Immutable for the
/// lifetime of one board mount; remounting re-resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    identity: Identity,
    my_task_ids: HashSet<TaskId>,
}

impl Actor {
    /// Composes an actor from a resolved identity and the personal task set.
    #[must_use]
    pub fn new(identity: Identity, my_task_ids: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            identity,
            my_task_ids: my_task_ids.into_iter().collect(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.identity.user_id()
    }

    /// Returns the organization role.
    #[must_use]
    pub const fn role(&self) -> OrgRole {
        self.identity.role()
    }

    /// Returns the team memberships.
    #[must_use]
    pub const fn team_ids(&self) -> &HashSet<TeamId> {
        self.identity.team_ids()
    }

    /// Returns the personal task id set.
    #[must_use]
    pub const fn my_task_ids(&self) -> &HashSet<TaskId> {
        &self.my_task_ids
    }

    /// Returns whether the actor is an organization admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.role() == OrgRole::Admin
    }

    /// Returns whether the actor belongs to the given team.
    #[must_use]
    pub fn is_member_of(&self, team: TeamId) -> bool {
        self.identity.is_member_of(team)
    }

    /// Returns whether the task is personally assigned to the actor.
    #[must_use]
    pub fn is_assigned(&self, task: TaskId) -> bool {
        self.my_task_ids.contains(&task)
    }
}
