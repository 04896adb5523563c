//! Resolved identity of the current user.

use super::{OrgRole, TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The authenticated user's identity as returned by the identity service.
///
/// Carries the user id, organization role, and team memberships. The personal
/// "my tasks" set is a board concern loaded separately from the task listing
/// service and composed into the board-side actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    user_id: UserId,
    role: OrgRole,
    team_ids: HashSet<TeamId>,
}

impl Identity {
    /// Creates an identity with the given role and no team memberships.
    #[must_use]
    pub fn new(user_id: UserId, role: OrgRole) -> Self {
        Self {
            user_id,
            role,
            team_ids: HashSet::new(),
        }
    }

    /// Sets the team memberships.
    #[must_use]
    pub fn with_teams(mut self, teams: impl IntoIterator<Item = TeamId>) -> Self {
        self.team_ids = teams.into_iter().collect();
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the organization role.
    #[must_use]
    pub const fn role(&self) -> OrgRole {
        self.role
    }

    /// Returns the team memberships.
    #[must_use]
    pub const fn team_ids(&self) -> &HashSet<TeamId> {
        &self.team_ids
    }

    /// Returns whether the user belongs to the given team.
    #[must_use]
    pub fn is_member_of(&self, team: TeamId) -> bool {
        self.team_ids.contains(&team)
    }
}
