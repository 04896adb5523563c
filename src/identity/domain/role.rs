//! Organization-scoped role of an authenticated user.

use super::ParseOrgRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user within their organization.
///
/// Admins may move any task on any board; ordinary members are limited to
/// tasks assigned to them personally or to one of their teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    /// Organization administrator.
    Admin,
    /// Ordinary organization member.
    Member,
}

impl OrgRole {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OrgRole {
    type Error = ParseOrgRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(ParseOrgRoleError(value.to_owned())),
        }
    }
}
