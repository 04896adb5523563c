//! Domain model for identity and membership resolution.
//!
//! Models the authenticated user's identifier, organization-scoped role, and
//! team memberships as returned by the identity service. Infrastructure
//! concerns stay outside the domain boundary.

mod error;
mod identity;
mod ids;
mod role;

pub use error::ParseOrgRoleError;
pub use identity::Identity;
pub use ids::{TeamId, UserId};
pub use role::OrgRole;
