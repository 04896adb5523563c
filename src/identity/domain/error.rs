//! Error types for identity domain parsing.

use thiserror::Error;

/// Error returned while parsing an organization role from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown organization role: {0}")]
pub struct ParseOrgRoleError(pub String);
