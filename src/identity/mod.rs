//! Identity and membership resolution for the board client.
//!
//! This module resolves the current actor's identity: user id, organization
//! role, and team memberships. The resolved identity is consumed once per
//! board mount and treated as immutable for the session. Resolution failure
//! must disable all drag authorization rather than defaulting to permissive
//! behaviour. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
