//! Port contracts for identity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used at board mount.

pub mod provider;

pub use provider::{IdentityError, IdentityProvider, IdentityResult};
