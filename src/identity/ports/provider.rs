//! Provider port for resolving the current actor's identity.

use crate::identity::domain::Identity;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity resolution contract.
///
/// Consumed once per board mount. Callers must treat any error as "no
/// authenticated actor" and deny all drag authorization.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the current user's id, organization role, and team ids.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthenticated`] when no session exists,
    /// [`IdentityError::SessionExpired`] when the credential is no longer
    /// valid, or [`IdentityError::Transport`] for service-level failures.
    async fn current_identity(&self) -> IdentityResult<Identity>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No authenticated session exists.
    #[error("not authenticated")]
    Unauthenticated,

    /// The session credential has expired.
    #[error("session expired")]
    SessionExpired,

    /// Service-level failure while resolving the identity.
    #[error("identity service error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a service-level transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
