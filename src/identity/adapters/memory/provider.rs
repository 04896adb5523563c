//! In-memory identity provider returning a fixed resolution outcome.

use async_trait::async_trait;

use crate::identity::{
    domain::Identity,
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Identity provider that always resolves to the same outcome.
///
/// Used by tests and by hosts that resolve the session elsewhere and inject
/// the result into the board.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    outcome: IdentityResult<Identity>,
}

impl StaticIdentityProvider {
    /// Creates a provider that resolves to the given identity.
    #[must_use]
    pub const fn authenticated(identity: Identity) -> Self {
        Self {
            outcome: Ok(identity),
        }
    }

    /// Creates a provider that fails with [`IdentityError::Unauthenticated`].
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            outcome: Err(IdentityError::Unauthenticated),
        }
    }

    /// Creates a provider that fails with the given error.
    #[must_use]
    pub const fn failing(error: IdentityError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> IdentityResult<Identity> {
        self.outcome.clone()
    }
}
