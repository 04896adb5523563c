//! In-memory identity adapters for tests and host wiring.

mod provider;

pub use provider::StaticIdentityProvider;
