//! In-memory board adapters for tests and host wiring.

mod gateway;
mod listing;

pub use gateway::RecordingStatusGateway;
pub use listing::InMemoryTaskListing;
