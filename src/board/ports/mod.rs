//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces to the remote listing and
//! mutation collaborators. The HTTP layer behind them is out of scope.

pub mod listing;
pub mod mutation;

pub use listing::{TaskListing, TaskListingError, TaskListingResult};
pub use mutation::{StatusGateway, StatusUpdateError, StatusUpdateResult};
