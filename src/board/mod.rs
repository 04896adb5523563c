//! Task board core: snapshot store, drag authorization, and status sync.
//!
//! This module implements the four-column Kanban board for a single project:
//! loading the task snapshot and actor context at mount, projecting tasks
//! into render-ready columns, gating drag gestures on authorization, and
//! applying optimistic status transitions that are confirmed by the remote
//! mutation service and rolled back on failure. The same transition protocol
//! backs the tasks-list selector view. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
