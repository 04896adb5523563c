//! Boardwalk: task board core for a project-management client.
//!
//! This crate provides the core of the browser board client: the in-memory
//! task snapshot, the drag authorization gate, the optimistic status
//! transition engine, and the derived column projection. Routing, forms,
//! styling, transport, and persistence live in the host and behind ports.
//!
//! # Architecture
//!
//! Boardwalk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory, APIs, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Current-actor resolution (role and team memberships)
//! - [`board`]: Task snapshot, columns, authorization, and status sync

pub mod board;
pub mod identity;
