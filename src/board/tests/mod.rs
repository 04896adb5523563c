//! Unit tests for the task board.

mod projection_tests;
mod snapshot_tests;
