//! Orchestration services for the task board.

pub mod session;

pub use session::{
    BoardLoadError, BoardLoadResult, BoardSession, DropPayload, TransitionError, TransitionOutcome,
    TransitionResult,
};
