//! Task status and the fixed board column order.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// The four statuses form a complete transition graph: any status may move
/// to any other. The board enforces authorization, not ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    ToDo,
    /// Work is underway.
    InProgress,
    /// Work is awaiting review.
    UnderReview,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Fixed left-to-right column order of the board.
    pub const BOARD_ORDER: [Self; 4] = [
        Self::ToDo,
        Self::InProgress,
        Self::UnderReview,
        Self::Completed,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::UnderReview => "under_review",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "under_review" => Ok(Self::UnderReview),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
