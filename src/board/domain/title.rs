//! Validated task title.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_TITLE_LENGTH: usize = 200;

/// Non-empty, length-bounded task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the trimmed input is
    /// empty, or [`BoardDomainError::TaskTitleTooLong`] when it exceeds the
    /// 200-character limit.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(BoardDomainError::TaskTitleTooLong(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
