//! Domain model for the task board.
//!
//! Models tasks, their status and priority, the board-side actor, the
//! derived column layout, and the pure drag authorization predicate. All
//! infrastructure concerns are kept outside the domain boundary.

mod actor;
mod authorization;
mod column;
mod error;
mod ids;
mod priority;
mod snapshot;
mod status;
mod task;
mod title;

pub use actor::Actor;
pub use authorization::can_drag;
pub use column::{BoardColumn, project_columns};
pub use error::{BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use priority::TaskPriority;
pub use snapshot::TaskSnapshot;
pub use status::TaskStatus;
pub use task::Task;
pub use title::TaskTitle;
