//! Drag authorization gate.

use super::{Actor, Task};

/// Decides whether the actor may move the task between columns.
///
/// Returns true iff at least one of:
/// - the task is in the actor's personal "my tasks" set,
/// - the task has an assigned team and the actor belongs to it,
/// - the actor is an organization admin.
///
/// An unresolved actor (`None`: identity still loading, or resolution
/// failed) is denied unconditionally. This predicate is the single
/// authorization chokepoint: both the drag-start affordance query and the
/// drop handler consult it, so a drop whose initiation check was bypassed is
/// still rejected here.
#[must_use]
pub fn can_drag(actor: Option<&Actor>, task: &Task) -> bool {
    actor.is_some_and(|actor| {
        actor.is_admin()
            || actor.is_assigned(task.id())
            || task.team().is_some_and(|team| actor.is_member_of(team))
    })
}
