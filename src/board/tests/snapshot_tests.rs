//! Unit tests for the in-memory task snapshot.

use crate::board::domain::{ProjectId, Task, TaskId, TaskSnapshot, TaskStatus, TaskTitle};
use mockable::DefaultClock;
use rstest::rstest;

fn task(title: &str, status: TaskStatus) -> Task {
    let title = TaskTitle::new(title).expect("valid title");
    Task::new(title, ProjectId::new(), &DefaultClock).with_status(status)
}

#[rstest]
fn empty_snapshot_has_no_tasks() {
    let snapshot = TaskSnapshot::new();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert!(snapshot.get(TaskId::new()).is_none());
}

#[rstest]
fn from_tasks_preserves_listing_order() {
    let first = task("First", TaskStatus::ToDo);
    let second = task("Second", TaskStatus::InProgress);
    let snapshot = TaskSnapshot::from_tasks(vec![first.clone(), second.clone()]);

    assert_eq!(snapshot.tasks(), &[first, second]);
    assert_eq!(snapshot.len(), 2);
}

#[rstest]
fn get_finds_tasks_by_id() {
    let subject = task("Find me", TaskStatus::UnderReview);
    let id = subject.id();
    let snapshot = TaskSnapshot::from_tasks(vec![task("Other", TaskStatus::ToDo), subject]);

    let found = snapshot.get(id).expect("task should be present");
    assert_eq!(found.id(), id);
    assert_eq!(found.status(), TaskStatus::UnderReview);
}

#[rstest]
fn replace_status_is_visible_immediately_and_returns_previous() {
    let subject = task("Move me", TaskStatus::ToDo);
    let id = subject.id();
    let mut snapshot = TaskSnapshot::from_tasks(vec![subject]);

    let previous = snapshot.replace_status(id, TaskStatus::InProgress, &DefaultClock);

    assert_eq!(previous, Some(TaskStatus::ToDo));
    let current = snapshot.get(id).expect("task should be present");
    assert_eq!(current.status(), TaskStatus::InProgress);
}

#[rstest]
fn replace_status_on_unknown_id_is_a_noop() {
    let subject = task("Untouched", TaskStatus::ToDo);
    let mut snapshot = TaskSnapshot::from_tasks(vec![subject.clone()]);

    let previous = snapshot.replace_status(TaskId::new(), TaskStatus::Completed, &DefaultClock);

    assert_eq!(previous, None);
    let current = snapshot.get(subject.id()).expect("task should be present");
    assert_eq!(current.status(), TaskStatus::ToDo);
}

#[rstest]
fn revert_restores_the_previous_status() {
    let subject = task("Roll me back", TaskStatus::UnderReview);
    let id = subject.id();
    let mut snapshot = TaskSnapshot::from_tasks(vec![subject]);

    let previous = snapshot
        .replace_status(id, TaskStatus::Completed, &DefaultClock)
        .expect("task should be present");
    snapshot.revert(id, previous, &DefaultClock);

    let current = snapshot.get(id).expect("task should be present");
    assert_eq!(current.status(), TaskStatus::UnderReview);
}

#[rstest]
fn replace_status_does_not_reorder_tasks() {
    let first = task("First", TaskStatus::ToDo);
    let second = task("Second", TaskStatus::ToDo);
    let third = task("Third", TaskStatus::ToDo);
    let second_id = second.id();
    let mut snapshot = TaskSnapshot::from_tasks(vec![first, second, third]);

    snapshot.replace_status(second_id, TaskStatus::Completed, &DefaultClock);

    let ids: Vec<TaskId> = snapshot.tasks().iter().map(Task::id).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.get(1), Some(&second_id));
}
