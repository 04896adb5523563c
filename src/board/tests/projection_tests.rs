//! Unit tests for the column projection.

use crate::board::domain::{BoardColumn, ProjectId, Task, TaskStatus, TaskTitle, project_columns};
use mockable::DefaultClock;
use rstest::rstest;

fn task(title: &str, status: TaskStatus) -> Task {
    let title = TaskTitle::new(title).expect("valid title");
    Task::new(title, ProjectId::new(), &DefaultClock).with_status(status)
}

#[rstest]
fn empty_task_set_yields_four_empty_columns() {
    let columns = project_columns(&[]);

    assert_eq!(columns.len(), 4);
    for (column, expected) in columns.iter().zip(TaskStatus::BOARD_ORDER) {
        assert_eq!(column.status(), expected);
        assert_eq!(column.count(), 0);
        assert!(column.tasks().is_empty());
    }
}

#[rstest]
fn columns_appear_in_fixed_board_order() {
    let tasks = vec![
        task("Close out the audit", TaskStatus::Completed),
        task("Draft the launch email", TaskStatus::ToDo),
    ];

    let statuses: Vec<TaskStatus> = project_columns(&tasks)
        .iter()
        .map(|column| column.status())
        .collect();

    assert_eq!(statuses, TaskStatus::BOARD_ORDER.to_vec());
}

#[rstest]
fn projection_is_a_stable_partition() {
    let first = task("First in progress", TaskStatus::InProgress);
    let second = task("Then to do", TaskStatus::ToDo);
    let third = task("Also in progress", TaskStatus::InProgress);
    let tasks = vec![first.clone(), second.clone(), third.clone()];

    let columns = project_columns(&tasks);

    let in_progress = columns
        .iter()
        .find(|column| column.status() == TaskStatus::InProgress)
        .expect("in_progress column exists");
    assert_eq!(in_progress.tasks(), &[first, third]);

    let to_do = columns
        .iter()
        .find(|column| column.status() == TaskStatus::ToDo)
        .expect("to_do column exists");
    assert_eq!(to_do.tasks(), &[second]);
}

#[rstest]
fn counts_match_grouped_tasks() {
    let tasks = vec![
        task("One", TaskStatus::ToDo),
        task("Two", TaskStatus::ToDo),
        task("Three", TaskStatus::UnderReview),
    ];

    let columns = project_columns(&tasks);
    let counts: Vec<usize> = columns.iter().map(BoardColumn::count).collect();

    assert_eq!(counts, vec![2, 0, 1, 0]);
}

#[rstest]
fn projection_is_idempotent_on_an_unchanged_task_set() {
    let tasks = vec![
        task("Stale review", TaskStatus::UnderReview),
        task("Fresh work", TaskStatus::InProgress),
    ];

    assert_eq!(project_columns(&tasks), project_columns(&tasks));
}

#[rstest]
fn every_task_lands_in_exactly_one_column() {
    let tasks = vec![
        task("A", TaskStatus::ToDo),
        task("B", TaskStatus::InProgress),
        task("C", TaskStatus::UnderReview),
        task("D", TaskStatus::Completed),
    ];

    let columns = project_columns(&tasks);
    for subject in &tasks {
        let containing = columns
            .iter()
            .filter(|column| column.tasks().iter().any(|t| t.id() == subject.id()))
            .count();
        assert_eq!(containing, 1, "task {} should be in one column", subject.id());
    }
}
