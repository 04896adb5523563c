//! Behavioural integration tests for the board flow.
//!
//! These tests exercise the full mount → project → drag → reconcile flow
//! through the public API and the in-memory adapters, covering the team
//! member, non-member, admin, and mutation-failure scenarios.

use std::sync::Arc;

use boardwalk::board::{
    adapters::memory::{InMemoryTaskListing, RecordingStatusGateway},
    domain::{ProjectId, Task, TaskId, TaskStatus, TaskTitle},
    services::{BoardSession, DropPayload, TransitionOutcome},
};
use boardwalk::identity::{
    adapters::memory::StaticIdentityProvider,
    domain::{Identity, OrgRole, TeamId, UserId},
};
use eyre::{OptionExt, Result};
use mockable::DefaultClock;

type FlowSession =
    BoardSession<InMemoryTaskListing, RecordingStatusGateway, StaticIdentityProvider, DefaultClock>;

struct Board {
    gateway: Arc<RecordingStatusGateway>,
    session: FlowSession,
    team_task: TaskId,
    foreign_task: TaskId,
    review_task: TaskId,
}

fn titled(title: &str, project: ProjectId, status: TaskStatus) -> Result<Task> {
    let title = TaskTitle::new(title)?;
    Ok(Task::new(title, project, &DefaultClock).with_status(status))
}

/// Builds a three-task project board for the given identity.
///
/// `team_task` belongs to the actor's team, `foreign_task` to another team,
/// and `review_task` sits in `under_review` assigned to the actor's team.
fn board_for(identity: Identity, team: TeamId) -> Result<Board> {
    let project = ProjectId::new();
    let team_task = titled("Implement the filter bar", project, TaskStatus::ToDo)?.with_team(team);
    let foreign_task =
        titled("Rotate the signing keys", project, TaskStatus::ToDo)?.with_team(TeamId::new());
    let review_task =
        titled("Review the billing export", project, TaskStatus::UnderReview)?.with_team(team);

    let listing = Arc::new(InMemoryTaskListing::new());
    listing.set_project_tasks(
        project,
        vec![team_task.clone(), foreign_task.clone(), review_task.clone()],
    )?;
    listing.set_actor_tasks(Vec::new())?;
    let gateway = Arc::new(RecordingStatusGateway::new());
    let session = BoardSession::new(
        project,
        listing,
        Arc::clone(&gateway),
        Arc::new(StaticIdentityProvider::authenticated(identity)),
        Arc::new(DefaultClock),
    );

    Ok(Board {
        gateway,
        session,
        team_task: team_task.id(),
        foreign_task: foreign_task.id(),
        review_task: review_task.id(),
    })
}

fn member_identity(team: TeamId) -> Identity {
    Identity::new(UserId::new(), OrgRole::Member).with_teams([team])
}

fn column_of(session: &FlowSession, id: TaskId) -> Result<TaskStatus> {
    session
        .columns()
        .iter()
        .find(|column| column.tasks().iter().any(|task| task.id() == id))
        .map(boardwalk::board::domain::BoardColumn::status)
        .ok_or_eyre("task should be in exactly one column")
}

#[tokio::test(flavor = "multi_thread")]
async fn member_drags_own_team_task_across_the_board() -> Result<()> {
    let team = TeamId::new();
    let mut board = board_for(member_identity(team), team)?;
    board.session.mount().await?;

    assert!(board.session.can_drag(board.team_task));
    let outcome = board
        .session
        .drop_on_column(DropPayload::new(board.team_task), TaskStatus::InProgress)
        .await?;

    assert_eq!(outcome, TransitionOutcome::Applied);
    assert_eq!(
        column_of(&board.session, board.team_task)?,
        TaskStatus::InProgress
    );
    assert!(board.session.notice().is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn member_cannot_drag_a_foreign_team_task() -> Result<()> {
    let team = TeamId::new();
    let mut board = board_for(member_identity(team), team)?;
    board.session.mount().await?;

    assert!(!board.session.can_drag(board.foreign_task));
    let outcome = board
        .session
        .drop_on_column(DropPayload::new(board.foreign_task), TaskStatus::Completed)
        .await?;

    assert_eq!(outcome, TransitionOutcome::Ignored);
    assert_eq!(
        column_of(&board.session, board.foreign_task)?,
        TaskStatus::ToDo
    );
    assert!(board.gateway.recorded_calls()?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_drags_every_task_regardless_of_assignment() -> Result<()> {
    let team = TeamId::new();
    let admin = Identity::new(UserId::new(), OrgRole::Admin);
    let mut board = board_for(admin, team)?;
    board.session.mount().await?;

    for id in [board.team_task, board.foreign_task, board.review_task] {
        assert!(board.session.can_drag(id));
        let outcome = board
            .session
            .request_status_change(id, TaskStatus::Completed)
            .await?;
        assert_eq!(outcome, TransitionOutcome::Applied);
        assert_eq!(column_of(&board.session, id)?, TaskStatus::Completed);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_mutation_restores_the_review_column() -> Result<()> {
    let team = TeamId::new();
    let project = ProjectId::new();
    let review_task =
        titled("Review the billing export", project, TaskStatus::UnderReview)?.with_team(team);
    let id = review_task.id();

    let listing = Arc::new(InMemoryTaskListing::new());
    listing.set_project_tasks(project, vec![review_task])?;
    listing.set_actor_tasks(Vec::new())?;
    let gateway = Arc::new(RecordingStatusGateway::new());
    gateway.fail_with("status change rejected by a server-side rule")?;
    let mut session = BoardSession::new(
        project,
        listing,
        Arc::clone(&gateway),
        Arc::new(StaticIdentityProvider::authenticated(member_identity(team))),
        Arc::new(DefaultClock),
    );
    session.mount().await?;

    let result = session
        .request_status_change(id, TaskStatus::Completed)
        .await;

    assert!(result.is_err());
    assert_eq!(column_of(&session, id)?, TaskStatus::UnderReview);
    let notice = session.notice().ok_or_eyre("notice should be present")?;
    assert!(notice.contains("rejected by a server-side rule"));

    // The failed attempt did reach the gateway; the rollback was local.
    let calls = gateway.recorded_calls()?;
    assert_eq!(calls, vec![(id, TaskStatus::Completed)]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthenticated_board_renders_but_never_drags() -> Result<()> {
    let team = TeamId::new();
    let project = ProjectId::new();
    let subject = titled("Visible but inert", project, TaskStatus::ToDo)?.with_team(team);
    let id = subject.id();

    let listing = Arc::new(InMemoryTaskListing::new());
    listing.set_project_tasks(project, vec![subject])?;
    listing.set_actor_tasks(Vec::new())?;
    let mut session = BoardSession::new(
        project,
        listing,
        Arc::new(RecordingStatusGateway::new()),
        Arc::new(StaticIdentityProvider::unauthenticated()),
        Arc::new(DefaultClock),
    );

    let result = session.mount().await;

    assert!(result.is_err());
    assert!(!session.can_drag(id));
    let outcome = session
        .drop_on_column(DropPayload::new(id), TaskStatus::Completed)
        .await?;
    assert_eq!(outcome, TransitionOutcome::Ignored);
    Ok(())
}
