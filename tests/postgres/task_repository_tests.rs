//! `PostgreSQL` integration tests for the task repository.

use super::helpers::{
    BoxError, PostgresBoard, group_name, new_task, postgres_board, runtime,
};
use eyre::{ensure, eyre};
use rstest::rstest;
use std::io;
use taskboard::task::{
    domain::{GroupId, Task, TaskEdit, TaskId, TaskName, TaskStatus},
    ports::{GroupRepository, TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

#[rstest]
fn add_returns_store_assigned_identifiers(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;

    let first = rt.block_on(board.tasks.add(&new_task("First", None)?))?;
    let second = rt.block_on(board.tasks.add(&new_task("Second", None)?))?;
    let found = rt
        .block_on(board.tasks.find_by_id(second.id()))?
        .ok_or_else(|| eyre!("task should exist"))?;

    ensure!(first.id().value() > 0);
    ensure!(second.id() > first.id());
    ensure!(second.status() == TaskStatus::New);
    ensure!(found == second);
    ensure!(rt.block_on(board.tasks.find_by_id(TaskId::new(9_999)?))?.is_none());
    Ok(())
}

#[rstest]
fn list_joins_group_names_and_filters(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let release = rt.block_on(board.groups.add(&group_name("Release")?))?;
    let other = rt.block_on(board.groups.add(&group_name("Other")?))?;

    let tagged = rt.block_on(board.tasks.add(&new_task("Tag build", Some(release.id()))?))?;
    let unfiled = rt.block_on(board.tasks.add(&new_task("Unfiled", None)?))?;

    let all = rt.block_on(board.tasks.list(None))?;
    let filtered = rt.block_on(board.tasks.list(Some(release.id())))?;
    let empty = rt.block_on(board.tasks.list(Some(other.id())))?;

    let [first, second] = all.as_slice() else {
        return Err(eyre!("expected two tasks, got {}", all.len()));
    };
    ensure!(first.id() == tagged.id());
    ensure!(first.group_name() == Some(release.name()));
    ensure!(second.id() == unfiled.id());
    ensure!(second.group_name().is_none());
    ensure!(filtered.len() == 1);
    ensure!(filtered.first().map(Task::id) == Some(tagged.id()));
    ensure!(empty.is_empty());

    let found = rt
        .block_on(board.tasks.find_by_id(tagged.id()))?
        .ok_or_else(|| eyre!("task should exist"))?;
    ensure!(found.group_name().is_none());
    Ok(())
}

#[rstest]
fn add_with_unknown_group_reports_group_not_found(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let missing = GroupId::new(77)?;

    let result = rt.block_on(board.tasks.add(&new_task("Orphan", Some(missing))?));

    ensure!(
        matches!(result, Err(TaskRepositoryError::GroupNotFound(id)) if id == missing),
        "expected GroupNotFound, got {result:?}"
    );
    ensure!(rt.block_on(board.tasks.list(None))?.is_empty());
    Ok(())
}

#[rstest]
fn update_persists_edits_and_reports_missing_rows(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let mut task = rt.block_on(board.tasks.add(&new_task("Draft", None)?))?;
    task.apply_edit(TaskEdit {
        name: TaskName::new("Drafted")?,
        description: "outline ready".to_owned(),
        status: TaskStatus::InProgress,
    })?;

    rt.block_on(board.tasks.update(&task))?;
    let stored = rt
        .block_on(board.tasks.find_by_id(task.id()))?
        .ok_or_else(|| eyre!("task should exist"))?;
    ensure!(stored == task);

    rt.block_on(board.tasks.delete(task.id()))?;
    let update = rt.block_on(board.tasks.update(&task));
    let delete = rt.block_on(board.tasks.delete(task.id()));
    ensure!(matches!(update, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    ensure!(matches!(delete, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    Ok(())
}

#[rstest]
fn long_names_are_stored_whole(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let long_name = "x".repeat(1_000);

    let group = rt.block_on(board.groups.add(&group_name(&long_name)?))?;
    let task = rt.block_on(board.tasks.add(&new_task(&long_name, Some(group.id()))?))?;
    let listed = rt.block_on(board.tasks.list(Some(group.id())))?;

    ensure!(group.name().as_str() == long_name);
    ensure!(task.name().as_str() == long_name);
    ensure!(
        listed
            .first()
            .and_then(Task::group_name)
            .is_some_and(|name| name.as_str() == long_name)
    );
    Ok(())
}
