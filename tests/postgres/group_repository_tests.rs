//! `PostgreSQL` integration tests for the group repository.

use super::helpers::{
    BoxError, PostgresBoard, group_name, new_task, postgres_board, runtime,
};
use eyre::{ensure, eyre};
use rstest::rstest;
use std::io;
use taskboard::task::{
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError, TaskRepository},
};
use tokio::runtime::Runtime;

#[rstest]
fn add_returns_identifiers_and_lists_in_order(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;

    let inbox = rt.block_on(board.groups.add(&group_name("Inbox")?))?;
    let backlog = rt.block_on(board.groups.add(&group_name("Backlog")?))?;
    let listed = rt.block_on(board.groups.list())?;

    ensure!(inbox.id().value() > 0);
    ensure!(listed == vec![inbox.clone(), backlog]);
    ensure!(rt.block_on(board.groups.find_by_id(inbox.id()))? == Some(inbox));
    Ok(())
}

#[rstest]
fn duplicate_names_are_rejected_on_add_and_rename(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let ops = rt.block_on(board.groups.add(&group_name("Ops")?))?;
    let dev = rt.block_on(board.groups.add(&group_name("Dev")?))?;

    let added = rt.block_on(board.groups.add(&group_name(" Ops ")?));
    let renamed = rt.block_on(board.groups.update(&Group::new(dev.id(), group_name("Ops")?)));
    rt.block_on(board.groups.update(&Group::new(ops.id(), group_name("Ops")?)))?;

    ensure!(
        matches!(added, Err(GroupRepositoryError::DuplicateName(ref name)) if name.as_str() == "Ops"),
        "expected DuplicateName on add, got {added:?}"
    );
    ensure!(
        matches!(renamed, Err(GroupRepositoryError::DuplicateName(_))),
        "expected DuplicateName on rename, got {renamed:?}"
    );
    ensure!(rt.block_on(board.groups.find_by_id(dev.id()))? == Some(dev));
    Ok(())
}

#[rstest]
fn missing_groups_are_reported_as_not_found(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let missing = GroupId::new(40)?;

    let update = rt.block_on(board.groups.update(&Group::new(missing, group_name("Ghost")?)));
    let delete = rt.block_on(board.groups.delete(missing));

    ensure!(matches!(update, Err(GroupRepositoryError::NotFound(id)) if id == missing));
    ensure!(matches!(delete, Err(GroupRepositoryError::NotFound(id)) if id == missing));
    ensure!(rt.block_on(board.groups.find_by_id(missing))?.is_none());
    Ok(())
}

#[rstest]
fn delete_refuses_referenced_groups_until_tasks_are_gone(
    runtime: io::Result<Runtime>,
    postgres_board: Result<PostgresBoard, BoxError>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let board = postgres_board.map_err(|err| eyre!(err))?;
    let group = rt.block_on(board.groups.add(&group_name("Ops")?))?;
    let task = rt.block_on(board.tasks.add(&new_task("Patch hosts", Some(group.id()))?))?;

    let refused = rt.block_on(board.groups.delete(group.id()));
    ensure!(
        matches!(refused, Err(GroupRepositoryError::HasTasks(id)) if id == group.id()),
        "expected HasTasks, got {refused:?}"
    );
    ensure!(rt.block_on(board.groups.find_by_id(group.id()))?.is_some());

    rt.block_on(board.tasks.delete(task.id()))?;
    rt.block_on(board.groups.delete(group.id()))?;
    ensure!(rt.block_on(board.groups.find_by_id(group.id()))?.is_none());
    Ok(())
}
