//! In-memory integration tests for the group repository contract.

use super::helpers::{board, group_name, new_task, runtime};
use eyre::ensure;
use rstest::rstest;
use std::io;
use taskboard::task::{
    adapters::memory::InMemoryBoard,
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError, TaskRepository},
};
use tokio::runtime::Runtime;

#[rstest]
fn add_rejects_duplicate_names(
    runtime: io::Result<Runtime>,
    board: InMemoryBoard,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let groups = board.groups();
    rt.block_on(groups.add(&group_name("Ops")?))?;

    let result = rt.block_on(groups.add(&group_name(" Ops ")?));

    ensure!(matches!(result, Err(GroupRepositoryError::DuplicateName(ref name)) if name.as_str() == "Ops"));
    ensure!(rt.block_on(groups.list())?.len() == 1);
    Ok(())
}

#[rstest]
fn update_checks_existence_before_uniqueness(
    runtime: io::Result<Runtime>,
    board: InMemoryBoard,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let groups = board.groups();
    rt.block_on(groups.add(&group_name("Ops")?))?;
    let ghost = Group::new(GroupId::new(40)?, group_name("Ops")?);

    let result = rt.block_on(groups.update(&ghost));

    ensure!(matches!(result, Err(GroupRepositoryError::NotFound(_))));
    Ok(())
}

#[rstest]
fn delete_refuses_referenced_groups_until_tasks_are_gone(
    runtime: io::Result<Runtime>,
    board: InMemoryBoard,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let groups = board.groups();
    let tasks = board.tasks();
    let group = rt.block_on(groups.add(&group_name("Ops")?))?;
    let task = rt.block_on(tasks.add(&new_task("Patch hosts", Some(group.id()))?))?;

    let refused = rt.block_on(groups.delete(group.id()));
    ensure!(matches!(refused, Err(GroupRepositoryError::HasTasks(id)) if id == group.id()));

    rt.block_on(tasks.delete(task.id()))?;
    rt.block_on(groups.delete(group.id()))?;
    ensure!(rt.block_on(groups.find_by_id(group.id()))?.is_none());

    let again = rt.block_on(groups.delete(group.id()));
    ensure!(matches!(again, Err(GroupRepositoryError::NotFound(_))));
    Ok(())
}
