//! Shared test helpers for in-memory repository integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use taskboard::task::{
    adapters::memory::InMemoryBoard,
    domain::{GroupId, GroupName, NewTask, TaskName},
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh board for each test.
#[fixture]
pub fn board() -> InMemoryBoard {
    InMemoryBoard::new()
}

/// Builds an unsaved task.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn new_task(name: &str, group_id: Option<GroupId>) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(TaskName::new(name)?, "", group_id, &DefaultClock))
}

/// Builds a validated group name.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn group_name(name: &str) -> Result<GroupName, eyre::Report> {
    Ok(GroupName::new(name)?)
}
