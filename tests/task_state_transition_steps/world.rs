//! Shared world state for task status transition scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryBoard, InMemoryGroupRepository, InMemoryTaskRepository},
    domain::Task,
    services::{TaskBoardError, TaskBoardService},
};

/// Service type used by the scenario world.
pub type TestBoardService =
    TaskBoardService<InMemoryTaskRepository, InMemoryGroupRepository, DefaultClock>;

/// Scenario world for task transition behaviour tests.
pub struct TaskTransitionWorld {
    pub service: TestBoardService,
    pub current_task: Option<Task>,
    pub last_update_result: Option<Result<Task, TaskBoardError>>,
    pub last_delete_result: Option<Result<(), TaskBoardError>>,
}

impl TaskTransitionWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let board = InMemoryBoard::new();
        let service = TaskBoardService::new(
            Arc::new(board.tasks()),
            Arc::new(board.groups()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            current_task: None,
            last_update_result: None,
            last_delete_result: None,
        }
    }

    /// Returns the identifier of the task under test.
    pub fn task_id(&self) -> Result<i64, eyre::Report> {
        self.current_task
            .as_ref()
            .map(|task| task.id().value())
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTransitionWorld {
    TaskTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
