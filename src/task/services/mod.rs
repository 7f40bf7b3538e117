//! Application services for task and group orchestration.

mod board;
mod error;
mod groups;

pub use board::{CreateTaskRequest, TaskBoardService, UpdateTaskRequest};
pub use error::{ErrorKind, TaskBoardError, TaskBoardResult};
