//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A task or group name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// An identifier is not a positive integer.
    #[error("invalid identifier {0}, expected a positive integer")]
    InvalidId(i64),

    /// The requested status change is not permitted by the state machine.
    #[error("task {task_id} cannot move from {from} to {to}: start working first")]
    InvalidTransition {
        /// Task being edited.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The task is done and can no longer be edited.
    #[error("task {0} is done and cannot be edited")]
    TerminalStateEdit(TaskId),

    /// The task is in progress and cannot be deleted.
    #[error("task {0} is in progress and cannot be deleted")]
    InProgressDeletionForbidden(TaskId),
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
