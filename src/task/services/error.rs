//! Service-level error type and its flat classification.

use crate::task::{
    domain::{ParseTaskStatusError, TaskDomainError},
    ports::{GroupRepositoryError, TaskRepositoryError},
};
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The requested status is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// Task repository operation failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// Group repository operation failed.
    #[error(transparent)]
    GroupRepository(#[from] GroupRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Flat classification of [`TaskBoardError`] used by transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A name was blank after trimming.
    EmptyName,
    /// An identifier was not a positive integer.
    InvalidId,
    /// A status string was not recognised.
    InvalidStatus,
    /// The task does not exist.
    TaskNotFound,
    /// The group does not exist.
    GroupNotFound,
    /// Another group already uses the name.
    DuplicateName,
    /// The group still has tasks.
    GroupHasTasks,
    /// The status change is not permitted.
    InvalidTransition,
    /// The task is done and cannot be edited.
    TerminalStateEdit,
    /// The task is in progress and cannot be deleted.
    InProgressDeletionForbidden,
    /// The store failed or returned unusable data.
    StorageFailure,
}

impl TaskBoardError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => match err {
                TaskDomainError::EmptyName => ErrorKind::EmptyName,
                TaskDomainError::InvalidId(_) => ErrorKind::InvalidId,
                TaskDomainError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
                TaskDomainError::TerminalStateEdit(_) => ErrorKind::TerminalStateEdit,
                TaskDomainError::InProgressDeletionForbidden(_) => {
                    ErrorKind::InProgressDeletionForbidden
                }
            },
            Self::InvalidStatus(_) => ErrorKind::InvalidStatus,
            Self::TaskRepository(err) => match err {
                TaskRepositoryError::NotFound(_) => ErrorKind::TaskNotFound,
                TaskRepositoryError::GroupNotFound(_) => ErrorKind::GroupNotFound,
                TaskRepositoryError::InvalidPersistedData(_)
                | TaskRepositoryError::Persistence(_) => ErrorKind::StorageFailure,
            },
            Self::GroupRepository(err) => match err {
                GroupRepositoryError::NotFound(_) => ErrorKind::GroupNotFound,
                GroupRepositoryError::DuplicateName(_) => ErrorKind::DuplicateName,
                GroupRepositoryError::HasTasks(_) => ErrorKind::GroupHasTasks,
                GroupRepositoryError::InvalidPersistedData(_)
                | GroupRepositoryError::Persistence(_) => ErrorKind::StorageFailure,
            },
        }
    }
}
