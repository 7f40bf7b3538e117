//! Mapping of service errors onto HTTP responses.

use crate::task::services::{ErrorKind, TaskBoardError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Error returned by handlers; renders as `{"error": "..."}`.
///
/// Storage failures render a fixed message so store details never reach the
/// client.
#[derive(Debug)]
pub struct ApiError(TaskBoardError);

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        Self(err)
    }
}

/// Returns the response status for an error kind.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::EmptyName | ErrorKind::InvalidId | ErrorKind::InvalidStatus => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::TaskNotFound | ErrorKind::GroupNotFound => StatusCode::NOT_FOUND,
        ErrorKind::DuplicateName
        | ErrorKind::GroupHasTasks
        | ErrorKind::InvalidTransition
        | ErrorKind::TerminalStateEdit
        | ErrorKind::InProgressDeletionForbidden => StatusCode::CONFLICT,
        ErrorKind::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let message = if kind == ErrorKind::StorageFailure {
            "internal storage error".to_owned()
        } else {
            self.0.to_string()
        };
        (status_for(kind), Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
