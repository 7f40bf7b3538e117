//! JSON API over the board service.
//!
//! Handlers translate request bodies into service calls and map
//! [`crate::task::services::ErrorKind`] onto status codes; see
//! [`status_for`].

mod error;
mod groups;
mod health;
mod state;
mod tasks;

pub use error::{ApiError, ApiResult, status_for};
pub use groups::GroupResponse;
pub use state::{AppState, BoardService};
pub use tasks::TaskResponse;

use axum::Router;

/// Builds the application router with every endpoint mounted.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tasks::router())
        .merge(groups::router())
        .with_state(state)
}
