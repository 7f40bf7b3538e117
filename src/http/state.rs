//! Shared handler state.

use crate::task::{
    ports::{GroupRepository, TaskRepository},
    services::TaskBoardService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Board service with type-erased repositories, as held by the router.
pub type BoardService = TaskBoardService<dyn TaskRepository, dyn GroupRepository, DefaultClock>;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    service: BoardService,
}

impl AppState {
    /// Wraps repositories and the system clock into handler state.
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskRepository>, groups: Arc<dyn GroupRepository>) -> Self {
        Self {
            service: TaskBoardService::new(tasks, groups, Arc::new(DefaultClock)),
        }
    }

    /// Returns the board service.
    #[must_use]
    pub const fn service(&self) -> &BoardService {
        &self.service
    }
}
