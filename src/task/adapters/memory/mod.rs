//! In-memory adapters for tests and local experimentation.

mod group;
mod state;
mod task;

pub use group::InMemoryGroupRepository;
pub use task::InMemoryTaskRepository;

use state::SharedBoardState;

/// In-memory store holding both tables.
///
/// Repositories handed out by the same board see each other's rows, so task
/// inserts can reject unknown groups and group deletes can reject groups that
/// still have tasks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoard {
    state: SharedBoardState,
}

impl InMemoryBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a task repository backed by this board.
    #[must_use]
    pub fn tasks(&self) -> InMemoryTaskRepository {
        InMemoryTaskRepository::with_state(self.state.clone())
    }

    /// Returns a group repository backed by this board.
    #[must_use]
    pub fn groups(&self) -> InMemoryGroupRepository {
        InMemoryGroupRepository::with_state(self.state.clone())
    }
}
