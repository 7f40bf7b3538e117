//! In-memory task repository for tests.

use async_trait::async_trait;

use super::state::{SharedBoardState, read, with_group_name, write};
use crate::task::{
    domain::{GroupId, NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Shares its state with an [`InMemoryGroupRepository`](super::InMemoryGroupRepository)
/// when both are obtained from the same [`InMemoryBoard`](super::InMemoryBoard).
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    state: SharedBoardState,
}

impl InMemoryTaskRepository {
    pub(super) const fn with_state(state: SharedBoardState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = write(&self.state).map_err(TaskRepositoryError::persistence)?;
        if let Some(group_id) = task.group_id()
            && !state.group_exists(group_id)
        {
            return Err(TaskRepositoryError::GroupNotFound(group_id));
        }

        let next_id = state.last_task_id + 1;
        let id = TaskId::new(next_id).map_err(TaskRepositoryError::persistence)?;
        let stored = task.clone().into_task(id);
        state.last_task_id = next_id;
        state.tasks.insert(next_id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = read(&self.state).map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks.get(&id.value()).cloned())
    }

    async fn list(&self, group_id: Option<GroupId>) -> TaskRepositoryResult<Vec<Task>> {
        let state = read(&self.state).map_err(TaskRepositoryError::persistence)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| group_id.is_none_or(|wanted| task.group_id() == Some(wanted)))
            .map(|task| state.joined(task))
            .collect())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = write(&self.state).map_err(TaskRepositoryError::persistence)?;
        if !state.tasks.contains_key(&task.id().value()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        if let Some(group_id) = task.group_id()
            && !state.group_exists(group_id)
        {
            return Err(TaskRepositoryError::GroupNotFound(group_id));
        }

        state
            .tasks
            .insert(task.id().value(), with_group_name(task, None));
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = write(&self.state).map_err(TaskRepositoryError::persistence)?;
        state
            .tasks
            .remove(&id.value())
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
