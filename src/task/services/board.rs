//! Board service construction and task operations.

use super::error::TaskBoardResult;
use crate::task::{
    domain::{GroupId, NewTask, Task, TaskEdit, TaskId, TaskName, TaskStatus},
    ports::{GroupRepository, GroupRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    description: String,
    group_id: Option<i64>,
}

impl CreateTaskRequest {
    /// Creates a request for an ungrouped task.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            group_id: None,
        }
    }

    /// Places the task in a group.
    #[must_use]
    pub const fn with_group(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }
}

/// Request payload for editing a task.
///
/// The status arrives as text and is parsed by the service so unknown values
/// surface as [`super::ErrorKind::InvalidStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: i64,
    name: String,
    description: String,
    status: String,
}

impl UpdateTaskRequest {
    /// Creates an edit request.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status: status.into(),
        }
    }
}

/// Task and group orchestration service.
///
/// Holds shared handles only, so clones are cheap and every clone talks to
/// the same store.
pub struct TaskBoardService<T, G, C>
where
    T: TaskRepository + ?Sized,
    G: GroupRepository + ?Sized,
    C: Clock + Send + Sync,
{
    pub(super) tasks: Arc<T>,
    pub(super) groups: Arc<G>,
    clock: Arc<C>,
}

impl<T, G, C> Clone for TaskBoardService<T, G, C>
where
    T: TaskRepository + ?Sized,
    G: GroupRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            groups: Arc::clone(&self.groups),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, G, C> TaskBoardService<T, G, C>
where
    T: TaskRepository + ?Sized,
    G: GroupRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, groups: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            groups,
            clock,
        }
    }

    /// Creates a task in [`TaskStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the name is blank, the group
    /// identifier is invalid or unknown, or the store rejects the insert.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let name = TaskName::new(request.name)?;
        let group_id = request.group_id.map(GroupId::new).transpose()?;
        if let Some(id) = group_id {
            self.require_group(id).await?;
        }

        let new_task = NewTask::new(name, request.description, group_id, &*self.clock);
        Ok(self.tasks.add(&new_task).await?)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the identifier is invalid or
    /// the task does not exist.
    pub async fn get_task(&self, id: i64) -> TaskBoardResult<Task> {
        let task_id = TaskId::new(id)?;
        self.find_task_or_error(task_id).await
    }

    /// Lists tasks ordered by identifier, optionally restricted to a group.
    ///
    /// An unknown group is reported before the task listing is queried.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the group identifier is
    /// invalid or unknown, or the store fails.
    pub async fn list_tasks(&self, group: Option<i64>) -> TaskBoardResult<Vec<Task>> {
        let group_id = group.map(GroupId::new).transpose()?;
        if let Some(id) = group_id {
            self.require_group(id).await?;
        }
        Ok(self.tasks.list(group_id).await?)
    }

    /// Edits a task's name, description, and status.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the request is malformed, the
    /// task does not exist, the name is blank, or the state machine rejects
    /// the edit.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskBoardResult<Task> {
        let task_id = TaskId::new(request.id)?;
        let status = TaskStatus::try_from(request.status.as_str())?;

        let mut task = self.find_task_or_error(task_id).await?;
        let name = TaskName::new(request.name)?;
        task.apply_edit(TaskEdit {
            name,
            description: request.description,
            status,
        })?;

        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task that is not in progress.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the identifier is invalid, the
    /// task does not exist, or it is in progress.
    pub async fn delete_task(&self, id: i64) -> TaskBoardResult<()> {
        let task_id = TaskId::new(id)?;
        let task = self.find_task_or_error(task_id).await?;
        task.ensure_deletable()?;
        Ok(self.tasks.delete(task_id).await?)
    }

    async fn find_task_or_error(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    async fn require_group(&self, id: GroupId) -> TaskBoardResult<()> {
        self.groups
            .find_by_id(id)
            .await?
            .map(drop)
            .ok_or_else(|| GroupRepositoryError::NotFound(id).into())
    }
}
