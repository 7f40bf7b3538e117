//! Task aggregate and the values used to create and edit it.

use super::{GroupId, GroupName, TaskDomainError, TaskId, TaskName, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A task that has not been persisted yet.
///
/// The store assigns the identifier when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: TaskName,
    description: String,
    created: DateTime<Utc>,
    status: TaskStatus,
    group_id: Option<GroupId>,
}

impl NewTask {
    /// Creates a new task in [`TaskStatus::New`] stamped with the current
    /// clock time.
    #[must_use]
    pub fn new(
        name: TaskName,
        description: impl Into<String>,
        group_id: Option<GroupId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            created: clock.utc(),
            status: TaskStatus::New,
            group_id,
        }
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the referenced group, if any.
    #[must_use]
    pub const fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    /// Attaches the store-assigned identifier, producing a persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            created: self.created,
            status: self.status,
            group_id: self.group_id,
            group_name: None,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: String,
    created: DateTime<Utc>,
    status: TaskStatus,
    group_id: Option<GroupId>,
    group_name: Option<GroupName>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created: DateTime<Utc>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted group reference, if any.
    pub group_id: Option<GroupId>,
    /// Joined group name, populated only by listing queries.
    pub group_name: Option<GroupName>,
}

/// Requested changes for an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    /// New name.
    pub name: TaskName,
    /// New description.
    pub description: String,
    /// Target status.
    pub status: TaskStatus,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created: data.created,
            status: data.status,
            group_id: data.group_id,
            group_name: data.group_name,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the referenced group, if any.
    #[must_use]
    pub const fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    /// Returns the joined group name, if the task was loaded by a listing.
    #[must_use]
    pub const fn group_name(&self) -> Option<&GroupName> {
        self.group_name.as_ref()
    }

    /// Applies an edit, enforcing the status state machine.
    ///
    /// The task is left untouched when the edit is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TerminalStateEdit`] when the task is done,
    /// or [`TaskDomainError::InvalidTransition`] when the requested status is
    /// not reachable from the current one.
    pub fn apply_edit(&mut self, edit: TaskEdit) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Err(TaskDomainError::TerminalStateEdit(self.id));
        }
        if !self.status.can_transition_to(edit.status) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: edit.status,
            });
        }

        self.name = edit.name;
        self.description = edit.description;
        self.status = edit.status;
        Ok(())
    }

    /// Checks that the task may be deleted in its current status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InProgressDeletionForbidden`] when the task
    /// is in progress.
    pub const fn ensure_deletable(&self) -> Result<(), TaskDomainError> {
        if self.status.is_deletable() {
            Ok(())
        } else {
            Err(TaskDomainError::InProgressDeletionForbidden(self.id))
        }
    }
}
