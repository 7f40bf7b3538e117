//! Repository port for group persistence and lookup.

use crate::task::domain::{Group, GroupId, GroupName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for group repository operations.
pub type GroupRepositoryResult<T> = Result<T, GroupRepositoryError>;

/// Group persistence contract.
///
/// Name uniqueness and the "no tasks left" rule on deletion are enforced by
/// the store; implementations translate the violations into
/// [`GroupRepositoryError::DuplicateName`] and
/// [`GroupRepositoryError::HasTasks`].
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Stores a new group and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::DuplicateName`] when the name is taken.
    async fn add(&self, name: &GroupName) -> GroupRepositoryResult<Group>;

    /// Finds a group by identifier.
    ///
    /// Returns `None` when the group does not exist.
    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>>;

    /// Returns all groups ordered by identifier.
    async fn list(&self) -> GroupRepositoryResult<Vec<Group>>;

    /// Persists the name of an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::NotFound`] when no row was affected or
    /// [`GroupRepositoryError::DuplicateName`] when the new name is taken.
    async fn update(&self, group: &Group) -> GroupRepositoryResult<()>;

    /// Deletes a group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::HasTasks`] when tasks still reference
    /// the group or [`GroupRepositoryError::NotFound`] when no row was
    /// affected.
    async fn delete(&self, id: GroupId) -> GroupRepositoryResult<()>;
}

/// Errors returned by group repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GroupRepositoryError {
    /// The group was not found.
    #[error("group not found: {0}")]
    NotFound(GroupId),

    /// Another group already uses the name.
    #[error("duplicate group name: {0}")]
    DuplicateName(GroupName),

    /// Tasks still reference the group.
    #[error("group {0} still has tasks")]
    HasTasks(GroupId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GroupRepositoryError {
    /// Wraps a data-quality or parsing error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
