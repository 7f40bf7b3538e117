//! Group operations of the board service.

use super::{TaskBoardService, error::TaskBoardResult};
use crate::task::{
    domain::{Group, GroupId, GroupName},
    ports::{GroupRepository, GroupRepositoryError, TaskRepository},
};
use mockable::Clock;

impl<T, G, C> TaskBoardService<T, G, C>
where
    T: TaskRepository + ?Sized,
    G: GroupRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a group.
    ///
    /// Name uniqueness is enforced by the store.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the name is blank or already
    /// taken.
    pub async fn create_group(&self, name: impl Into<String> + Send) -> TaskBoardResult<Group> {
        let group_name = GroupName::new(name)?;
        Ok(self.groups.add(&group_name).await?)
    }

    /// Retrieves a group.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the identifier is invalid or
    /// the group does not exist.
    pub async fn get_group(&self, id: i64) -> TaskBoardResult<Group> {
        let group_id = GroupId::new(id)?;
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| GroupRepositoryError::NotFound(group_id).into())
    }

    /// Lists all groups ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the store fails.
    pub async fn list_groups(&self) -> TaskBoardResult<Vec<Group>> {
        Ok(self.groups.list().await?)
    }

    /// Renames a group.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the identifier or name is
    /// invalid, the name collides with another group, or the group does not
    /// exist.
    pub async fn update_group(
        &self,
        id: i64,
        name: impl Into<String> + Send,
    ) -> TaskBoardResult<Group> {
        let group_id = GroupId::new(id)?;
        let group_name = GroupName::new(name)?;
        let group = Group::new(group_id, group_name);
        self.groups.update(&group).await?;
        Ok(group)
    }

    /// Deletes a group that no task references.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError`] when the identifier is invalid, the
    /// group still has tasks, or the group does not exist.
    pub async fn delete_group(&self, id: i64) -> TaskBoardResult<()> {
        let group_id = GroupId::new(id)?;
        Ok(self.groups.delete(group_id).await?)
    }
}
