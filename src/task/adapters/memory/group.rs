//! In-memory group repository for tests.

use async_trait::async_trait;

use super::state::{SharedBoardState, read, write};
use crate::task::{
    domain::{Group, GroupId, GroupName},
    ports::{GroupRepository, GroupRepositoryError, GroupRepositoryResult},
};

/// Thread-safe in-memory group repository.
#[derive(Debug, Clone)]
pub struct InMemoryGroupRepository {
    state: SharedBoardState,
}

impl InMemoryGroupRepository {
    pub(super) const fn with_state(state: SharedBoardState) -> Self {
        Self { state }
    }
}

fn to_group(id: i64, name: &GroupName) -> GroupRepositoryResult<Group> {
    let group_id = GroupId::new(id).map_err(GroupRepositoryError::invalid_persisted_data)?;
    Ok(Group::new(group_id, name.clone()))
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn add(&self, name: &GroupName) -> GroupRepositoryResult<Group> {
        let mut state = write(&self.state).map_err(GroupRepositoryError::persistence)?;
        if state.name_taken_by_other(name, None) {
            return Err(GroupRepositoryError::DuplicateName(name.clone()));
        }

        let next_id = state.last_group_id + 1;
        let group = to_group(next_id, name)?;
        state.last_group_id = next_id;
        state.groups.insert(next_id, name.clone());
        Ok(group)
    }

    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>> {
        let state = read(&self.state).map_err(GroupRepositoryError::persistence)?;
        Ok(state
            .groups
            .get(&id.value())
            .map(|name| Group::new(id, name.clone())))
    }

    async fn list(&self) -> GroupRepositoryResult<Vec<Group>> {
        let state = read(&self.state).map_err(GroupRepositoryError::persistence)?;
        state
            .groups
            .iter()
            .map(|(id, name)| to_group(*id, name))
            .collect()
    }

    async fn update(&self, group: &Group) -> GroupRepositoryResult<()> {
        let mut state = write(&self.state).map_err(GroupRepositoryError::persistence)?;
        if !state.group_exists(group.id()) {
            return Err(GroupRepositoryError::NotFound(group.id()));
        }
        if state.name_taken_by_other(group.name(), Some(group.id())) {
            return Err(GroupRepositoryError::DuplicateName(group.name().clone()));
        }

        state
            .groups
            .insert(group.id().value(), group.name().clone());
        Ok(())
    }

    async fn delete(&self, id: GroupId) -> GroupRepositoryResult<()> {
        let mut state = write(&self.state).map_err(GroupRepositoryError::persistence)?;
        if state.group_in_use(id) {
            return Err(GroupRepositoryError::HasTasks(id));
        }
        state
            .groups
            .remove(&id.value())
            .map(|_| ())
            .ok_or(GroupRepositoryError::NotFound(id))
    }
}
