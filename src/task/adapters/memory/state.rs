//! Shared state behind the in-memory task and group repositories.
//!
//! Both repositories hold a handle to the same state so the foreign-key and
//! uniqueness rules of the relational schema can be emulated.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::domain::{GroupId, GroupName, PersistedTaskData, Task};

#[derive(Debug, Default)]
pub(super) struct BoardState {
    pub(super) tasks: BTreeMap<i64, Task>,
    pub(super) groups: BTreeMap<i64, GroupName>,
    pub(super) last_task_id: i64,
    pub(super) last_group_id: i64,
}

impl BoardState {
    pub(super) fn group_exists(&self, id: GroupId) -> bool {
        self.groups.contains_key(&id.value())
    }

    pub(super) fn group_in_use(&self, id: GroupId) -> bool {
        self.tasks.values().any(|task| task.group_id() == Some(id))
    }

    pub(super) fn name_taken_by_other(&self, name: &GroupName, id: Option<GroupId>) -> bool {
        self.groups.iter().any(|(existing_id, existing_name)| {
            existing_name == name && id.is_none_or(|own| own.value() != *existing_id)
        })
    }

    /// Returns a copy of the task with the group name joined in, mirroring
    /// the left join of the relational adapter.
    pub(super) fn joined(&self, task: &Task) -> Task {
        let group_name = task
            .group_id()
            .and_then(|id| self.groups.get(&id.value()))
            .cloned();
        with_group_name(task, group_name)
    }
}

/// Rebuilds a task with the given joined group name.
pub(super) fn with_group_name(task: &Task, group_name: Option<GroupName>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task.id(),
        name: task.name().clone(),
        description: task.description().to_owned(),
        created: task.created(),
        status: task.status(),
        group_id: task.group_id(),
        group_name,
    })
}

pub(super) type SharedBoardState = Arc<RwLock<BoardState>>;

pub(super) fn read(
    state: &SharedBoardState,
) -> Result<RwLockReadGuard<'_, BoardState>, std::io::Error> {
    state
        .read()
        .map_err(|err| std::io::Error::other(err.to_string()))
}

pub(super) fn write(
    state: &SharedBoardState,
) -> Result<RwLockWriteGuard<'_, BoardState>, std::io::Error> {
    state
        .write()
        .map_err(|err| std::io::Error::other(err.to_string()))
}
