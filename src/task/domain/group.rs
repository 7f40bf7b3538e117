//! Group entity.

use super::{GroupId, GroupName};

/// Named collection that tasks may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: GroupName,
}

impl Group {
    /// Creates a group value from its identifier and name.
    #[must_use]
    pub const fn new(id: GroupId, name: GroupName) -> Self {
        Self { id, name }
    }

    /// Returns the group identifier.
    #[must_use]
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the group name.
    #[must_use]
    pub const fn name(&self) -> &GroupName {
        &self.name
    }
}
