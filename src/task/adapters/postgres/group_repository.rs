//! `PostgreSQL` repository implementation for group storage.

use super::{
    models::{GroupRow, NewGroupRow},
    pool::BoardPgPool,
    repository::is_group_foreign_key,
    schema::groups,
};
use crate::task::{
    domain::{Group, GroupId, GroupName},
    ports::{GroupRepository, GroupRepositoryError, GroupRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Unique constraint on `groups.name`.
const GROUP_NAME_UNIQUE: &str = "groups_name_key";

/// `PostgreSQL`-backed group repository.
#[derive(Debug, Clone)]
pub struct PostgresGroupRepository {
    pool: BoardPgPool,
}

impl PostgresGroupRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> GroupRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GroupRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GroupRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GroupRepositoryError::persistence)?
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn add(&self, name: &GroupName) -> GroupRepositoryResult<Group> {
        let group_name = name.clone();
        let new_row = NewGroupRow {
            name: name.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(groups::table)
                .values(&new_row)
                .returning(GroupRow::as_returning())
                .get_result::<GroupRow>(connection)
                .map_err(|err| map_name_error(err, &group_name))?;
            row_to_group(row)
        })
        .await
    }

    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>> {
        self.run_blocking(move |connection| {
            let row = groups::table
                .find(id.value())
                .select(GroupRow::as_select())
                .first::<GroupRow>(connection)
                .optional()
                .map_err(GroupRepositoryError::persistence)?;
            row.map(row_to_group).transpose()
        })
        .await
    }

    async fn list(&self) -> GroupRepositoryResult<Vec<Group>> {
        self.run_blocking(move |connection| {
            let rows = groups::table
                .select(GroupRow::as_select())
                .order(groups::id.asc())
                .load::<GroupRow>(connection)
                .map_err(GroupRepositoryError::persistence)?;
            rows.into_iter().map(row_to_group).collect()
        })
        .await
    }

    async fn update(&self, group: &Group) -> GroupRepositoryResult<()> {
        let group_id = group.id();
        let group_name = group.name().clone();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(groups::table.find(group_id.value()))
                .set(groups::name.eq(group_name.as_str()))
                .execute(connection)
                .map_err(|err| map_name_error(err, &group_name))?;

            if updated_count == 0 {
                return Err(GroupRepositoryError::NotFound(group_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: GroupId) -> GroupRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(groups::table.find(id.value()))
                .execute(connection)
                .map_err(|err| map_delete_error(err, id))?;

            if deleted_count == 0 {
                return Err(GroupRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_group(row: GroupRow) -> GroupRepositoryResult<Group> {
    let GroupRow { id, name } = row;
    let group_id = GroupId::new(id).map_err(GroupRepositoryError::invalid_persisted_data)?;
    let group_name = GroupName::new(name).map_err(GroupRepositoryError::invalid_persisted_data)?;
    Ok(Group::new(group_id, group_name))
}

/// Translates insert/rename failures, mapping the name uniqueness violation
/// to [`GroupRepositoryError::DuplicateName`].
pub(super) fn map_name_error(err: DieselError, name: &GroupName) -> GroupRepositoryError {
    match &err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if is_name_unique_violation(info.as_ref()) =>
        {
            GroupRepositoryError::DuplicateName(name.clone())
        }
        _ => GroupRepositoryError::persistence(err),
    }
}

/// Translates delete failures, mapping a restricting task foreign key to
/// [`GroupRepositoryError::HasTasks`].
pub(super) fn map_delete_error(err: DieselError, id: GroupId) -> GroupRepositoryError {
    match &err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info)
            if is_group_foreign_key(info.as_ref()) =>
        {
            GroupRepositoryError::HasTasks(id)
        }
        _ => GroupRepositoryError::persistence(err),
    }
}

fn is_name_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == GROUP_NAME_UNIQUE)
}
