//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    pool::BoardPgPool,
    schema::{groups, tasks},
};
use crate::task::{
    domain::{
        GroupId, GroupName, NewTask, PersistedTaskData, Task, TaskId, TaskName, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Foreign key from `tasks.group_id` to `groups.id`.
pub(super) const TASK_GROUP_FOREIGN_KEY: &str = "tasks_group_id_fkey";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn add(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let group_id = task.group_id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_write_error(err, group_id))?;
            row_to_task(row, None)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(|found| row_to_task(found, None)).transpose()
        })
        .await
    }

    async fn list(&self, group_id: Option<GroupId>) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .left_join(groups::table)
                .select((TaskRow::as_select(), groups::name.nullable()))
                .order(tasks::id.asc())
                .into_boxed();
            if let Some(wanted) = group_id {
                query = query.filter(tasks::group_id.eq(wanted.value()));
            }

            let rows = query
                .load::<(TaskRow, Option<String>)>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter()
                .map(|(row, group_name)| row_to_task(row, group_name))
                .collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let group_id = task.group_id();
        let changeset = TaskChangeset {
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status().as_str().to_owned(),
            group_id: group_id.map(GroupId::value),
        };

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| map_write_error(err, group_id))?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        name: task.name().as_str().to_owned(),
        description: task.description().to_owned(),
        created: task.created(),
        status: task.status().as_str().to_owned(),
        group_id: task.group_id().map(GroupId::value),
    }
}

fn row_to_task(row: TaskRow, group_name: Option<String>) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        created,
        status,
        group_id,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::invalid_persisted_data)?,
        name: TaskName::new(name).map_err(TaskRepositoryError::invalid_persisted_data)?,
        description,
        created,
        status: TaskStatus::try_from(status.as_str())
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        group_id: group_id
            .map(GroupId::new)
            .transpose()
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        group_name: group_name
            .map(GroupName::new)
            .transpose()
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
    };
    Ok(Task::from_persisted(data))
}

/// Translates insert/update failures, mapping a violated group foreign key
/// to [`TaskRepositoryError::GroupNotFound`].
pub(super) fn map_write_error(err: DieselError, group_id: Option<GroupId>) -> TaskRepositoryError {
    match (&err, group_id) {
        (DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info), Some(id))
            if is_group_foreign_key(info.as_ref()) =>
        {
            TaskRepositoryError::GroupNotFound(id)
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

pub(super) fn is_group_foreign_key(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == TASK_GROUP_FOREIGN_KEY)
}
