//! Diesel row models for task and group persistence.

use super::schema::{groups, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Task status.
    pub status: String,
    /// Optional group reference.
    pub group_id: Option<i64>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Task status.
    pub status: String,
    /// Optional group reference.
    pub group_id: Option<i64>,
}

/// Changeset applied when a task is edited.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Task status.
    pub status: String,
    /// Optional group reference.
    pub group_id: Option<i64>,
}

/// Query result row for group records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GroupRow {
    /// Group identifier.
    pub id: i64,
    /// Group name.
    pub name: String,
}

/// Insert model for group records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = groups)]
pub struct NewGroupRow {
    /// Group name.
    pub name: String,
}
