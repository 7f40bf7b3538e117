//! Task endpoints.

use super::{ApiResult, AppState};
use crate::task::{
    domain::{GroupId, Task, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task representation on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Creation time in RFC 3339.
    pub created: DateTime<Utc>,
    /// Current status.
    pub status: TaskStatus,
    /// Owning group, if any.
    pub group_id: Option<i64>,
    /// Owning group's name; only listings fill it in.
    pub group_name: Option<String>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().value(),
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            created: task.created(),
            status: task.status(),
            group_id: task.group_id().map(GroupId::value),
            group_name: task.group_name().map(|name| name.as_str().to_owned()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateTaskBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    group_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct UpdateTaskBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct ListTasksQuery {
    #[serde(default)]
    group_id: Option<i64>,
}

async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskBody>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let mut request = CreateTaskRequest::new(body.name, body.description);
    if let Some(group_id) = body.group_id {
        request = request.with_group(group_id);
    }
    let task = state.service().create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = state.service().list_tasks(query.group_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.service().get_task(id).await?;
    Ok(Json(task.into()))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskBody>,
) -> ApiResult<Json<TaskResponse>> {
    let request = UpdateTaskRequest::new(id, body.name, body.description, body.status);
    let task = state.service().update_task(request).await?;
    Ok(Json(task.into()))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service().delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
