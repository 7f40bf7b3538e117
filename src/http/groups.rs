//! Group endpoints.

use super::{ApiResult, AppState};
use crate::task::domain::Group;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

/// Group representation on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    /// Group identifier.
    pub id: i64,
    /// Group name.
    pub name: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id().value(),
            name: group.name().as_str().to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GroupBody {
    #[serde(default)]
    name: String,
}

async fn create_group(
    State(state): State<AppState>,
    Json(body): Json<GroupBody>,
) -> ApiResult<(StatusCode, Json<GroupResponse>)> {
    let group = state.service().create_group(body.name).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

async fn list_groups(State(state): State<AppState>) -> ApiResult<Json<Vec<GroupResponse>>> {
    let groups = state.service().list_groups().await?;
    Ok(Json(groups.into_iter().map(GroupResponse::from).collect()))
}

async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<GroupResponse>> {
    let group = state.service().get_group(id).await?;
    Ok(Json(group.into()))
}

async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<GroupBody>,
) -> ApiResult<Json<GroupResponse>> {
    let group = state.service().update_group(id, body.name).await?;
    Ok(Json(group.into()))
}

async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service().delete_group(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route(
            "/groups/{id}",
            get(get_group).put(update_group).delete(delete_group),
        )
}
