use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::search::domain::{CreateGroupInput, GroupSummary, TermRecord};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    responses((status = 200, description = "Groups ordered by name", body = [crate::openapi::GroupSummaryDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<GroupSummary>>, JsonApiError> {
    let groups = state.search.list_groups().await?;
    info!(count = groups.len(), "list groups");
    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    request_body = crate::openapi::CreateGroupDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::GroupSummaryDoc),
        (status = 400, description = "Blank or duplicate name", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateGroupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<GroupSummary>), JsonApiError> {
    let Json(input) = payload?;
    let group = state.search.create_group(input).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses((status = 204, description = "Group and its terms deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.search.delete_group(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/terms",
    tag = "terms",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Terms ordered by text", body = [crate::openapi::TermDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn list_terms(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TermRecord>>, JsonApiError> {
    let terms = state.search.list_terms(id).await?;
    info!(group_id = id, count = terms.len(), "list terms");
    Ok(Json(terms))
}
