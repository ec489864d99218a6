use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use service::search::domain::{CreateTermInput, TermRecord};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    post,
    path = "/api/terms",
    tag = "terms",
    request_body = crate::openapi::CreateTermDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TermDoc),
        (status = 400, description = "Blank term or unknown group", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateTermInput>, JsonRejection>,
) -> Result<(StatusCode, Json<TermRecord>), JsonApiError> {
    let Json(input) = payload?;
    let term = state.search.create_term(input).await?;
    Ok((StatusCode::CREATED, Json(term)))
}

#[utoipa::path(
    delete,
    path = "/api/terms/{id}",
    tag = "terms",
    params(("id" = i32, Path, description = "Term id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.search.delete_term(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
