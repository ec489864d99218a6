use axum::{extract::State, http::StatusCode, Json};

use common::types::{DbHealth, Health};

use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// 200 with `{"db":"up"}`, or 503 carrying the failure reason.
#[utoipa::path(
    get,
    path = "/health/db",
    tag = "health",
    responses(
        (status = 200, description = "Storage reachable", body = crate::openapi::DbHealthResponse),
        (status = 503, description = "Storage unreachable", body = crate::openapi::DbHealthResponse)
    )
)]
pub async fn db_health(State(state): State<ServerState>) -> (StatusCode, Json<DbHealth>) {
    let report = state.search.db_health().await;
    let status = if report.is_up() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(report))
}
