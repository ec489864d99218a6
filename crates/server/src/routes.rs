pub mod groups;
pub mod health;
pub mod terms;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health probes, the `/api` surface and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/health/db", get(health::db_health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // matchit needs one parameter name per segment position
    let api = Router::new()
        .route("/api/groups", get(groups::list).post(groups::create))
        .route("/api/groups/:id", delete(groups::delete))
        .route("/api/groups/:id/terms", get(groups::list_terms))
        .route("/api/terms", post(terms::create))
        .route("/api/terms/:id", delete(terms::delete));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
