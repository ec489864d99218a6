use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::{AppConfig, CorsConfig};
use service::retry::{retry_with_policy, RetryPolicy};
use service::search::repo::{InMemorySearchRepository, SeaOrmSearchRepository};
use service::search::SearchService;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Restrict CORS to the configured origin; fall back to any origin when unset.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    match cfg.allowed_origin.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .map_err(|e| StartupError::InvalidConfig(format!("cors.allowed_origin {origin:?}: {e}")))?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]))
        }
        None => {
            warn!("cors.allowed_origin not set; allowing any origin");
            Ok(CorsLayer::very_permissive())
        }
    }
}

/// Pick the storage backend once. The durable path waits for the database
/// under the configured retry policy and applies pending migrations.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let search = if cfg.storage.in_memory {
        warn!("in-memory storage selected; data is lost on restart");
        SearchService::new(Arc::new(InMemorySearchRepository::with_demo_data()))
    } else {
        let policy = RetryPolicy::from_config(&cfg.database);
        let db = retry_with_policy(&policy, || models::db::connect_with_config(&cfg.database))
            .await
            .map_err(|e| StartupError::Storage(e.to_string()))?;
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Storage(format!("migrations: {e}")))?;
        info!("database migrations applied");
        SearchService::new(Arc::new(SeaOrmSearchRepository::new(db, policy)))
    };
    Ok(ServerState::new(search))
}

pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let cors = build_cors(&cfg.cors)?;
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, cors))
}

/// Bind, serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;
    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, in_memory = cfg.storage.in_memory, "starting search terms server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c; shutting down");
        return;
    }
    info!("ctrl_c received; shutting down");
}
