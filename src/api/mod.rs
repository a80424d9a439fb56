//! HTTP JSON API.
//!
//! Two endpoint families keyed by an `action` query parameter, mirroring the
//! PHP endpoints the browser front end was written against:
//!
//! - `/api` (alias `/api.php`): entries, project configuration, login
//! - `/work_division` (alias `/work_division_api.php`): event logistics

pub mod handlers;
pub mod response;
pub mod state;
pub mod work_division;

use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::get;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub bind: String,
    pub cors_allow_any: bool,
}

pub fn build_router(state: AppState, cors_allow_any: bool) -> Router {
    let router = Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/api",
            get(handlers::api_handler).post(handlers::api_handler),
        )
        .route(
            "/api.php",
            get(handlers::api_handler).post(handlers::api_handler),
        )
        .route(
            "/work_division",
            get(work_division::work_division_handler).post(work_division::work_division_handler),
        )
        .route(
            "/work_division_api.php",
            get(work_division::work_division_handler).post(work_division::work_division_handler),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

async fn healthz() -> axum::response::Response {
    response::ok(json!({ "status": "ok" }))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, opts: ServerOptions) -> AppResult<()> {
    let addr: SocketAddr = opts
        .bind
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address '{}': {e}", opts.bind)))?;

    let app = build_router(state, opts.cors_allow_any);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "rworkhours API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
