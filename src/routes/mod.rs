//! Router assembly: health and readiness routes, `/api` words routes, static browser UI.

mod common;
mod words;

pub use common::common_routes;
pub use words::word_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// API routes only, without the static file fallback.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", word_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}

/// Full application: API routes, static files from `static_dir` for every
/// other path, request tracing and permissive CORS.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
