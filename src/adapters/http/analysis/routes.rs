//! HTTP routes for analysis endpoints.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::handlers::{analyze_upload, health, rank_table, AnalysisAppState};

/// Creates the analysis router. State is supplied by the caller.
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        // POST /api/analyze
        .route("/api/analyze", post(analyze_upload))
        // POST /api/topsis
        .route("/api/topsis", post(rank_table))
        // GET /health
        .route("/health", get(health))
}

/// Creates the complete application router with limits and tracing.
pub fn app_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    analysis_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(DefaultBodyLimit::max(server.max_upload_bytes)),
        )
        .with_state(state)
}
