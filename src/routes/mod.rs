//! Router assembly: per-domain endpoints under /api/v1, liveness
//! endpoints, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - REST API under `/api/v1/...` (one generate/solve/evaluate triple per domain)
/// - liveness endpoints at `/`, `/health`, `/ready`
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness
        .route("/", get(http::http_root))
        .route("/health", get(http::http_health))
        .route("/ready", get(http::http_ready))
        .route("/api/v1/health", get(http::http_health))
        // Grid path (A*)
        .route("/api/v1/path/generate", get(http::http_path_generate))
        .route("/api/v1/path/solve", post(http::http_path_solve))
        .route("/api/v1/path/evaluate", post(http::http_path_evaluate))
        // Graph (BFS)
        .route("/api/v1/graph/generate", get(http::http_graph_generate))
        .route("/api/v1/graph/solve", post(http::http_graph_solve))
        .route("/api/v1/graph/evaluate", post(http::http_graph_evaluate))
        // Nash
        .route("/api/v1/nash/generate", get(http::http_nash_generate))
        .route("/api/v1/nash/solve", post(http::http_nash_solve))
        .route("/api/v1/nash/evaluate", post(http::http_nash_evaluate))
        // Alpha-beta game tree
        .route("/api/v1/alphabeta/generate", post(http::http_alphabeta_generate))
        .route("/api/v1/alphabeta/solve", post(http::http_alphabeta_solve))
        .route("/api/v1/alphabeta/evaluate", post(http::http_alphabeta_evaluate))
        // Strategy quiz
        .route("/api/v1/search/generate", get(http::http_search_generate))
        .route("/api/v1/search/solve", post(http::http_search_solve))
        .route("/api/v1/search/evaluate", post(http::http_search_evaluate))
        // CSP
        .route("/api/v1/csp/generate", post(http::http_csp_generate))
        .route("/api/v1/csp/solve", post(http::http_csp_solve))
        .route("/api/v1/csp/solve-mrv", post(http::http_csp_solve_mrv))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
