//! Router for the analysis endpoint.
//!
//! The endpoint is served on `/`, `/api/analyze`, and as the fallback for any
//! other path, so `POST *` and `OPTIONS *` both reach the handler.

use axum::middleware;
use axum::routing::any;
use axum::Router;

use crate::analysis::handle_analysis;
use crate::middleware::cors_headers;
use crate::state::AnalysisState;

pub fn build_analysis_router(state: AnalysisState) -> Router {
    Router::new()
        .route("/", any(handle_analysis))
        .route("/api/analyze", any(handle_analysis))
        .fallback(handle_analysis)
        .with_state(state)
        .layer(middleware::from_fn(cors_headers))
}
