use axum::{
    extract::DefaultBodyLimit, http::StatusCode, middleware, response::IntoResponse, routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use contract_review_core::middleware::cors_headers;
use contract_review_core::{build_analysis_router, AnalysisState};

/// Contract text is capped at a few thousand characters downstream; 1 MiB is generous.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AnalysisState) -> Router {
    // The analysis router carries its own CORS layer; only these routes need one here.
    let operational = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info))
        .layer(middleware::from_fn(cors_headers));

    // Analysis router owns the fallback, so every other path reaches the handler.
    operational
        .merge(build_analysis_router(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
