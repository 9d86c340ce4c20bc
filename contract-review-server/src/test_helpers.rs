//! Test helpers for contract-review-server unit tests.

use axum::Router;
use contract_review_core::{AnalysisState, InferenceClient, ProviderConfig, RuntimeEnvironment};

use crate::router::build_router;

/// Full router whose provider endpoint is unreachable.
///
/// Enough for routes that never call the provider.
pub fn test_router() -> Router {
    let config = ProviderConfig::new(Some("sk-test"), "http://127.0.0.1:1/generation", 1_000)
        .expect("valid test provider config");
    let client = InferenceClient::new(config).expect("failed to build test http client");
    build_router(AnalysisState::new(client, RuntimeEnvironment::Production))
}
