use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use contract_review_types::{AnalysisError, AnalysisResult};

use crate::config::RuntimeEnvironment;

/// Log `err` and render it as an [`AnalysisResult`] body with the mapped status.
///
/// The raw error text is attached as `details` only in development.
pub fn failure_response(err: &AnalysisError, environment: RuntimeEnvironment) -> Response {
    let status = status_for(err);
    if err.is_client_error() {
        tracing::warn!("⚠️ [Analyze] Rejected ({}): {}", status.as_u16(), err);
    } else {
        tracing::error!("❌ [Analyze] Failed ({}): {}", status.as_u16(), err);
    }

    let details = environment.is_development().then(|| err.to_string());
    (status, Json(AnalysisResult::failure(err, details))).into_response()
}

/// 405 with the bare `{"error": ...}` body.
pub fn method_not_allowed(method: &Method) -> Response {
    let err = AnalysisError::MethodNotAllowed { method: method.to_string() };
    tracing::warn!("⚠️ [Analyze] {}", err);
    (status_for(&err), Json(serde_json::json!({ "error": err.client_message() }))).into_response()
}

fn status_for(err: &AnalysisError) -> StatusCode {
    StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use contract_review_types::ConfigError;

    #[test]
    fn test_configuration_error_maps_to_500() {
        let err = AnalysisError::Configuration(ConfigError::PlaceholderApiKey);
        let response = failure_response(&err, RuntimeEnvironment::Production);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_status_passthrough() {
        let err = AnalysisError::UpstreamHttp { status: 503, body: String::new() };
        let response = failure_response(&err, RuntimeEnvironment::Production);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_method_not_allowed_status() {
        let response = method_not_allowed(&Method::DELETE);
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
