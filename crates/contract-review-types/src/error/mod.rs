//! Typed error definitions for the contract review service.
//!
//! - [`AnalysisError`] covers every way a single analysis request can fail and
//!   knows the HTTP status and client-facing message for each case.
//! - [`ConfigError`] covers startup configuration problems.

mod analysis;
mod config;

pub use analysis::AnalysisError;
pub use config::ConfigError;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AnalysisError::UpstreamHttp { status: 429, body: "throttled".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UpstreamHttp"));
        assert!(json.contains("429"));

        let deserialized: AnalysisError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_config_error_wraps_into_analysis_error() {
        let err: AnalysisError = ConfigError::MissingApiKey.into();
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "API key misconfigured");
    }
}
