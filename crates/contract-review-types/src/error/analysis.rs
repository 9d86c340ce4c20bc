//! Errors produced while handling a single analysis request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ConfigError;

/// Every failure mode of one analysis request.
///
/// Variants are constructed where the failure happens (validation, client
/// build, transport, upstream status) rather than inferred afterwards.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisError {
    /// Missing or too-short contract text
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Inbound method other than POST/OPTIONS
    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: String },

    /// Provider credentials or client setup are unusable
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Provider answered with a non-success status
    #[error("Request failed with status code {status}")]
    UpstreamHttp { status: u16, body: String },

    /// No response received from the provider
    #[error("Network error: {message}")]
    Network { message: String },

    /// Provider did not answer within the request timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Anything else (e.g. undecodable success body)
    #[error("Analysis failed: {message}")]
    Unknown { message: String },
}

impl AnalysisError {
    /// Get HTTP status code for this error.
    ///
    /// Upstream statuses are passed through unchanged.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::MethodNotAllowed { .. } => 405,
            Self::UpstreamHttp { status, .. } => *status,
            Self::Configuration(_)
            | Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Unknown { .. } => 500,
        }
    }

    /// Short message safe to return to the caller.
    ///
    /// Never contains provider response bodies or credentials.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => "Invalid input".to_string(),
            Self::MethodNotAllowed { .. } => "only POST supported".to_string(),
            Self::Configuration(_) => "API key misconfigured".to_string(),
            Self::UpstreamHttp { status, .. } => format!("API error ({})", status),
            Self::Network { .. } => "network error, cannot reach AI service".to_string(),
            Self::Timeout { .. } => "request timed out".to_string(),
            Self::Unknown { .. } => "analysis failed".to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::MethodNotAllowed { .. })
    }
}
