//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building the provider configuration at startup.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// No API key was supplied via CLI or environment
    #[error("API key is not configured")]
    MissingApiKey,

    /// The API key is still the template placeholder
    #[error("API key is still set to the placeholder value")]
    PlaceholderApiKey,

    /// Provider endpoint is not a valid absolute URL
    #[error("Invalid provider endpoint '{url}': {message}")]
    InvalidEndpoint {
        /// The rejected endpoint value
        url: String,
        /// Description of the parse failure
        message: String,
    },

    /// Request timeout must be non-zero
    #[error("Invalid request timeout: {timeout_ms}ms")]
    InvalidTimeout {
        /// The rejected timeout
        timeout_ms: u64,
    },

    /// The outbound HTTP client could not be constructed
    #[error("Failed to build HTTP client: {message}")]
    HttpClient {
        /// Description of the builder failure
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_endpoint() {
        let err = ConfigError::InvalidEndpoint {
            url: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL"));
    }
}
