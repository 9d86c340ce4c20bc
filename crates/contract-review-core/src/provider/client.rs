use reqwest::{header, Client};
use std::time::Duration;

use contract_review_types::protocol::{GenerationRequest, GenerationResponse};
use contract_review_types::{AnalysisError, ConfigError};

use crate::config::ProviderConfig;

/// Build the HTTP client with the request timeout baked in.
pub fn build_http_client(timeout: Duration) -> Result<Client, ConfigError> {
    Client::builder()
        .timeout(timeout)
        .tcp_nodelay(true)
        .build()
        .map_err(|e| ConfigError::HttpClient { message: e.to_string() })
}

/// One POST per call; no retries.
pub struct InferenceClient {
    http_client: Client,
    config: ProviderConfig,
}

impl InferenceClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let http_client = build_http_client(config.timeout())?;
        Ok(Self { http_client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub async fn generate(&self, prompt: String) -> Result<GenerationResponse, AnalysisError> {
        let request = GenerationRequest::for_prompt(prompt);

        let response = self
            .http_client
            .post(self.config.endpoint())
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.config.api_key().expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ [Provider] API error response ({}): {}", status.as_u16(), body);
            return Err(AnalysisError::UpstreamHttp { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify_transport_error(&e))?;
        let body: GenerationResponse = serde_json::from_slice(&bytes).map_err(|e| {
            AnalysisError::Unknown { message: format!("invalid provider response: {}", e) }
        })?;

        tracing::info!(
            "✅ [Provider] API call succeeded, status {} (request_id={}, tokens={})",
            status.as_u16(),
            body.request_id.as_deref().unwrap_or("-"),
            body.usage.as_ref().map_or(0, |u| u.total_tokens),
        );

        Ok(body)
    }

    /// Failures where no HTTP status was received.
    fn classify_transport_error(&self, e: &reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout { timeout_ms: self.config.timeout_ms() }
        } else {
            AnalysisError::Network { message: e.to_string() }
        }
    }
}
