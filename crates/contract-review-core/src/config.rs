//! Provider configuration, validated once at startup.

use std::fmt;
use std::time::Duration;

use contract_review_types::ConfigError;

pub const DEFAULT_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Value shipped in sample env files; never a usable key.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Provider API key. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let key = raw.map(str::trim).unwrap_or_default();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if key == PLACEHOLDER_API_KEY {
            return Err(ConfigError::PlaceholderApiKey);
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything the inference client needs to reach the provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    api_key: ApiKey,
    endpoint: String,
    timeout: Duration,
}

impl ProviderConfig {
    pub fn new(api_key: Option<&str>, endpoint: &str, timeout_ms: u64) -> Result<Self, ConfigError> {
        let api_key = ApiKey::parse(api_key)?;
        let endpoint = validate_endpoint(endpoint)?;
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout { timeout_ms });
        }
        Ok(Self { api_key, endpoint, timeout: Duration::from_millis(timeout_ms) })
    }

    /// Production endpoint and timeout with the given key.
    pub fn with_defaults(api_key: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(api_key, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidEndpoint {
        url: trimmed.to_string(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidEndpoint {
            url: trimmed.to_string(),
            message: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Deployment mode. Development adds raw error text to failure responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    #[default]
    Production,
    Development,
}

impl RuntimeEnvironment {
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}
