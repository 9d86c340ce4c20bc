//! Inbound analysis request and the normalized response body.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Language;
use crate::error::AnalysisError;

/// Minimum contract text length, in characters.
pub const MIN_TEXT_CHARS: usize = 5;

pub const DEFAULT_LANGUAGE_CODE: &str = "zh";

/// Body of `POST /`.
///
/// `lang` is `None` only when the key is absent. A present non-string value
/// (`null`, numbers, objects) keeps its JSON rendering so it resolves to the
/// catch-all template like any other unrecognised code.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub lang: Option<String>,
}

impl AnalysisRequest {
    /// Parse a raw body, reading each field on its own.
    ///
    /// A body that is not a JSON object is an empty request. A non-string
    /// `text` counts as missing; it never discards `lang`, and a bad `lang`
    /// never discards `text`.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let text = fields.get("text").and_then(Value::as_str).map(str::to_owned);
        let lang = fields.get("lang").map(|value| match value {
            Value::String(code) => code.clone(),
            other => other.to_string(),
        });

        Self { text, lang }
    }

    /// Requested language code, defaulting to `zh`.
    pub fn lang_code(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANGUAGE_CODE)
    }

    pub fn language(&self) -> Language {
        Language::from_code(self.lang_code())
    }

    /// Contract text, if it meets the minimum length.
    pub fn validated_text(&self) -> Result<&str, AnalysisError> {
        match self.text.as_deref() {
            Some(text) if text.chars().count() >= MIN_TEXT_CHARS => Ok(text),
            _ => Err(AnalysisError::InvalidInput {
                message: format!("contract text must be at least {} characters", MIN_TEXT_CHARS),
            }),
        }
    }
}

/// JSON body returned for every analysis outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: String,
}

impl AnalysisResult {
    pub fn success(result: String) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            message: None,
            details: None,
            timestamp: now_iso8601(),
        }
    }

    /// Failure body for `err`; `details` carries raw error text and is only
    /// populated by callers running in development mode.
    pub fn failure(err: &AnalysisError, details: Option<String>) -> Self {
        let message = match err {
            AnalysisError::InvalidInput { message } => Some(message.clone()),
            _ => None,
        };
        Self {
            success: false,
            result: None,
            error: Some(err.client_message()),
            message,
            details,
            timestamp: now_iso8601(),
        }
    }
}

/// Current UTC time in the `YYYY-MM-DDTHH:MM:SS.sssZ` form browsers emit.
pub(crate) fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
