//! DashScope text-generation API types.
//!
//! Request: `{model, input: {messages}, parameters: {result_format, max_tokens, temperature}}`.
//! Response content lives either at `output.choices[0].message.content`
//! (`result_format = "message"`) or at `output.text` (legacy text format).

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "qwen-turbo";
pub const RESULT_FORMAT_MESSAGE: &str = "message";
pub const MAX_TOKENS: u32 = 1500;
pub const TEMPERATURE: f32 = 0.1;

/// Returned to the caller when the provider succeeded but produced no text.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "Analysis completed, but the AI returned no content.";

/// DashScope message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DashScopeRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashScopeMessage {
    pub role: DashScopeRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationInput {
    pub messages: Vec<DashScopeMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationParameters {
    pub result_format: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Outbound request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub input: GenerationInput,
    pub parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Single user-turn request with the fixed generation settings.
    pub fn for_prompt(prompt: String) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            input: GenerationInput {
                messages: vec![DashScopeMessage { role: DashScopeRole::User, content: prompt }],
            },
            parameters: GenerationParameters {
                result_format: RESULT_FORMAT_MESSAGE.to_string(),
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationOutput {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// DashScope token usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Inbound response body. Every field is optional; the provider's shape
/// varies with `result_format`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResponse {
    #[serde(default)]
    pub output: Option<GenerationOutput>,
    #[serde(default)]
    pub usage: Option<GenerationUsage>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Where the generated text was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderContent {
    /// `output.choices[0].message.content`
    Choices(String),
    /// `output.text`
    Text(String),
    Empty,
}

impl GenerationResponse {
    /// Resolve the response shape once.
    ///
    /// A present first choice wins even when its content is missing; `output.text`
    /// is only consulted when there are no choices.
    pub fn content(&self) -> ProviderContent {
        let Some(output) = &self.output else {
            return ProviderContent::Empty;
        };

        let first_choice = output.choices.as_ref().and_then(|choices| choices.first());
        match (first_choice, output.text.as_deref()) {
            (Some(choice), _) => match choice.message.as_ref().and_then(|m| m.content.as_deref()) {
                Some(content) if !content.is_empty() => ProviderContent::Choices(content.to_string()),
                _ => ProviderContent::Empty,
            },
            (None, Some(text)) if !text.is_empty() => ProviderContent::Text(text.to_string()),
            (None, _) => ProviderContent::Empty,
        }
    }
}

impl ProviderContent {
    /// Text returned to the caller; [`EMPTY_CONTENT_PLACEHOLDER`] when empty.
    pub fn into_text(self) -> String {
        match self {
            Self::Choices(text) | Self::Text(text) => text,
            Self::Empty => EMPTY_CONTENT_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerationResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_wire_shape() {
        let body = serde_json::to_value(GenerationRequest::for_prompt("hi".to_string())).unwrap();
        assert_eq!(body["model"], "qwen-turbo");
        assert_eq!(body["input"]["messages"][0]["role"], "user");
        assert_eq!(body["input"]["messages"][0]["content"], "hi");
        assert_eq!(body["parameters"]["result_format"], "message");
        assert_eq!(body["parameters"]["max_tokens"], 1500);
        let temperature = body["parameters"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_choices_shape() {
        let resp = parse(json!({"output": {"choices": [{"message": {"content": "X"}}]}}));
        assert_eq!(resp.content(), ProviderContent::Choices("X".to_string()));
    }

    #[test]
    fn test_text_shape() {
        let resp = parse(json!({"output": {"text": "Y"}}));
        assert_eq!(resp.content(), ProviderContent::Text("Y".to_string()));
    }

    #[test]
    fn test_empty_choices_array_falls_back_to_text() {
        let resp = parse(json!({"output": {"choices": [], "text": "Y"}}));
        assert_eq!(resp.content(), ProviderContent::Text("Y".to_string()));
    }

    #[test]
    fn test_choice_without_content_ignores_text() {
        let resp = parse(json!({"output": {"choices": [{"message": {}}], "text": "Y"}}));
        assert_eq!(resp.content(), ProviderContent::Empty);
    }

    #[test]
    fn test_neither_shape_is_placeholder() {
        for value in [json!({}), json!({"output": {}}), json!({"output": {"text": ""}})] {
            let resp = parse(value);
            assert_eq!(resp.content(), ProviderContent::Empty);
            assert_eq!(resp.content().into_text(), EMPTY_CONTENT_PLACEHOLDER);
        }
    }

    #[test]
    fn test_usage_and_request_id() {
        let resp = parse(json!({
            "request_id": "abc",
            "usage": {"input_tokens": 10, "output_tokens": 20, "total_tokens": 30},
            "output": {"text": "ok"}
        }));
        assert_eq!(resp.request_id.as_deref(), Some("abc"));
        assert_eq!(resp.usage.unwrap().total_tokens, 30);
    }
}
