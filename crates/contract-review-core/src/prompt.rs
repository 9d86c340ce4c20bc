//! Lawyer-persona prompt construction.
//!
//! The template is prepended to the raw contract text first, then the whole
//! prompt is capped at [`MAX_PROMPT_CHARS`].

use contract_review_types::Language;

pub const MAX_PROMPT_CHARS: usize = 3000;
pub const TRUNCATION_MARKER: &str = "...";

pub const ZH_TEMPLATE: &str = "作为专业外贸律师，请分析以下合同的风险点和改进建议：\n\n";
pub const EN_TEMPLATE: &str =
    "As a professional trade lawyer, please analyze risks and suggestions for this contract:\n\n";
pub const ES_TEMPLATE: &str = "Como abogado profesional de comercio exterior, analice los riesgos y sugerencias de este contrato:\n\n";

pub fn template_for(language: Language) -> &'static str {
    match language {
        Language::Chinese => ZH_TEMPLATE,
        Language::English => EN_TEMPLATE,
        Language::Spanish => ES_TEMPLATE,
    }
}

/// Templated, length-capped prompt for `text`.
pub fn build_prompt(language: Language, text: &str) -> String {
    let mut prompt = String::with_capacity(template_for(language).len() + text.len());
    prompt.push_str(template_for(language));
    prompt.push_str(text);
    truncate_prompt(prompt)
}

/// Keep the first [`MAX_PROMPT_CHARS`] characters and append the marker if
/// anything was cut.
pub fn truncate_prompt(prompt: String) -> String {
    match prompt.char_indices().nth(MAX_PROMPT_CHARS) {
        None => prompt,
        Some((cut, _)) => {
            let mut truncated = prompt;
            truncated.truncate(cut);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_prefixes() {
        let text = "Seller shall deliver FOB Shanghai.";
        assert!(build_prompt(Language::Chinese, text).starts_with(ZH_TEMPLATE));
        assert!(build_prompt(Language::English, text).starts_with(EN_TEMPLATE));
        assert!(build_prompt(Language::Spanish, text).starts_with(ES_TEMPLATE));
        assert!(build_prompt(Language::English, text).ends_with(text));
    }

    #[test]
    fn test_short_prompt_untouched() {
        let prompt = build_prompt(Language::English, "short contract");
        assert!(!prompt.ends_with(TRUNCATION_MARKER));
        assert_eq!(prompt, format!("{}short contract", EN_TEMPLATE));
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS);
        assert_eq!(truncate_prompt(prompt.clone()), prompt);
    }

    #[test]
    fn test_long_prompt_truncated_after_templating() {
        let text = "x".repeat(5000);
        let prompt = build_prompt(Language::English, &text);
        assert_eq!(prompt.chars().count(), MAX_PROMPT_CHARS + TRUNCATION_MARKER.len());
        assert!(prompt.starts_with(EN_TEMPLATE));
        assert!(prompt.ends_with("x..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "合".repeat(4000);
        let prompt = build_prompt(Language::Chinese, &text);
        let body: String = prompt.chars().take(MAX_PROMPT_CHARS).collect();
        assert_eq!(body.chars().count(), MAX_PROMPT_CHARS);
        assert_eq!(prompt, format!("{}{}", body, TRUNCATION_MARKER));
    }
}
