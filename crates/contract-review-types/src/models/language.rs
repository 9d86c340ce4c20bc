use serde::{Deserialize, Serialize};

/// Prompt language selected by the request's `lang` code.
///
/// Only `zh` and `en` are recognised explicitly; any other code falls through
/// to [`Language::Spanish`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
    Spanish,
}

impl Language {
    /// Exact match on the two recognised codes.
    pub fn recognize(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Self::Chinese),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    /// Permissive resolution used by the handler: unknown codes map to Spanish.
    pub fn from_code(code: &str) -> Self {
        Self::recognize(code).unwrap_or(Self::Spanish)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_codes() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("en"), Language::English);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in ["fr", "es", "", "ZH", "en-US"] {
            assert_eq!(Language::from_code(code), Language::Spanish, "code {:?}", code);
            assert!(Language::recognize(code).is_none());
        }
    }

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Language::default(), Language::Chinese);
        assert_eq!(Language::default().to_string(), "zh");
    }
}
