//! Supported display languages.

use serde::{Deserialize, Serialize};

/// Display language identifier
///
/// Closed set; the serialized form is the language's own display name,
/// which is also what the preference file stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageKey {
    #[serde(rename = "Русский")]
    Russian,
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Türkçe")]
    Turkish,
}

impl LanguageKey {
    /// Get all supported languages, in picker order
    pub fn all() -> &'static [LanguageKey] {
        &[
            LanguageKey::English,
            LanguageKey::Russian,
            LanguageKey::Turkish,
        ]
    }

    /// Native display name (what the language picker shows)
    pub fn name(&self) -> &'static str {
        match self {
            LanguageKey::Russian => "Русский",
            LanguageKey::English => "English",
            LanguageKey::Turkish => "Türkçe",
        }
    }

    /// Two-letter code, for log output
    pub fn code(&self) -> &'static str {
        match self {
            LanguageKey::Russian => "ru",
            LanguageKey::English => "en",
            LanguageKey::Turkish => "tr",
        }
    }

    /// Position within [`LanguageKey::all`]
    pub fn index(&self) -> usize {
        LanguageKey::all()
            .iter()
            .position(|k| k == self)
            .unwrap_or(0)
    }
}

impl Default for LanguageKey {
    fn default() -> Self {
        LanguageKey::Russian
    }
}

impl std::fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LanguageKey {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Русский" | "ru" => Ok(LanguageKey::Russian),
            "English" | "en" => Ok(LanguageKey::English),
            "Türkçe" | "tr" => Ok(LanguageKey::Turkish),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Parse error for language names
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);
