//! Translate modes.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TranslationError;

/// What the model is asked to do with the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslateMode {
    #[default]
    Translate,
    Polishing,
    Summarize,
    Analyze,
    ExplainCode,
}

impl TranslateMode {
    pub const ALL: &'static [Self] = &[
        Self::Translate,
        Self::Polishing,
        Self::Summarize,
        Self::Analyze,
        Self::ExplainCode,
    ];

    /// Wire name, e.g. `explain-code`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Polishing => "polishing",
            Self::Summarize => "summarize",
            Self::Analyze => "analyze",
            Self::ExplainCode => "explain-code",
        }
    }
}

impl FromStr for TranslateMode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "translate" => Ok(Self::Translate),
            "polishing" | "polish" => Ok(Self::Polishing),
            "summarize" => Ok(Self::Summarize),
            "analyze" => Ok(Self::Analyze),
            "explain-code" | "explain_code" => Ok(Self::ExplainCode),
            _ => Err(TranslationError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TranslateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
