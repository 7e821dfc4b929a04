//! Response classifier configuration.

use serde::{Deserialize, Serialize};

use crate::types::ResponseKind;

/// Default affirmative answers for yes/no questions.
pub const DEFAULT_AFFIRMATIVE_TOKENS: &[&str] = &["sì", "si", "yes"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Kind assigned when no pattern matches. Default: `single_choice`.
    pub fallback_kind: Option<ResponseKind>,
    /// Answers counted as "yes". Empty means the defaults.
    pub affirmative_tokens: Vec<String>,
}

impl ClassifierConfig {
    pub fn effective_fallback_kind(&self) -> ResponseKind {
        self.fallback_kind.unwrap_or(ResponseKind::SingleChoice)
    }

    /// Lower-cased affirmative tokens, falling back to `sì`, `si`, `yes`.
    pub fn effective_affirmative_tokens(&self) -> Vec<String> {
        if self.affirmative_tokens.is_empty() {
            DEFAULT_AFFIRMATIVE_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect()
        } else {
            self.affirmative_tokens
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        }
    }
}
