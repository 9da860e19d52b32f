use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::QuestionKind;

/// Which kind of questions a quiz run asks for. Fixed for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Synonyms,
    Antonyms,
    #[default]
    Mixed,
}

impl QuizMode {
    /// Returns true if a question of `kind` belongs in this mode.
    #[must_use]
    pub fn accepts(self, kind: QuestionKind) -> bool {
        match self {
            QuizMode::Synonyms => kind == QuestionKind::Synonym,
            QuizMode::Antonyms => kind == QuestionKind::Antonym,
            QuizMode::Mixed => true,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::Synonyms => "synonyms",
            QuizMode::Antonyms => "antonyms",
            QuizMode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quiz mode: {0} (expected synonyms, antonyms or mixed)")]
pub struct ParseModeError(pub String);

impl FromStr for QuizMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synonyms" | "synonym" | "s" => Ok(QuizMode::Synonyms),
            "antonyms" | "antonym" | "a" => Ok(QuizMode::Antonyms),
            "mixed" | "m" => Ok(QuizMode::Mixed),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
