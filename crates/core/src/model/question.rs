use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Number of options every question must offer.
pub const OPTION_COUNT: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Whether the user must pick the synonym or the antonym of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Synonym,
    Antonym,
}

/// Unvalidated question record, in the shape the generator returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub word: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft and assign it a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the word or prompt is blank, the option count is not
    /// `OPTION_COUNT`, options are blank or repeated, or the correct answer is not one
    /// of the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        self.validate_with_id(QuestionId::random())
    }

    fn validate_with_id(self, id: QuestionId) -> Result<Question, QuestionError> {
        let word = self.word.trim().to_string();
        if word.is_empty() {
            return Err(QuestionError::EmptyWord);
        }

        let prompt = self.question_text.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                expected: OPTION_COUNT,
                got: self.options.len(),
            });
        }

        let options: Vec<String> = self
            .options
            .into_iter()
            .map(|option| option.trim().to_string())
            .collect();
        if options.iter().any(String::is_empty) {
            return Err(QuestionError::EmptyOption);
        }

        let mut seen = HashSet::with_capacity(options.len());
        if let Some(dup) = options.iter().find(|option| !seen.insert(option.as_str())) {
            return Err(QuestionError::DuplicateOption(dup.clone()));
        }

        let correct_answer = self.correct_answer.trim().to_string();
        if !options.contains(&correct_answer) {
            return Err(QuestionError::AnswerNotInOptions(correct_answer));
        }

        let explanation = self
            .explanation
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Question {
            id,
            word,
            kind: self.kind,
            prompt,
            options,
            correct_answer,
            explanation,
        })
    }
}

/// A validated multiple-choice question. Immutable once built.
///
/// Only [`QuestionDraft::validate`] builds one; there is no way around validation:
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<quiz_core::model::Question>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    word: String,
    kind: QuestionKind,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in the order the generator produced them.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question word cannot be empty")]
    EmptyWord,

    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("expected {expected} options, got {got}")]
    OptionCount { expected: usize, got: usize },

    #[error("options cannot be empty")]
    EmptyOption,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer is not among the options: {0}")]
    AnswerNotInOptions(String),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            word: " brave ".into(),
            kind: QuestionKind::Synonym,
            question_text: "Which word means brave?".into(),
            options: vec!["bold".into(), "timid".into(), "slow".into(), "quiet".into()],
            correct_answer: "bold".into(),
            explanation: Some("  ".into()),
        }
    }

    #[test]
    fn valid_draft_is_trimmed_and_blank_explanation_dropped() {
        let question = draft().validate().unwrap();
        assert_eq!(question.word(), "brave");
        assert_eq!(question.options().len(), OPTION_COUNT);
        assert_eq!(question.explanation(), None);
        assert!(question.is_correct("bold"));
        assert!(!question.is_correct("timid"));
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        let mut d = draft();
        d.options.pop();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::OptionCount {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn duplicate_options_are_rejected_after_trimming() {
        let mut d = draft();
        d.options[3] = " bold".into();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::DuplicateOption("bold".into())
        );
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let mut d = draft();
        d.correct_answer = "fearless".into();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::AnswerNotInOptions(_)
        ));
    }

    #[test]
    fn blank_word_and_prompt_are_rejected() {
        let mut d = draft();
        d.word = "   ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyWord);

        let mut d = draft();
        d.question_text = String::new();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn draft_reads_generator_record_shape() {
        let json = r#"{
            "word": "كريم",
            "type": "antonym",
            "questionText": "ما هو ضد كلمة كريم؟",
            "options": ["بخيل", "جواد", "سخي", "معطاء"],
            "correctAnswer": "بخيل"
        }"#;
        let d: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.kind, QuestionKind::Antonym);
        assert_eq!(d.explanation, None);
        let question = d.validate().unwrap();
        assert_eq!(question.correct_answer(), "بخيل");
    }
}
