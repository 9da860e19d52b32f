//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::GenerationError;

/// Errors emitted by `ChatQuestionSource`.
///
/// These carry the technical cause for logs. Callers of `QuestionSource` only ever see
/// the `GenerationError` they convert into.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("question generator is not configured")]
    Disabled,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question generator returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("needed {wanted} usable questions, got {got}")]
    TooFewQuestions { wanted: usize, got: usize },
}

impl From<GeneratorError> for GenerationError {
    fn from(_: GeneratorError) -> Self {
        GenerationError::default()
    }
}

/// Errors emitted while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {raw:?}")]
    NotPositive { name: &'static str, raw: String },
    #[error("{name} must be an integer, got {raw:?}")]
    NotANumber { name: &'static str, raw: String },
}
