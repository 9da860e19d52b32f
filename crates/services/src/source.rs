use async_trait::async_trait;

use quiz_core::GenerationError;
use quiz_core::model::{Question, QuestionDraft, QuizMode};

use crate::error::GeneratorError;

/// Supplies validated questions for a quiz run.
///
/// Implementations must return exactly `count` questions whose kinds the mode accepts,
/// or fail. Any failure is shown to the user as the error's message.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self, mode: QuizMode, count: usize) -> Result<Vec<Question>, GenerationError>;
}

/// Validate raw drafts and keep the first `count` that fit `mode`.
///
/// Drafts that fail validation or belong to another mode are dropped with a warning.
///
/// # Errors
///
/// Returns `GeneratorError::TooFewQuestions` when fewer than `count` survive.
pub fn select_usable(
    drafts: Vec<QuestionDraft>,
    mode: QuizMode,
    count: usize,
) -> Result<Vec<Question>, GeneratorError> {
    let mut usable = Vec::with_capacity(count);
    for draft in drafts {
        if usable.len() == count {
            break;
        }
        if !mode.accepts(draft.kind) {
            tracing::warn!(word = %draft.word, ?mode, "dropping question of the wrong kind");
            continue;
        }
        match draft.validate() {
            Ok(question) => usable.push(question),
            Err(err) => tracing::warn!(error = %err, "dropping invalid question"),
        }
    }

    if usable.len() < count {
        return Err(GeneratorError::TooFewQuestions {
            wanted: count,
            got: usable.len(),
        });
    }
    Ok(usable)
}
