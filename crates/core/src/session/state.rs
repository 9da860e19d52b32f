use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Question, QuizMode};
use crate::summary::QuizSummary;

use super::event::AnswerTicket;

/// Where a quiz run currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Start,
    Loading,
    Playing,
    Finished,
    Error,
}

impl SessionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Start => "start",
            SessionStatus::Loading => "loading",
            SessionStatus::Playing => "playing",
            SessionStatus::Finished => "finished",
            SessionStatus::Error => "error",
        }
    }

    /// States a restart request is accepted from.
    #[must_use]
    pub fn is_restartable(self) -> bool {
        matches!(
            self,
            SessionStatus::Playing | SessionStatus::Finished | SessionStatus::Error
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable state of one quiz run.
///
/// Only [`Session::transition`] produces new values, so the invariants below hold for
/// every session a caller can observe:
///
/// - `answers.len() == current_index` while playing; `answers.len() == questions.len()`
///   once finished (the index stays on the last question)
/// - `score` equals the number of `true` answers
/// - `questions` is non-empty while playing or finished
/// - `error_message` is set only in [`SessionStatus::Error`]
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<quiz_core::session::Session>();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(super) status: SessionStatus,
    pub(super) mode: QuizMode,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) score: usize,
    pub(super) answers: Vec<bool>,
    pub(super) error_message: Option<String>,
    pub(super) run: u64,
}

impl Session {
    /// A fresh session waiting on the start screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Counter bumped by every accepted start request.
    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// The question being answered. `None` unless playing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.status == SessionStatus::Playing {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Identity an answer signal for the current question must carry.
    #[must_use]
    pub fn answer_ticket(&self) -> Option<AnswerTicket> {
        self.current_question().map(|_| AnswerTicket {
            run: self.run,
            index: self.current_index,
        })
    }

    /// Result summary once the run is finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        QuizSummary::from_session(self)
    }
}
