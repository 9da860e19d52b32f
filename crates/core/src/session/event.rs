//! Inputs to the session state machine

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuizMode};

/// Identifies the question an answer signal was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerTicket {
    pub run: u64,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// User asked to begin a run.
    StartRequested { mode: QuizMode, count: usize },

    /// The question source answered for `run`.
    QuestionsLoaded { run: u64, questions: Vec<Question> },

    /// The question source failed for `run`.
    LoadFailed { run: u64, message: String },

    /// The reveal delay for a selection elapsed.
    Answered { ticket: AnswerTicket, correct: bool },

    /// User abandoned the run or acknowledged its end.
    RestartRequested,
}

impl SessionEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::StartRequested { .. } => "start",
            SessionEvent::QuestionsLoaded { .. } => "load questions",
            SessionEvent::LoadFailed { .. } => "record load failure",
            SessionEvent::Answered { .. } => "answer",
            SessionEvent::RestartRequested => "restart",
        }
    }
}
