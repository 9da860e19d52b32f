//! Pure session transitions
//!
//! Given the same session and event, `transition` always returns the same result and
//! performs no I/O. Side effects are returned as [`SessionEffect`]s for the caller to run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::QuizMode;

use super::event::{AnswerTicket, SessionEvent};
use super::state::{Session, SessionStatus};

/// Message recorded when a source reports success with nothing in it.
pub const EMPTY_QUESTIONS_MESSAGE: &str = "No questions were generated. Please try again.";

/// Audio/visual feedback moments. Pure side effects; never read back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Correct,
    Incorrect,
    Advance,
    Celebrate,
}

/// Work the caller must perform after applying a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Ask the question source for `count` questions and report back tagged with `run`.
    FetchQuestions {
        run: u64,
        mode: QuizMode,
        count: usize,
    },
    Cue(Cue),
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<SessionEffect>,
}

impl Transition {
    fn new(session: Session) -> Self {
        Self {
            session,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: SessionEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Why an event was not applied. The session is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("cannot {event} while {status}")]
    InvalidTransition {
        status: SessionStatus,
        event: &'static str,
    },

    #[error("event for run {got} arrived during run {live}")]
    StaleRun { live: u64, got: u64 },

    #[error("answer for question {got} arrived while on question {current}")]
    StaleAnswer { current: usize, got: usize },

    #[error("question count must be > 0")]
    ZeroCount,
}

impl Session {
    /// Compute the session that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when the event does not apply to the current status,
    /// belongs to an earlier run or question, or asks for zero questions.
    pub fn transition(&self, event: SessionEvent) -> Result<Transition, TransitionError> {
        let invalid = |event: &SessionEvent| TransitionError::InvalidTransition {
            status: self.status,
            event: event.name(),
        };

        match (self.status, event) {
            (SessionStatus::Start, SessionEvent::StartRequested { mode, count }) => {
                if count == 0 {
                    return Err(TransitionError::ZeroCount);
                }
                let run = self.run.wrapping_add(1);
                let next = Session {
                    status: SessionStatus::Loading,
                    mode,
                    run,
                    ..Session::default()
                };
                Ok(Transition::new(next).with_effect(SessionEffect::FetchQuestions {
                    run,
                    mode,
                    count,
                }))
            }

            (SessionStatus::Loading, SessionEvent::QuestionsLoaded { run, questions }) => {
                self.check_run(run)?;
                if questions.is_empty() {
                    return Ok(Transition::new(self.failed(EMPTY_QUESTIONS_MESSAGE.into())));
                }
                Ok(Transition::new(Session {
                    status: SessionStatus::Playing,
                    mode: self.mode,
                    questions,
                    current_index: 0,
                    score: 0,
                    answers: Vec::new(),
                    error_message: None,
                    run: self.run,
                }))
            }

            (SessionStatus::Loading, SessionEvent::LoadFailed { run, message }) => {
                self.check_run(run)?;
                Ok(Transition::new(self.failed(message)))
            }

            (SessionStatus::Playing, SessionEvent::Answered { ticket, correct }) => {
                self.check_ticket(ticket)?;
                let mut next = self.clone();
                next.answers.push(correct);
                if correct {
                    next.score += 1;
                }

                let cue = if next.current_index + 1 < next.questions.len() {
                    next.current_index += 1;
                    Cue::Advance
                } else {
                    next.status = SessionStatus::Finished;
                    Cue::Celebrate
                };
                Ok(Transition::new(next).with_effect(SessionEffect::Cue(cue)))
            }

            (status, SessionEvent::RestartRequested) if status.is_restartable() => {
                Ok(Transition::new(Session {
                    run: self.run,
                    ..Session::default()
                }))
            }

            (_, event) => Err(invalid(&event)),
        }
    }

    /// Apply `event` in place, returning the effects to run.
    ///
    /// # Errors
    ///
    /// Same as [`Session::transition`]; on error `self` is unchanged.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Vec<SessionEffect>, TransitionError> {
        let Transition { session, effects } = self.transition(event)?;
        *self = session;
        Ok(effects)
    }

    fn check_run(&self, run: u64) -> Result<(), TransitionError> {
        if run == self.run {
            Ok(())
        } else {
            Err(TransitionError::StaleRun {
                live: self.run,
                got: run,
            })
        }
    }

    fn check_ticket(&self, ticket: AnswerTicket) -> Result<(), TransitionError> {
        self.check_run(ticket.run)?;
        if ticket.index == self.current_index {
            Ok(())
        } else {
            Err(TransitionError::StaleAnswer {
                current: self.current_index,
                got: ticket.index,
            })
        }
    }

    fn failed(&self, message: String) -> Session {
        Session {
            status: SessionStatus::Error,
            mode: self.mode,
            error_message: Some(message),
            run: self.run,
            ..Session::default()
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
