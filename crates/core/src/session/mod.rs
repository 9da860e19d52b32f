//! Quiz session state machine
//!
//! A run moves `start → loading → playing → finished`, or `loading → error` when the
//! question source fails. Restart returns `playing`, `finished` and `error` to `start`.

mod event;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use event::{AnswerTicket, SessionEvent};
pub use state::{Session, SessionStatus};
pub use transition::{Cue, EMPTY_QUESTIONS_MESSAGE, SessionEffect, Transition, TransitionError};
