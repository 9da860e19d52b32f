use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Question;
use crate::session::{AnswerTicket, Session};

/// A finalized choice on the current question, waiting for its reveal delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub ticket: AnswerTicket,
    pub option: String,
    pub correct: bool,
}

/// Ephemeral state for the question on screen.
///
/// Built fresh whenever the current question changes and dropped with it. Selection
/// happens at most once; afterwards the state is locked until it is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    ticket: AnswerTicket,
    display_order: Vec<String>,
    selected: Option<String>,
    locked: bool,
}

impl InteractionState {
    /// Activate `question` with its options shuffled by `rng`.
    pub fn activate<R: Rng + ?Sized>(question: &Question, ticket: AnswerTicket, rng: &mut R) -> Self {
        let mut display_order = question.options().to_vec();
        display_order.shuffle(rng);
        Self {
            ticket,
            display_order,
            selected: None,
            locked: false,
        }
    }

    /// Interaction state for the session's current question, if it is playing.
    pub fn for_session<R: Rng + ?Sized>(session: &Session, rng: &mut R) -> Option<Self> {
        let question = session.current_question()?;
        let ticket = session.answer_ticket()?;
        Some(Self::activate(question, ticket, rng))
    }

    #[must_use]
    pub fn ticket(&self) -> AnswerTicket {
        self.ticket
    }

    #[must_use]
    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock in `option` for `question`.
    ///
    /// Returns `None` without touching anything when already locked.
    pub fn select(&mut self, option: &str, question: &Question) -> Option<Selection> {
        if self.locked {
            return None;
        }
        self.selected = Some(option.to_string());
        self.locked = true;
        Some(Selection {
            ticket: self.ticket,
            option: option.to_string(),
            correct: question.is_correct(option),
        })
    }
}
