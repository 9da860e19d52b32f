use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use quiz_core::model::{Question, QuizMode};
use quiz_core::session::{AnswerTicket, Cue, Session, SessionEffect, SessionEvent, SessionStatus};
use quiz_core::{Clock, InteractionState, QuizSummary};

use crate::config::QuizConfig;
use crate::feedback::{FeedbackSink, NoFeedback};
use crate::source::QuestionSource;

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Everything a presentation layer may render, captured after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSnapshot {
    pub session: Session,
    /// State of the question on screen; `None` unless playing.
    pub interaction: Option<InteractionState>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.summary()
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

struct PendingAnswer {
    ticket: AnswerTicket,
    handle: JoinHandle<()>,
}

struct ControllerState {
    session: Session,
    interaction: Option<InteractionState>,
    pending: Option<PendingAnswer>,
    rng: StdRng,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl ControllerState {
    fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            session: self.session.clone(),
            interaction: self.interaction.clone(),
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }

    fn activate_current(&mut self) {
        self.interaction = InteractionState::for_session(&self.session, &mut self.rng);
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(ticket = ?pending.ticket, "cancelling pending answer");
            pending.handle.abort();
        }
    }
}

/// Drives one quiz session from user intents.
///
/// All state sits behind a single async mutex and every intent replaces the session
/// value as a whole. Snapshots are published on a `watch` channel after each change.
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct QuizController {
    state: Arc<Mutex<ControllerState>>,
    source: Arc<dyn QuestionSource>,
    feedback: Arc<dyn FeedbackSink>,
    updates: Arc<watch::Sender<QuizSnapshot>>,
    config: QuizConfig,
    clock: Clock,
}

impl QuizController {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, config: QuizConfig) -> Self {
        Self::builder(source).config(config).build()
    }

    #[must_use]
    pub fn builder(source: Arc<dyn QuestionSource>) -> QuizControllerBuilder {
        QuizControllerBuilder {
            source,
            config: QuizConfig::default(),
            feedback: Arc::new(NoFeedback),
            clock: Clock::default(),
            rng: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.updates.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.updates.subscribe()
    }

    /// Start a run in `mode` and wait for its questions.
    ///
    /// Returns `false` when the request was ignored because the session is not on the
    /// start screen, which also covers a second request while questions are loading.
    pub async fn request_start(&self, mode: QuizMode) -> bool {
        let fetch = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let event = SessionEvent::StartRequested {
                mode,
                count: self.config.question_count,
            };
            let effects = match state.session.apply(event) {
                Ok(effects) => effects,
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring start request");
                    return false;
                }
            };
            state.started_at = None;
            state.completed_at = None;
            self.run_cues(&effects);
            self.publish(state);
            effects.into_iter().find_map(|effect| match effect {
                SessionEffect::FetchQuestions { run, mode, count } => Some((run, mode, count)),
                SessionEffect::Cue(_) => None,
            })
        };

        let Some((run, mode, count)) = fetch else {
            return true;
        };

        tracing::info!(run, %mode, count, "fetching questions");
        let event = match self.source.fetch(mode, count).await {
            Ok(questions) => SessionEvent::QuestionsLoaded { run, questions },
            Err(err) => SessionEvent::LoadFailed {
                run,
                message: err.into_message(),
            },
        };

        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        match state.session.apply(event) {
            Ok(effects) => {
                self.run_cues(&effects);
                match state.session.status() {
                    SessionStatus::Playing => {
                        tracing::info!(run, total = state.session.total(), "quiz started");
                        state.started_at = Some(self.clock.now());
                        state.activate_current();
                    }
                    status => {
                        tracing::warn!(
                            run,
                            %status,
                            message = state.session.error_message().unwrap_or_default(),
                            "quiz failed to start"
                        );
                    }
                }
                self.publish(state);
            }
            Err(err) => tracing::debug!(error = %err, "dropping load result"),
        }
        true
    }

    /// Choose `option` for the current question.
    ///
    /// The answer is applied to the session after the reveal delay. Returns `false`
    /// and changes nothing when no question is on screen or one was already chosen.
    pub async fn select_option(&self, option: &str) -> bool {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        let Some(question) = state.session.current_question() else {
            tracing::debug!("ignoring selection outside of play");
            return false;
        };
        let Some(interaction) = state.interaction.as_mut() else {
            return false;
        };
        let Some(selection) = interaction.select(option, question) else {
            tracing::debug!(option, "ignoring selection on a locked question");
            return false;
        };
        tracing::debug!(question = %question.id(), correct = selection.correct, "option selected");

        self.feedback.cue(if selection.correct {
            Cue::Correct
        } else {
            Cue::Incorrect
        });

        let ticket = selection.ticket;
        let correct = selection.correct;
        let delay = self.config.reveal_delay;
        let controller = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.deliver_answer(ticket, correct).await;
        });
        state.pending = Some(PendingAnswer { ticket, handle });

        self.publish(state);
        true
    }

    /// Abandon the current run, or leave the result or error screen.
    ///
    /// Any answer still waiting on its reveal delay is cancelled. Returns `false` when
    /// the session is on the start screen or loading.
    pub async fn request_restart(&self) -> bool {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        match state.session.apply(SessionEvent::RestartRequested) {
            Ok(effects) => {
                state.cancel_pending();
                state.interaction = None;
                state.started_at = None;
                state.completed_at = None;
                self.run_cues(&effects);
                self.publish(state);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring restart request");
                false
            }
        }
    }

    async fn deliver_answer(&self, ticket: AnswerTicket, correct: bool) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        if state.pending.as_ref().map(|pending| pending.ticket) != Some(ticket) {
            tracing::debug!(?ticket, "dropping stale answer");
            return;
        }
        state.pending = None;

        match state.session.apply(SessionEvent::Answered { ticket, correct }) {
            Ok(effects) => {
                self.run_cues(&effects);
                if state.session.status() == SessionStatus::Finished {
                    state.interaction = None;
                    state.completed_at = Some(self.clock.now());
                    tracing::info!(
                        run = ticket.run,
                        score = state.session.score(),
                        total = state.session.total(),
                        "quiz finished"
                    );
                } else {
                    state.activate_current();
                }
                self.publish(state);
            }
            Err(err) => tracing::debug!(error = %err, "dropping answer"),
        }
    }

    fn run_cues(&self, effects: &[SessionEffect]) {
        for effect in effects {
            if let SessionEffect::Cue(cue) = effect {
                self.feedback.cue(*cue);
            }
        }
    }

    fn publish(&self, state: &ControllerState) {
        self.updates.send_replace(state.snapshot());
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.updates.borrow();
        f.debug_struct("QuizController")
            .field("status", &snapshot.session.status())
            .field("run", &snapshot.session.run())
            .field("current_index", &snapshot.session.current_index())
            .field("score", &snapshot.session.score())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

pub struct QuizControllerBuilder {
    source: Arc<dyn QuestionSource>,
    config: QuizConfig,
    feedback: Arc<dyn FeedbackSink>,
    clock: Clock,
    rng: Option<StdRng>,
}

impl QuizControllerBuilder {
    #[must_use]
    pub fn config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn feedback(mut self, feedback: Arc<dyn FeedbackSink>) -> Self {
        self.feedback = feedback;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Random source for option shuffling. Seed it for reproducible orders.
    #[must_use]
    pub fn rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use]
    pub fn build(self) -> QuizController {
        let rng = self
            .rng
            .unwrap_or_else(|| StdRng::from_rng(&mut rand::rng()));
        let state = ControllerState {
            session: Session::new(),
            interaction: None,
            pending: None,
            rng,
            started_at: None,
            completed_at: None,
        };
        let (updates, _) = watch::channel(state.snapshot());
        QuizController {
            state: Arc::new(Mutex::new(state)),
            source: self.source,
            feedback: self.feedback,
            updates: Arc::new(updates),
            config: self.config,
            clock: self.clock,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
