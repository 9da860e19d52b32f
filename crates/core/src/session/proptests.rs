//! Property-based tests for the session state machine

use proptest::prelude::*;

use super::*;
use crate::model::{Question, QuestionDraft, QuestionKind, QuizMode};

fn question(i: usize) -> Question {
    QuestionDraft {
        word: format!("word-{i}"),
        kind: if i % 2 == 0 {
            QuestionKind::Synonym
        } else {
            QuestionKind::Antonym
        },
        question_text: format!("Question {i}?"),
        options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
        correct_answer: "x".into(),
        explanation: None,
    }
    .validate()
    .unwrap()
}

fn loaded(n: usize) -> Session {
    let mut session = Session::new();
    session
        .apply(SessionEvent::StartRequested {
            mode: QuizMode::Mixed,
            count: n,
        })
        .unwrap();
    let run = session.run();
    session
        .apply(SessionEvent::QuestionsLoaded {
            run,
            questions: (0..n).map(question).collect(),
        })
        .unwrap();
    session
}

proptest! {
    #[test]
    fn score_and_progress_invariants_hold(
        n in 1usize..8,
        signals in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let mut session = loaded(n);
        let mut accepted = 0usize;

        for correct in signals {
            let Some(ticket) = session.answer_ticket() else {
                // Finished: nothing else may land.
                let before = session.clone();
                let stale = AnswerTicket { run: session.run(), index: session.current_index() };
                let rejected = session
                    .apply(SessionEvent::Answered { ticket: stale, correct })
                    .is_err();
                prop_assert!(rejected);
                prop_assert_eq!(&session, &before);
                continue;
            };
            session.apply(SessionEvent::Answered { ticket, correct }).unwrap();
            accepted += 1;

            let trues = session.answers().iter().filter(|a| **a).count();
            prop_assert_eq!(session.score(), trues);

            match session.status() {
                SessionStatus::Playing => {
                    prop_assert_eq!(session.answers().len(), session.current_index());
                }
                SessionStatus::Finished => {
                    prop_assert_eq!(session.answers().len(), n);
                    prop_assert_eq!(session.current_index(), n - 1);
                }
                other => prop_assert!(false, "unexpected status {other}"),
            }
        }

        prop_assert!(accepted <= n);
        prop_assert_eq!(session.status() == SessionStatus::Finished, accepted == n);
    }

    #[test]
    fn restart_always_returns_to_a_clean_start(
        n in 1usize..6,
        answered in 0usize..6,
    ) {
        let mut session = loaded(n);
        for _ in 0..answered.min(n) {
            let ticket = session.answer_ticket().unwrap();
            session.apply(SessionEvent::Answered { ticket, correct: true }).unwrap();
        }

        session.apply(SessionEvent::RestartRequested).unwrap();

        let clean = Session { run: session.run(), ..Session::default() };
        prop_assert_eq!(session, clean);
    }
}
