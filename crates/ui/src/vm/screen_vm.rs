use quiz_core::session::SessionStatus;
use services::QuizSnapshot;

use crate::vm::question_vm::{QuestionVm, map_question};
use crate::vm::result_vm::{ResultVm, map_result};

/// The one screen visible for a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start,
    Loading,
    Error { message: String },
    Playing(QuestionVm),
    Finished(ResultVm),
}

#[must_use]
pub fn map_screen(snapshot: &QuizSnapshot) -> ScreenVm {
    match snapshot.status() {
        SessionStatus::Start => ScreenVm::Start,
        SessionStatus::Loading => ScreenVm::Loading,
        SessionStatus::Error => ScreenVm::Error {
            message: snapshot
                .session
                .error_message()
                .unwrap_or(quiz_core::GENERATION_FAILED_MESSAGE)
                .to_string(),
        },
        SessionStatus::Playing => snapshot
            .interaction
            .as_ref()
            .and_then(|interaction| map_question(&snapshot.session, interaction))
            .map_or(ScreenVm::Loading, ScreenVm::Playing),
        SessionStatus::Finished => snapshot.summary().map_or(ScreenVm::Start, |summary| {
            ScreenVm::Finished(map_result(
                &summary,
                snapshot.started_at,
                snapshot.completed_at,
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::InteractionState;
    use quiz_core::Verdict;
    use quiz_core::model::{Question, QuestionDraft, QuestionKind, QuizMode};
    use quiz_core::session::{Session, SessionEvent};
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(word: &str) -> Question {
        QuestionDraft {
            word: word.into(),
            kind: QuestionKind::Synonym,
            question_text: format!("Closest to {word}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: "A".into(),
            explanation: None,
        }
        .validate()
        .unwrap()
    }

    fn loading() -> Session {
        let mut session = Session::new();
        session
            .apply(SessionEvent::StartRequested {
                mode: QuizMode::Mixed,
                count: 2,
            })
            .unwrap();
        session
    }

    #[test]
    fn start_and_loading_map_directly() {
        assert_eq!(map_screen(&QuizSnapshot::default()), ScreenVm::Start);

        let snapshot = QuizSnapshot {
            session: loading(),
            ..QuizSnapshot::default()
        };
        assert_eq!(map_screen(&snapshot), ScreenVm::Loading);
    }

    #[test]
    fn error_screen_carries_the_message() {
        let mut session = loading();
        session
            .apply(SessionEvent::LoadFailed {
                run: 1,
                message: "quota exceeded".into(),
            })
            .unwrap();
        let snapshot = QuizSnapshot {
            session,
            ..QuizSnapshot::default()
        };
        assert_eq!(
            map_screen(&snapshot),
            ScreenVm::Error {
                message: "quota exceeded".into()
            }
        );
    }

    #[test]
    fn playing_maps_the_current_question() {
        let mut session = loading();
        session
            .apply(SessionEvent::QuestionsLoaded {
                run: 1,
                questions: vec![question("big"), question("small")],
            })
            .unwrap();
        let interaction = InteractionState::for_session(&session, &mut StdRng::seed_from_u64(4));
        let snapshot = QuizSnapshot {
            session,
            interaction,
            ..QuizSnapshot::default()
        };

        let ScreenVm::Playing(vm) = map_screen(&snapshot) else {
            panic!("expected playing screen");
        };
        assert_eq!(vm.word, "big");
        assert_eq!(vm.position_label, "1/2");
    }

    #[test]
    fn finished_maps_summary_and_elapsed_time() {
        let mut session = loading();
        session
            .apply(SessionEvent::QuestionsLoaded {
                run: 1,
                questions: vec![question("big"), question("small")],
            })
            .unwrap();
        for correct in [true, false] {
            let ticket = session.answer_ticket().unwrap();
            session
                .apply(SessionEvent::Answered { ticket, correct })
                .unwrap();
        }

        let started = fixed_now();
        let snapshot = QuizSnapshot {
            session,
            interaction: None,
            started_at: Some(started),
            completed_at: Some(started + Duration::seconds(75)),
        };

        let ScreenVm::Finished(vm) = map_screen(&snapshot) else {
            panic!("expected finished screen");
        };
        assert_eq!(vm.score, 1);
        assert_eq!(vm.total, 2);
        assert_eq!(vm.percentage_label, "50%");
        assert_eq!(vm.verdict, Verdict::Good);
        assert_eq!(vm.elapsed_label.as_deref(), Some("1:15"));
        assert_eq!(vm.review.len(), 2);
        assert!(vm.review[0].answered_correctly);
        assert!(!vm.review[1].answered_correctly);
        assert_eq!(vm.review[1].kind_label, "Synonym");
    }
}
