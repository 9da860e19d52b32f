use quiz_core::InteractionState;
use quiz_core::model::{Question, QuestionKind};
use quiz_core::session::Session;

/// How an option is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Nothing chosen yet; the option can be picked.
    Idle,
    Correct,
    /// The chosen option, when it was wrong.
    Wrong,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub number: usize,
    pub label: String,
    pub state: OptionState,
}

/// Shown under the options once a choice is locked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    /// Present only after a wrong choice.
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position_label: String,
    pub score: usize,
    pub progress_percent: u32,
    pub kind_label: &'static str,
    pub word: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Synonym => "Synonym",
        QuestionKind::Antonym => "Antonym",
    }
}

fn option_state(option: &str, question: &Question, interaction: &InteractionState) -> OptionState {
    if !interaction.is_locked() {
        return OptionState::Idle;
    }
    if question.is_correct(option) {
        OptionState::Correct
    } else if interaction.selected() == Some(option) {
        OptionState::Wrong
    } else {
        OptionState::Dimmed
    }
}

/// Map the question on screen. `None` unless the session is playing.
#[must_use]
pub fn map_question(session: &Session, interaction: &InteractionState) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let total = session.total();
    let index = session.current_index();

    let options = interaction
        .display_order()
        .iter()
        .enumerate()
        .map(|(idx, label)| OptionVm {
            number: idx + 1,
            label: label.clone(),
            state: option_state(label, question, interaction),
        })
        .collect();

    let feedback = interaction.selected().map(|selected| {
        let correct = question.is_correct(selected);
        FeedbackVm {
            correct,
            headline: if correct {
                "Well done! That's correct."
            } else {
                "Sorry, that's not right."
            },
            correct_answer: (!correct).then(|| question.correct_answer().to_string()),
            explanation: question.explanation().map(str::to_string),
        }
    });

    let progress_percent = u32::try_from(index * 100 / total.max(1)).unwrap_or(100);

    Some(QuestionVm {
        position_label: format!("{}/{total}", index + 1),
        score: session.score(),
        progress_percent,
        kind_label: kind_label(question.kind()),
        word: question.word().to_string(),
        prompt: question.prompt().to_string(),
        options,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionDraft, QuizMode};
    use quiz_core::session::SessionEvent;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(word: &str, explanation: Option<&str>) -> Question {
        QuestionDraft {
            word: word.into(),
            kind: QuestionKind::Antonym,
            question_text: format!("Opposite of {word}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: "B".into(),
            explanation: explanation.map(str::to_string),
        }
        .validate()
        .unwrap()
    }

    fn playing() -> Session {
        let mut session = Session::new();
        session
            .apply(SessionEvent::StartRequested {
                mode: QuizMode::Antonyms,
                count: 2,
            })
            .unwrap();
        session
            .apply(SessionEvent::QuestionsLoaded {
                run: 1,
                questions: vec![
                    question("hot", Some("Cold is the opposite.")),
                    question("up", None),
                ],
            })
            .unwrap();
        session
    }

    fn interaction(session: &Session) -> InteractionState {
        InteractionState::for_session(session, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn fresh_question_has_idle_options_and_no_feedback() {
        let session = playing();
        let vm = map_question(&session, &interaction(&session)).unwrap();

        assert_eq!(vm.position_label, "1/2");
        assert_eq!(vm.progress_percent, 0);
        assert_eq!(vm.kind_label, "Antonym");
        assert_eq!(vm.word, "hot");
        assert_eq!(vm.options.len(), 4);
        assert_eq!(
            vm.options.iter().map(|o| o.number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(vm.options.iter().all(|o| o.state == OptionState::Idle));
        assert!(vm.feedback.is_none());
    }

    #[test]
    fn wrong_choice_marks_correct_wrong_and_dims_the_rest() {
        let session = playing();
        let mut state = interaction(&session);
        state.select("D", session.current_question().unwrap()).unwrap();

        let vm = map_question(&session, &state).unwrap();
        for option in &vm.options {
            let expected = match option.label.as_str() {
                "B" => OptionState::Correct,
                "D" => OptionState::Wrong,
                _ => OptionState::Dimmed,
            };
            assert_eq!(option.state, expected, "option {}", option.label);
        }

        let feedback = vm.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_answer.as_deref(), Some("B"));
        assert_eq!(feedback.explanation.as_deref(), Some("Cold is the opposite."));
    }

    #[test]
    fn right_choice_hides_the_correct_answer_line() {
        let session = playing();
        let mut state = interaction(&session);
        state.select("B", session.current_question().unwrap()).unwrap();

        let vm = map_question(&session, &state).unwrap();
        assert!(!vm.options.iter().any(|o| o.state == OptionState::Wrong));
        let feedback = vm.feedback.unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.correct_answer, None);
    }

    #[test]
    fn progress_tracks_answered_questions() {
        let mut session = playing();
        let ticket = session.answer_ticket().unwrap();
        session
            .apply(SessionEvent::Answered {
                ticket,
                correct: true,
            })
            .unwrap();

        let vm = map_question(&session, &interaction(&session)).unwrap();
        assert_eq!(vm.position_label, "2/2");
        assert_eq!(vm.progress_percent, 50);
        assert_eq!(vm.score, 1);
        assert_eq!(vm.word, "up");
    }
}
