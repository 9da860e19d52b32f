use quiz_core::model::QuizMode;

use crate::vm::screen_vm::ScreenVm;

/// What a line of user input asks for on the current screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start(QuizMode),
    Choose(String),
    Restart,
    ToggleMute,
    Quit,
}

/// Interpret `input` against `screen`.
///
/// Options are chosen by their 1-based number in display order. `q` quits and `m`
/// toggles sound on every screen. Returns `None` for input that means nothing on
/// this screen.
#[must_use]
pub fn parse_intent(input: &str, screen: &ScreenVm) -> Option<QuizIntent> {
    let input = input.trim();
    if matches!(input, "q" | "quit" | "exit") {
        return Some(QuizIntent::Quit);
    }
    if input == "m" {
        return Some(QuizIntent::ToggleMute);
    }

    match screen {
        ScreenVm::Start if input.is_empty() => Some(QuizIntent::Start(QuizMode::default())),
        ScreenVm::Start => input.parse().ok().map(QuizIntent::Start),
        ScreenVm::Loading => None,
        ScreenVm::Playing(question) => {
            if input == "r" {
                return Some(QuizIntent::Restart);
            }
            let number: usize = input.parse().ok()?;
            question
                .options
                .iter()
                .find(|option| option.number == number)
                .map(|option| QuizIntent::Choose(option.label.clone()))
        }
        ScreenVm::Error { .. } | ScreenVm::Finished(_) => {
            matches!(input, "" | "r").then_some(QuizIntent::Restart)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::question_vm::{OptionState, OptionVm, QuestionVm};

    fn playing() -> ScreenVm {
        ScreenVm::Playing(QuestionVm {
            position_label: "1/5".into(),
            score: 0,
            progress_percent: 0,
            kind_label: "Synonym",
            word: "candid".into(),
            prompt: "Closest to candid?".into(),
            options: ["gloomy", "frank", "hasty", "secretive"]
                .iter()
                .enumerate()
                .map(|(idx, label)| OptionVm {
                    number: idx + 1,
                    label: (*label).to_string(),
                    state: OptionState::Idle,
                })
                .collect(),
            feedback: None,
        })
    }

    #[test]
    fn start_screen_takes_a_mode_or_defaults_to_mixed() {
        assert_eq!(
            parse_intent("", &ScreenVm::Start),
            Some(QuizIntent::Start(QuizMode::Mixed))
        );
        assert_eq!(
            parse_intent(" antonyms ", &ScreenVm::Start),
            Some(QuizIntent::Start(QuizMode::Antonyms))
        );
        assert_eq!(parse_intent("later", &ScreenVm::Start), None);
    }

    #[test]
    fn numbers_pick_options_in_display_order() {
        let screen = playing();
        assert_eq!(
            parse_intent("2", &screen),
            Some(QuizIntent::Choose("frank".into()))
        );
        assert_eq!(parse_intent("0", &screen), None);
        assert_eq!(parse_intent("5", &screen), None);
        assert_eq!(parse_intent("r", &screen), Some(QuizIntent::Restart));
    }

    #[test]
    fn loading_ignores_everything_but_quit() {
        assert_eq!(parse_intent("1", &ScreenVm::Loading), None);
        assert_eq!(parse_intent("", &ScreenVm::Loading), None);
        assert_eq!(parse_intent("q", &ScreenVm::Loading), Some(QuizIntent::Quit));
    }

    #[test]
    fn m_toggles_sound_on_every_screen() {
        for screen in [
            ScreenVm::Start,
            ScreenVm::Loading,
            playing(),
            ScreenVm::Error {
                message: "boom".into(),
            },
        ] {
            assert_eq!(parse_intent(" m ", &screen), Some(QuizIntent::ToggleMute));
        }
        assert_eq!(
            parse_intent("mixed", &ScreenVm::Start),
            Some(QuizIntent::Start(QuizMode::Mixed))
        );
    }

    #[test]
    fn error_screen_restarts_on_enter() {
        let screen = ScreenVm::Error {
            message: "boom".into(),
        };
        assert_eq!(parse_intent("", &screen), Some(QuizIntent::Restart));
        assert_eq!(parse_intent("1", &screen), None);
    }
}
