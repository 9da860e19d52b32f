use serde::{Deserialize, Serialize};

use crate::model::{QuestionId, QuestionKind};
use crate::session::{Session, SessionStatus};

/// Result tier shown on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

impl Verdict {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Verdict::Perfect,
            80..=99 => Verdict::Excellent,
            50..=79 => Verdict::Good,
            _ => Verdict::KeepPracticing,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Outstanding! Your command of the language is superb.",
            Verdict::Excellent => "Excellent! You have a rich vocabulary.",
            Verdict::Good => "Good! Keep learning.",
            Verdict::KeepPracticing => "Try again to grow your vocabulary.",
        }
    }
}

/// One answered question on the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub id: QuestionId,
    pub word: String,
    pub kind: QuestionKind,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub answered_correctly: bool,
}

/// Aggregate result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total: usize,
    percentage: u32,
    verdict: Verdict,
    review: Vec<ReviewItem>,
}

impl QuizSummary {
    /// Build the summary of a finished session. `None` for any other status.
    #[must_use]
    pub fn from_session(session: &Session) -> Option<Self> {
        if session.status() != SessionStatus::Finished {
            return None;
        }
        let total = session.total();
        let score = session.score();
        let percentage = rounded_percentage(score, total);

        let review = session
            .questions()
            .iter()
            .zip(session.answers())
            .map(|(question, answered_correctly)| ReviewItem {
                id: question.id(),
                word: question.word().to_string(),
                kind: question.kind(),
                correct_answer: question.correct_answer().to_string(),
                explanation: question.explanation().map(str::to_string),
                answered_correctly: *answered_correctly,
            })
            .collect();

        Some(Self {
            score,
            total,
            percentage,
            verdict: Verdict::from_percentage(percentage),
            review,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn review(&self) -> &[ReviewItem] {
        &self.review
    }
}

/// `score / total` as a percentage, rounded half up.
fn rounded_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (score.saturating_mul(200) + total) / (total * 2);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionDraft, QuizMode};
    use crate::session::SessionEvent;

    fn finished(answers: &[bool]) -> Session {
        let questions = (0..answers.len())
            .map(|i| {
                QuestionDraft {
                    word: format!("w{i}"),
                    kind: QuestionKind::Antonym,
                    question_text: "?".into(),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    correct_answer: "a".into(),
                    explanation: Some("because".into()),
                }
                .validate()
                .unwrap()
            })
            .collect();

        let mut session = Session::new();
        session
            .apply(SessionEvent::StartRequested {
                mode: QuizMode::Antonyms,
                count: answers.len(),
            })
            .unwrap();
        session
            .apply(SessionEvent::QuestionsLoaded { run: 1, questions })
            .unwrap();
        for correct in answers {
            let ticket = session.answer_ticket().unwrap();
            session
                .apply(SessionEvent::Answered {
                    ticket,
                    correct: *correct,
                })
                .unwrap();
        }
        session
    }

    #[test]
    fn summary_only_exists_when_finished() {
        assert!(Session::new().summary().is_none());
    }

    #[test]
    fn summary_counts_and_reviews_every_question() {
        let session = finished(&[true, false, true]);
        let summary = session.summary().unwrap();

        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.percentage(), 67);
        assert_eq!(summary.verdict(), Verdict::Good);
        assert_eq!(summary.review().len(), 3);
        assert!(summary.review()[0].answered_correctly);
        assert!(!summary.review()[1].answered_correctly);
        assert_eq!(summary.review()[2].explanation.as_deref(), Some("because"));
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_percentage(100), Verdict::Perfect);
        assert_eq!(Verdict::from_percentage(80), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(79), Verdict::Good);
        assert_eq!(Verdict::from_percentage(50), Verdict::Good);
        assert_eq!(Verdict::from_percentage(49), Verdict::KeepPracticing);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(5, 5), 100);
        assert_eq!(rounded_percentage(0, 0), 0);
    }
}
