use chrono::{DateTime, Utc};
use quiz_core::time::format_elapsed;
use quiz_core::{QuizSummary, ReviewItem, Verdict};

use crate::vm::question_vm::kind_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub word: String,
    pub kind_label: &'static str,
    pub correct_answer: String,
    pub answered_correctly: bool,
}

impl From<&ReviewItem> for ReviewRowVm {
    fn from(item: &ReviewItem) -> Self {
        Self {
            word: item.word.clone(),
            kind_label: kind_label(item.kind),
            correct_answer: item.correct_answer.clone(),
            answered_correctly: item.answered_correctly,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: usize,
    pub total: usize,
    pub percentage_label: String,
    pub verdict: Verdict,
    pub message: &'static str,
    pub elapsed_label: Option<String>,
    pub review: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_result(
    summary: &QuizSummary,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
) -> ResultVm {
    let elapsed_label = match (started_at, completed_at) {
        (Some(started), Some(completed)) => Some(format_elapsed(started, completed)),
        _ => None,
    };

    ResultVm {
        score: summary.score(),
        total: summary.total(),
        percentage_label: format!("{}%", summary.percentage()),
        verdict: summary.verdict(),
        message: summary.verdict().message(),
        elapsed_label,
        review: summary.review().iter().map(ReviewRowVm::from).collect(),
    }
}
