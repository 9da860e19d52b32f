use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use quiz_core::GenerationError;
use quiz_core::model::{Question, QuestionDraft, QuestionKind, QuizMode};

use crate::source::QuestionSource;

/// In-memory question source for offline play and tests.
///
/// Each fetch draws a random selection of questions the mode accepts.
pub struct QuestionBank {
    questions: Vec<Question>,
    rng: Mutex<StdRng>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, StdRng::from_rng(&mut rand::rng()))
    }

    #[must_use]
    pub fn with_rng(questions: Vec<Question>, rng: StdRng) -> Self {
        Self {
            questions,
            rng: Mutex::new(rng),
        }
    }

    /// Built-in English vocabulary bank.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_questions())
    }
}

#[async_trait]
impl QuestionSource for QuestionBank {
    async fn fetch(&self, mode: QuizMode, count: usize) -> Result<Vec<Question>, GenerationError> {
        let mut pool: Vec<Question> = self
            .questions
            .iter()
            .filter(|question| mode.accepts(question.kind()))
            .cloned()
            .collect();

        if pool.len() < count {
            tracing::warn!(available = pool.len(), count, %mode, "question bank too small");
            return Err(GenerationError::new(format!(
                "The offline bank has only {} questions for {mode} mode.",
                pool.len()
            )));
        }

        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            pool.shuffle(&mut *rng);
        }
        pool.truncate(count);
        Ok(pool)
    }
}

fn draft(
    word: &str,
    kind: QuestionKind,
    options: [&str; 4],
    correct: &str,
    explanation: &str,
) -> QuestionDraft {
    let question_text = match kind {
        QuestionKind::Synonym => format!("Which word is closest in meaning to \"{word}\"?"),
        QuestionKind::Antonym => format!("Which word is the opposite of \"{word}\"?"),
    };
    QuestionDraft {
        word: word.to_string(),
        kind,
        question_text,
        options: options.iter().map(|o| (*o).to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: Some(explanation.to_string()),
    }
}

/// Questions backing [`QuestionBank::sample`].
#[must_use]
pub fn sample_questions() -> Vec<Question> {
    use QuestionKind::{Antonym, Synonym};

    [
        draft(
            "candid",
            Synonym,
            ["frank", "secretive", "hasty", "gloomy"],
            "frank",
            "A candid remark is open and honest.",
        ),
        draft(
            "diligent",
            Synonym,
            ["industrious", "careless", "idle", "fragile"],
            "industrious",
            "Both describe steady, hard-working effort.",
        ),
        draft(
            "ephemeral",
            Synonym,
            ["fleeting", "eternal", "massive", "ancient"],
            "fleeting",
            "Ephemeral things last a very short time.",
        ),
        draft(
            "lucid",
            Synonym,
            ["clear", "murky", "heavy", "sleepy"],
            "clear",
            "A lucid explanation is easy to understand.",
        ),
        draft(
            "tenacious",
            Synonym,
            ["persistent", "feeble", "reluctant", "timid"],
            "persistent",
            "A tenacious person keeps going despite difficulty.",
        ),
        draft(
            "benevolent",
            Synonym,
            ["kind", "cruel", "greedy", "bitter"],
            "kind",
            "Benevolent means well-meaning and kindly.",
        ),
        draft(
            "generous",
            Antonym,
            ["stingy", "giving", "lavish", "charitable"],
            "stingy",
            "A stingy person is unwilling to give or spend.",
        ),
        draft(
            "ancient",
            Antonym,
            ["modern", "old", "antique", "aged"],
            "modern",
            "Modern describes the present, ancient the distant past.",
        ),
        draft(
            "scarce",
            Antonym,
            ["plentiful", "rare", "limited", "sparse"],
            "plentiful",
            "Scarce means in short supply; plentiful means abundant.",
        ),
        draft(
            "humble",
            Antonym,
            ["arrogant", "modest", "meek", "shy"],
            "arrogant",
            "An arrogant person has an exaggerated sense of importance.",
        ),
        draft(
            "conceal",
            Antonym,
            ["reveal", "hide", "cover", "mask"],
            "reveal",
            "To reveal is to make known what was hidden.",
        ),
        draft(
            "vivid",
            Antonym,
            ["dull", "bright", "striking", "intense"],
            "dull",
            "Vivid colors are intense; dull ones lack brightness.",
        ),
    ]
    .into_iter()
    .filter_map(|d| d.validate().ok())
    .collect()
}
