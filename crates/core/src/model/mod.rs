mod ids;
mod mode;
mod question;

pub use ids::QuestionId;
pub use mode::{ParseModeError, QuizMode};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError, QuestionKind};
