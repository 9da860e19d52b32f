mod intent;
mod question_vm;
mod result_vm;
mod screen_vm;

pub use intent::{QuizIntent, parse_intent};
pub use question_vm::{FeedbackVm, OptionState, OptionVm, QuestionVm, kind_label, map_question};
pub use result_vm::{ResultVm, ReviewRowVm, map_result};
pub use screen_vm::{ScreenVm, map_screen};
