#![forbid(unsafe_code)]

pub mod bank;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod source;

pub use quiz_core::Clock;

pub use bank::QuestionBank;
pub use config::{GeneratorConfig, QuizConfig};
pub use controller::{QuizController, QuizControllerBuilder, QuizSnapshot};
pub use error::{ConfigError, GeneratorError};
pub use feedback::{FeedbackSink, NoFeedback};
pub use generator::ChatQuestionSource;
pub use source::QuestionSource;
