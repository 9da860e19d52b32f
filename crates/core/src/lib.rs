#![forbid(unsafe_code)]

pub mod error;
pub mod interaction;
pub mod model;
pub mod session;
pub mod summary;
pub mod time;

pub use error::{GENERATION_FAILED_MESSAGE, GenerationError};
pub use interaction::{InteractionState, Selection};
pub use summary::{QuizSummary, ReviewItem, Verdict};
pub use time::Clock;
