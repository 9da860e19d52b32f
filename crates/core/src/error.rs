use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when question generation fails for any reason.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate questions. Please try again.";

/// A question source could not produce a usable question list.
///
/// The message is meant for the user and is shown verbatim on the error screen.
/// Network, parse and validation failures all collapse into this one kind.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Default for GenerationError {
    fn default() -> Self {
        Self::new(GENERATION_FAILED_MESSAGE)
    }
}
