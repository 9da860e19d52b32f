use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generated Question
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Creates a fresh random `QuestionId`
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_differ() {
        assert_ne!(QuestionId::random(), QuestionId::random());
    }

    #[test]
    fn display_is_the_bare_uuid() {
        let id = QuestionId::random();
        let text = id.to_string();
        assert!(Uuid::parse_str(&text).is_ok());
        assert_eq!(format!("{id:?}"), format!("QuestionId({text})"));
    }
}
