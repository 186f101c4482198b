//! Drill error types.
//!
//! Every variant is recoverable inside the interactive loop: the trainer turns
//! it into a line of feedback and keeps going.

use thiserror::Error;

/// Errors raised while selecting a category or scoring an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// The typed category is not in the vocabulary book.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The user submitted a blank line as an answer.
    #[error("empty answer")]
    EmptyInput,

    /// The category exists but holds no entries to draw from.
    #[error("category has no entries: {0}")]
    EmptyCategory(String),
}

impl DrillError {
    /// Plain English feedback shown to the user instead of the raw error.
    pub fn feedback(&self) -> String {
        match self {
            DrillError::UnknownCategory(name) => {
                format!("Unknown category '{name}'. Please pick one from the list.")
            }
            DrillError::EmptyInput => "No answer given.".to_string(),
            DrillError::EmptyCategory(name) => {
                format!("The '{name}' category has no words yet. Please pick another.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_is_plain_english() {
        let err = DrillError::UnknownCategory("animals".into());
        assert_eq!(err.to_string(), "unknown category: animals");
        assert!(err.feedback().contains("'animals'"));
        assert_eq!(DrillError::EmptyInput.feedback(), "No answer given.");
    }
}
