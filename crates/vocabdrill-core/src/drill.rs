//! Pure drill rules: drawing a word and checking an answer.
//!
//! Nothing here touches the console or the session counters, so the rules can
//! be tested in isolation from the interactive loop.

use rand::Rng;

use crate::error::DrillError;
use crate::model::{Category, VocabularyEntry};

/// Pick an entry uniformly at random. Draws are independent, so repeats are
/// possible.
pub fn draw_word<'a, R: Rng>(
    category: &'a Category,
    rng: &mut R,
) -> Result<&'a VocabularyEntry, DrillError> {
    if category.is_empty() {
        return Err(DrillError::EmptyCategory(category.name().to_string()));
    }
    let index = rng.random_range(0..category.len());
    Ok(&category.entries()[index])
}

/// Lowercased, trimmed form used for comparisons.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Exact match against the target term, ignoring case and surrounding
/// whitespace.
pub fn check_answer(entry: &VocabularyEntry, answer: &str) -> bool {
    normalize(answer) == normalize(entry.target())
}

/// Like [`check_answer`] but reports a blank answer as [`DrillError::EmptyInput`].
pub fn grade_answer(entry: &VocabularyEntry, answer: &str) -> Result<bool, DrillError> {
    if answer.trim().is_empty() {
        return Err(DrillError::EmptyInput);
    }
    Ok(check_answer(entry, answer))
}
