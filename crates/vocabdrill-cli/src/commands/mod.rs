pub mod categories;
pub mod drill;
pub mod flashcards;
pub mod study;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use vocabdrill_core::book::VocabularyBook;
use vocabdrill_core::loader::load_vocabulary_files;

/// Built-in vocabulary plus any `--vocabulary` files, in the order given.
pub fn load_book(extra: &[PathBuf]) -> Result<VocabularyBook> {
    let mut book = VocabularyBook::builtin();
    if !extra.is_empty() {
        let categories = load_vocabulary_files(extra)?;
        book.merge(categories);
    }
    Ok(book)
}
