//! The `vocabdrill flashcards` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use vocabdrill_core::trainer::{Trainer, TrainerConfig};

pub fn execute(
    vocabulary: &[PathBuf],
    category: Option<String>,
    rounds: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let book = super::load_book(vocabulary)?;
    let config = TrainerConfig {
        rounds,
        category,
        seed,
    };

    let mut trainer = Trainer::new(book, config);
    let report = trainer.run_flashcards(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    tracing::debug!(
        category = report.category.as_deref().unwrap_or("-"),
        shown = report.shown,
        ended_by = ?report.ended_by,
        "flashcards finished"
    );

    Ok(())
}
