//! The `vocabdrill drill` command (also what runs with no subcommand).

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
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let report = trainer.run(&mut input, &mut output)?;

    tracing::debug!(
        category = report.category.as_deref().unwrap_or("-"),
        attempted = report.state.attempted(),
        correct = report.state.correct(),
        ended_by = ?report.ended_by,
        "drill finished"
    );

    Ok(())
}
