//! The interactive trainer loop.
//!
//! The trainer owns the vocabulary book and walks one session through
//! `Idle -> CategorySelected -> AwaitingAnswer -> Feedback -> ... ->
//! SessionSummary`. Input and output are generic so the whole loop can be
//! driven from memory in tests.

use std::borrow::Cow;
use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::book::VocabularyBook;
use crate::drill::{draw_word, normalize};
use crate::model::Category;
use crate::session::{run_round, summarize, SessionState};

/// Words that end the session at any prompt.
pub const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Session options, usually filled from the command line.
#[derive(Debug, Clone, Default)]
pub struct TrainerConfig {
    /// Stop after this many rounds. `None` drills until the user quits.
    pub rounds: Option<u32>,
    /// Category to start with instead of showing the prompt.
    pub category: Option<String>,
    /// Seed for reproducible word order.
    pub seed: Option<u64>,
}

/// Where the trainer is in the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    CategorySelected,
    AwaitingAnswer,
    Feedback,
    SessionSummary,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    RoundsExhausted,
    EndOfInput,
}

/// Result of one finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Category drilled, `None` if the session ended before one was chosen.
    pub category: Option<String>,
    pub state: SessionState,
    pub ended_by: EndReason,
}

/// Result of one flashcard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardReport {
    pub category: Option<String>,
    /// Cards whose meaning was revealed.
    pub shown: u32,
    pub ended_by: EndReason,
}

enum Selection<'b> {
    Chosen(Cow<'b, Category>),
    Ended(EndReason),
}

/// Owns the vocabulary and runs practice sessions.
pub struct Trainer<R: Rng = StdRng> {
    book: VocabularyBook,
    config: TrainerConfig,
    rng: R,
    phase: Phase,
}

impl Trainer<StdRng> {
    /// Create a trainer seeded from `config.seed`, or from the OS when unset.
    pub fn new(book: VocabularyBook, config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(book, config, rng)
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(book: VocabularyBook, config: TrainerConfig, rng: R) -> Self {
        Self {
            book,
            config,
            rng,
            phase: Phase::Idle,
        }
    }

    pub fn book(&self) -> &VocabularyBook {
        &self.book
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run one full session: welcome menu, category choice, rounds, summary.
    ///
    /// A broken input stream ends the session like `quit` does. Only failures
    /// to write to `output` are returned as errors.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<SessionReport> {
        self.phase = Phase::Idle;
        let mut state = SessionState::new();

        write!(output, "{}", render_welcome(&self.book))?;

        let selection =
            prompt_category(&self.book, self.config.category.as_deref(), input, output)?;
        let category = match selection {
            Selection::Chosen(category) => category,
            Selection::Ended(reason) => {
                self.phase = Phase::SessionSummary;
                write_summary(output, &state)?;
                return Ok(SessionReport {
                    category: None,
                    state,
                    ended_by: reason,
                });
            }
        };

        self.phase = Phase::CategorySelected;
        tracing::info!(
            category = category.name(),
            words = category.len(),
            rounds = ?self.config.rounds,
            "session started"
        );
        writeln!(
            output,
            "\n{} ({} words). Type the English translation, or 'quit' to stop.",
            category.title(),
            category.len()
        )?;

        let mut round = 0_u32;
        let ended_by = loop {
            if self.config.rounds.is_some_and(|limit| round >= limit) {
                break EndReason::RoundsExhausted;
            }
            let entry = draw_word(&category, &mut self.rng)?;
            round += 1;

            self.phase = Phase::AwaitingAnswer;
            match self.config.rounds {
                Some(limit) => writeln!(output, "\nQuestion {round}/{limit}")?,
                None => writeln!(output, "\nRound {round}")?,
            }
            write!(output, "What does '{}' mean? ", entry.source())?;
            output.flush().context("failed to flush prompt")?;

            let Some(answer) = read_line(input) else {
                break EndReason::EndOfInput;
            };
            if is_quit(&answer) {
                break EndReason::Quit;
            }

            let feedback = run_round(&mut state, entry, &answer);
            self.phase = Phase::Feedback;
            writeln!(output, "{feedback}")?;
        };

        self.phase = Phase::SessionSummary;
        tracing::info!(
            attempted = state.attempted(),
            correct = state.correct(),
            ended_by = ?ended_by,
            "session finished"
        );
        write_summary(output, &state)?;

        Ok(SessionReport {
            category: Some(category.name().to_string()),
            state,
            ended_by,
        })
    }

    /// Flashcard practice: show a random word, reveal its meaning after the
    /// next line of input, repeat until `quit`. Nothing is scored.
    pub fn run_flashcards<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<FlashcardReport> {
        self.phase = Phase::Idle;
        write!(output, "{}", render_welcome(&self.book))?;

        let selection =
            prompt_category(&self.book, self.config.category.as_deref(), input, output)?;
        let category = match selection {
            Selection::Chosen(category) => category,
            Selection::Ended(reason) => {
                self.phase = Phase::SessionSummary;
                write_farewell(output, 0)?;
                return Ok(FlashcardReport {
                    category: None,
                    shown: 0,
                    ended_by: reason,
                });
            }
        };

        self.phase = Phase::CategorySelected;
        tracing::info!(category = category.name(), "flashcards started");
        writeln!(
            output,
            "\n{} flashcards. Press Enter to reveal each word, or type 'quit' to stop.",
            category.title()
        )?;

        let mut shown = 0_u32;
        let ended_by = loop {
            if self.config.rounds.is_some_and(|limit| shown >= limit) {
                break EndReason::RoundsExhausted;
            }
            let entry = draw_word(&category, &mut self.rng)?;

            self.phase = Phase::AwaitingAnswer;
            write!(output, "\nCard {}: {} ", shown + 1, entry.source())?;
            output.flush().context("failed to flush prompt")?;

            let Some(line) = read_line(input) else {
                break EndReason::EndOfInput;
            };
            if is_quit(&line) {
                break EndReason::Quit;
            }

            self.phase = Phase::Feedback;
            writeln!(output, "   → {}", entry.target())?;
            shown += 1;
        };

        self.phase = Phase::SessionSummary;
        tracing::info!(shown, ended_by = ?ended_by, "flashcards finished");
        write_farewell(output, shown)?;

        Ok(FlashcardReport {
            category: Some(category.name().to_string()),
            shown,
            ended_by,
        })
    }
}

/// Banner plus the numbered category menu.
pub fn render_welcome(book: &VocabularyBook) -> String {
    let rule = "=".repeat(50);
    let mut text = format!(
        "{rule}\nWITAJ! Welcome to vocabdrill, your Polish vocabulary trainer.\n{rule}\n\nCategories:\n"
    );
    for (i, category) in book.categories().iter().enumerate() {
        text.push_str(&format!(
            "  {}. {} ({} words)\n",
            i + 1,
            category.title(),
            category.len()
        ));
    }
    text.push_str(&format!(
        "  {}. All vocabulary ({} words)\n",
        book.categories().len() + 1,
        book.total_entries()
    ));
    text.push_str("\nType a category name or number, or 'quit' to exit.\n");
    text
}

fn prompt_category<'b, I: BufRead, O: Write>(
    book: &'b VocabularyBook,
    preselected: Option<&str>,
    input: &mut I,
    output: &mut O,
) -> Result<Selection<'b>> {
    if let Some(name) = preselected {
        match book.select_category(name) {
            Ok(category) => return Ok(Selection::Chosen(category)),
            Err(e) => writeln!(output, "{}", e.feedback())?,
        }
    }

    loop {
        write!(output, "\nChoose a category: ")?;
        output.flush().context("failed to flush prompt")?;

        let Some(line) = read_line(input) else {
            return Ok(Selection::Ended(EndReason::EndOfInput));
        };
        if is_quit(&line) {
            return Ok(Selection::Ended(EndReason::Quit));
        }
        match book.select_category(&line) {
            Ok(category) => return Ok(Selection::Chosen(category)),
            Err(e) => {
                tracing::debug!(input = %line.trim(), error = %e, "category rejected");
                writeln!(output, "{}", e.feedback())?;
            }
        }
    }
}

fn write_summary<O: Write>(output: &mut O, state: &SessionState) -> Result<()> {
    writeln!(output, "\n{}", "-".repeat(30))?;
    writeln!(output, "Session complete: {}", summarize(state))?;
    if let (Some(accuracy), Some(verdict)) = (state.accuracy(), state.verdict()) {
        writeln!(output, "Accuracy: {accuracy:.1}%")?;
        writeln!(output, "{verdict}")?;
    }
    writeln!(output, "\nDziękuję za naukę! (Thank you for learning!)")?;
    writeln!(output, "Do widzenia! (Goodbye!)")?;
    output.flush().context("failed to flush summary")?;
    Ok(())
}

fn write_farewell<O: Write>(output: &mut O, shown: u32) -> Result<()> {
    writeln!(output, "\n{}", "-".repeat(30))?;
    writeln!(output, "Flashcards shown: {shown}")?;
    writeln!(output, "\nDziękuję za naukę! (Thank you for learning!)")?;
    writeln!(output, "Do widzenia! (Goodbye!)")?;
    output.flush().context("failed to flush summary")?;
    Ok(())
}

/// Next line without its line ending, or `None` once input is exhausted or
/// the stream fails. Bytes that are not UTF-8 are replaced rather than
/// treated as a failure, so a mis-encoded answer is just a wrong answer.
fn read_line<I: BufRead>(input: &mut I) -> Option<String> {
    let mut buf = Vec::new();
    loop {
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {
                let mut line = String::from_utf8_lossy(&buf).into_owned();
                let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
                line.truncate(trimmed);
                return Some(line);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "input stream failed, ending session");
                return None;
            }
        }
    }
}

fn is_quit(line: &str) -> bool {
    let word = normalize(line);
    QUIT_WORDS.contains(&word.as_str())
}
