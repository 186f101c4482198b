//! vocabdrill CLI — the interactive vocabulary trainer.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "vocabdrill",
    version,
    about = "Interactive Polish vocabulary trainer"
)]
struct Cli {
    /// Extra vocabulary TOML file (repeatable)
    #[arg(long, global = true)]
    vocabulary: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice translating words (the default)
    Drill {
        /// Start with this category instead of the menu
        #[arg(long)]
        category: Option<String>,

        /// Stop after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,

        /// Seed for a reproducible word order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show random words and reveal their meaning on Enter
    Flashcards {
        /// Category name or menu number (default: ask)
        category: Option<String>,

        /// Stop after this many cards
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,

        /// Seed for a reproducible word order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the words of a category, or all of them
    Study {
        /// Category name or menu number (default: all)
        category: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List available categories
    Categories {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate vocabulary TOML files
    Validate {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocabdrill=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::drill::execute(&cli.vocabulary, None, None, None),
        Some(Commands::Drill {
            category,
            rounds,
            seed,
        }) => commands::drill::execute(&cli.vocabulary, category, rounds, seed),
        Some(Commands::Flashcards {
            category,
            rounds,
            seed,
        }) => commands::flashcards::execute(&cli.vocabulary, category, rounds, seed),
        Some(Commands::Study { category, format }) => {
            commands::study::execute(&cli.vocabulary, category, format)
        }
        Some(Commands::Categories { format }) => {
            commands::categories::execute(&cli.vocabulary, format)
        }
        Some(Commands::Validate { files }) => commands::validate::execute(files),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
