//! The `vocabdrill study` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use vocabdrill_core::book::ALL_CATEGORY;

pub fn execute(vocabulary: &[PathBuf], category: Option<String>, format: String) -> Result<()> {
    let book = super::load_book(vocabulary)?;
    let name = category.as_deref().unwrap_or(ALL_CATEGORY);
    let category = book.select_category(name)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(category.as_ref())?);
        }
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Polish", "English"]);
            for entry in category.entries() {
                table.add_row(vec![Cell::new(entry.source()), Cell::new(entry.target())]);
            }

            let title = if category.name() == ALL_CATEGORY {
                "All vocabulary".to_string()
            } else {
                category.title()
            };
            println!("Studying {title} ({} words)\n", category.len());
            println!("{table}");
        }
    }

    Ok(())
}
