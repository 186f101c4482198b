//! The `vocabdrill categories` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

#[derive(Serialize)]
struct CategoryListing<'a> {
    number: usize,
    name: &'a str,
    words: usize,
}

pub fn execute(vocabulary: &[PathBuf], format: String) -> Result<()> {
    let book = super::load_book(vocabulary)?;

    let listing: Vec<CategoryListing<'_>> = book
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryListing {
            number: i + 1,
            name: c.name(),
            words: c.len(),
        })
        .collect();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Category", "Words"]);
            for item in &listing {
                table.add_row(vec![
                    Cell::new(item.number),
                    Cell::new(item.name),
                    Cell::new(item.words),
                ]);
            }
            table.add_row(vec![
                Cell::new(listing.len() + 1),
                Cell::new("all"),
                Cell::new(book.total_entries()),
            ]);
            println!("{table}");
        }
    }

    Ok(())
}
