//! The `vocabdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(files: Vec<PathBuf>) -> Result<()> {
    let mut total_warnings = 0;

    for path in &files {
        let file = vocabdrill_core::loader::parse_vocabulary_file(path)?;
        println!(
            "Vocabulary file: {} ({} categories, {} entries)",
            path.display(),
            file.categories.len(),
            file.total_entries()
        );

        for w in &file.warnings {
            let prefix = w
                .category
                .as_ref()
                .map(|name| format!("  [{name}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += file.warnings.len();
    }

    if total_warnings == 0 {
        println!("All vocabulary files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
