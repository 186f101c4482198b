//! TOML vocabulary file loader.
//!
//! Extra vocabulary can be supplied as TOML files that add entries to new or
//! existing categories:
//!
//! ```toml
//! [[category]]
//! name = "travel"
//! entries = [
//!     { source = "pociąg", target = "train" },
//!     { source = "bilet", target = "ticket|fare" },
//! ]
//! ```
//!
//! A target may list alternatives separated by `|`; only the first one is
//! kept. Rows that end up with a blank term are skipped with a warning.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::book::ALL_CATEGORY;
use crate::model::{Category, VocabularyEntry};
use crate::trainer::QUIT_WORDS;

#[derive(Debug, Deserialize)]
struct TomlVocabularyFile {
    #[serde(default, rename = "category")]
    categories: Vec<TomlCategory>,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    #[serde(default)]
    name: String,
    #[serde(default)]
    entries: Vec<TomlEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlEntry {
    #[serde(default)]
    source: String,
    #[serde(default)]
    target: String,
}

/// A warning raised while reading a vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Category the warning refers to, if any.
    pub category: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(category: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            category: category.map(str::to_string),
            message: message.into(),
        }
    }
}

/// The usable categories of a vocabulary file plus everything that was skipped.
#[derive(Debug, Clone, Default)]
pub struct VocabularyFile {
    pub categories: Vec<Category>,
    pub warnings: Vec<ValidationWarning>,
}

impl VocabularyFile {
    pub fn total_entries(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}

/// Parse a single vocabulary file.
pub fn parse_vocabulary_file(path: &Path) -> Result<VocabularyFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;

    parse_vocabulary_str(&content, path)
}

/// Parse vocabulary TOML from a string (useful for testing).
pub fn parse_vocabulary_str(content: &str, source_path: &Path) -> Result<VocabularyFile> {
    let parsed: TomlVocabularyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut file = VocabularyFile::default();

    if parsed.categories.is_empty() {
        file.warnings
            .push(ValidationWarning::new(None, "file defines no categories"));
    }

    for raw in parsed.categories {
        let name = raw.name.trim();
        if name.is_empty() {
            file.warnings
                .push(ValidationWarning::new(None, "category without a name skipped"));
            continue;
        }
        if let Some(reason) = unselectable_name(name) {
            file.warnings.push(ValidationWarning::new(
                Some(name),
                format!("'{name}' {reason}, category skipped"),
            ));
            continue;
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (index, row) in raw.entries.into_iter().enumerate() {
            let target = row.target.split('|').next().unwrap_or_default();
            let Some(entry) = VocabularyEntry::new(row.source, target) else {
                file.warnings.push(ValidationWarning::new(
                    Some(name),
                    format!("entry {} has an empty term, skipped", index + 1),
                ));
                continue;
            };
            if !seen.insert(entry.source().to_string()) {
                file.warnings.push(ValidationWarning::new(
                    Some(name),
                    format!("duplicate source '{}', later entry wins", entry.source()),
                ));
                entries.retain(|e: &VocabularyEntry| e.source() != entry.source());
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            file.warnings.push(ValidationWarning::new(
                Some(name),
                "category has no usable entries, skipped",
            ));
            continue;
        }
        file.categories.push(Category::new(name, entries));
    }

    Ok(file)
}

/// Load every file in order. Unreadable or malformed files are errors;
/// per-row problems are logged and skipped.
pub fn load_vocabulary_files(paths: &[PathBuf]) -> Result<Vec<Category>> {
    let mut categories = Vec::new();

    for path in paths {
        let file = parse_vocabulary_file(path)?;
        for w in &file.warnings {
            tracing::warn!(
                file = %path.display(),
                category = w.category.as_deref().unwrap_or("-"),
                "{}",
                w.message
            );
        }
        tracing::info!(
            file = %path.display(),
            categories = file.categories.len(),
            entries = file.total_entries(),
            "loaded vocabulary file"
        );
        categories.extend(file.categories);
    }

    Ok(categories)
}

/// Names the category prompt would never resolve to the category itself.
fn unselectable_name(name: &str) -> Option<&'static str> {
    if name.eq_ignore_ascii_case(ALL_CATEGORY)
        || QUIT_WORDS.iter().any(|w| name.eq_ignore_ascii_case(w))
    {
        Some("is reserved")
    } else if name.parse::<u64>().is_ok() {
        Some("is read as a menu number")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOML: &str = r#"
[[category]]
name = "travel"
entries = [
    { source = "pociąg", target = "train" },
    { source = "bilet", target = "ticket|fare" },
]

[[category]]
name = "family"
entries = [
    { source = "wujek", target = "uncle" },
]
"#;

    #[test]
    fn parse_valid_toml() {
        let file = parse_vocabulary_str(VALID_TOML, &PathBuf::from("extra.toml")).unwrap();
        assert!(file.warnings.is_empty());
        assert_eq!(file.categories.len(), 2);
        assert_eq!(file.categories[0].name(), "travel");
        assert_eq!(file.total_entries(), 3);
    }

    #[test]
    fn alternatives_keep_first_translation() {
        let file = parse_vocabulary_str(VALID_TOML, &PathBuf::from("extra.toml")).unwrap();
        let bilet = &file.categories[0].entries()[1];
        assert_eq!(bilet.source(), "bilet");
        assert_eq!(bilet.target(), "ticket");
    }

    #[test]
    fn blank_rows_are_skipped_with_warning() {
        let toml = r#"
[[category]]
name = "travel"
entries = [
    { source = "", target = "train" },
    { source = "bilet" },
    { source = "mapa", target = " |map" },
    { source = "lotnisko", target = "airport" },
]
"#;
        let file = parse_vocabulary_str(toml, &PathBuf::from("t.toml")).unwrap();
        assert_eq!(file.total_entries(), 1);
        assert_eq!(file.warnings.len(), 3);
        assert!(file
            .warnings
            .iter()
            .all(|w| w.category.as_deref() == Some("travel")));
    }

    #[test]
    fn duplicate_sources_keep_last() {
        let toml = r#"
[[category]]
name = "family"
entries = [
    { source = "mama", target = "mother" },
    { source = "mama", target = "mom" },
]
"#;
        let file = parse_vocabulary_str(toml, &PathBuf::from("t.toml")).unwrap();
        assert_eq!(file.total_entries(), 1);
        assert_eq!(file.categories[0].entries()[0].target(), "mom");
        assert!(file.warnings[0].message.contains("duplicate"));
    }

    #[test]
    fn reserved_and_empty_categories_skipped() {
        let toml = r#"
[[category]]
name = "All"
entries = [{ source = "kot", target = "cat" }]

[[category]]
name = "empty"

[[category]]
entries = [{ source = "pies", target = "dog" }]
"#;
        let file = parse_vocabulary_str(toml, &PathBuf::from("t.toml")).unwrap();
        assert!(file.categories.is_empty());
        assert_eq!(file.warnings.len(), 3);
        assert!(file.warnings[0].message.contains("reserved"));
    }

    #[test]
    fn quit_words_and_numbers_not_category_names() {
        let toml = r#"
[[category]]
name = "Quit"
entries = [{ source = "kot", target = "cat" }]

[[category]]
name = "exit"
entries = [{ source = "pies", target = "dog" }]

[[category]]
name = "12"
entries = [{ source = "dom", target = "house" }]

[[category]]
name = "2nd"
entries = [{ source = "drugi", target = "second" }]
"#;
        let file = parse_vocabulary_str(toml, &PathBuf::from("t.toml")).unwrap();
        assert_eq!(file.categories.len(), 1);
        assert_eq!(file.categories[0].name(), "2nd");
        assert_eq!(file.warnings.len(), 3);
        assert_eq!(file.warnings[0].message, "'Quit' is reserved, category skipped");
        assert_eq!(file.warnings[1].category.as_deref(), Some("exit"));
        assert_eq!(
            file.warnings[2].message,
            "'12' is read as a menu number, category skipped"
        );
    }

    #[test]
    fn empty_file_warns() {
        let file = parse_vocabulary_str("", &PathBuf::from("t.toml")).unwrap();
        assert!(file.categories.is_empty());
        assert_eq!(file.warnings[0].message, "file defines no categories");
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_vocabulary_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let categories = load_vocabulary_files(&[path]).unwrap();
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_vocabulary_files(&[PathBuf::from("does-not-exist.toml")]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read vocabulary file"));
    }
}
