//! The vocabulary book: every category the trainer can drill.
//!
//! The book is assembled once at startup (built-in words plus any extra
//! vocabulary files) and handed to the [`crate::trainer::Trainer`], which never
//! mutates it afterwards.

use std::borrow::Cow;

use serde::Serialize;

use crate::builtin::BUILTIN_VOCABULARY;
use crate::error::DrillError;
use crate::model::{Category, VocabularyEntry};

/// Reserved name that selects every entry in the book.
pub const ALL_CATEGORY: &str = "all";

/// Mapping from category name to its ordered entries.
///
/// Categories keep insertion order so menus are stable between runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VocabularyBook {
    categories: Vec<Category>,
}

/// Counts reported after merging extra categories into a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub replaced: usize,
    pub new_categories: usize,
}

impl VocabularyBook {
    /// The fixed vocabulary shipped with the program.
    pub fn builtin() -> Self {
        let categories = BUILTIN_VOCABULARY
            .iter()
            .map(|(name, pairs)| {
                let entries = pairs
                    .iter()
                    .filter_map(|(source, target)| VocabularyEntry::new(*source, *target))
                    .collect();
                Category::new(*name, entries)
            })
            .collect();
        Self { categories }
    }

    /// Build a book from explicit categories. Same-named categories are merged.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let mut book = Self::default();
        book.merge(categories);
        book
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Category::is_empty)
    }

    /// Total number of entries across all categories.
    pub fn total_entries(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Case-insensitive lookup by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name().to_lowercase() == wanted)
    }

    /// Every entry in the book as a single category named [`ALL_CATEGORY`].
    pub fn all_entries(&self) -> Category {
        let entries = self
            .categories
            .iter()
            .flat_map(|c| c.entries().iter().cloned())
            .collect();
        Category::new(ALL_CATEGORY, entries)
    }

    /// Resolve what the user typed at the category prompt.
    ///
    /// Accepts a category name (any case), its 1-based menu number, `all`, or
    /// the menu number right after the last category (also "all").
    pub fn select_category(&self, input: &str) -> Result<Cow<'_, Category>, DrillError> {
        let choice = input.trim();

        let selected = if choice.eq_ignore_ascii_case(ALL_CATEGORY) {
            Cow::Owned(self.all_entries())
        } else if let Ok(number) = choice.parse::<usize>() {
            match number {
                n if (1..=self.categories.len()).contains(&n) => {
                    Cow::Borrowed(&self.categories[n - 1])
                }
                n if n == self.categories.len() + 1 => Cow::Owned(self.all_entries()),
                _ => return Err(DrillError::UnknownCategory(choice.to_string())),
            }
        } else {
            self.category(choice)
                .map(Cow::Borrowed)
                .ok_or_else(|| DrillError::UnknownCategory(choice.to_string()))?
        };

        if selected.is_empty() {
            return Err(DrillError::EmptyCategory(selected.name().to_string()));
        }
        Ok(selected)
    }

    /// Fold extra categories into the book.
    ///
    /// Entries join the existing category of the same name (case-insensitive);
    /// an entry whose source term already exists replaces the old one.
    pub fn merge(&mut self, extra: Vec<Category>) -> MergeStats {
        let mut stats = MergeStats::default();

        for category in extra {
            let wanted = category.name().to_lowercase();
            let index = match self
                .categories
                .iter()
                .position(|c| c.name().to_lowercase() == wanted)
            {
                Some(index) => index,
                None => {
                    self.categories.push(Category::new(category.name(), Vec::new()));
                    stats.new_categories += 1;
                    self.categories.len() - 1
                }
            };

            for entry in category.entries() {
                if self.categories[index].upsert(entry.clone()) {
                    stats.replaced += 1;
                } else {
                    stats.added += 1;
                }
            }
        }

        tracing::debug!(
            added = stats.added,
            replaced = stats.replaced,
            new_categories = stats.new_categories,
            "merged extra vocabulary"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, target: &str) -> VocabularyEntry {
        VocabularyEntry::new(source, target).unwrap()
    }

    #[test]
    fn builtin_has_all_categories() {
        let book = VocabularyBook::builtin();
        let names: Vec<&str> = book.categories().iter().map(Category::name).collect();
        assert_eq!(
            names,
            vec!["greetings", "family", "numbers", "colors", "food", "phrases"]
        );
        assert_eq!(book.total_entries(), 48);
        assert!(book.categories().iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn select_is_case_insensitive() {
        let book = VocabularyBook::builtin();
        let upper = book.select_category("GREETINGS").unwrap();
        let lower = book.select_category("greetings").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name(), "greetings");

        let padded = book.select_category("  Colors \n").unwrap();
        assert_eq!(padded.name(), "colors");
    }

    #[test]
    fn select_by_menu_number() {
        let book = VocabularyBook::builtin();
        assert_eq!(book.select_category("1").unwrap().name(), "greetings");
        assert_eq!(book.select_category("6").unwrap().name(), "phrases");

        let all = book.select_category("7").unwrap();
        assert_eq!(all.name(), ALL_CATEGORY);
        assert_eq!(all.len(), book.total_entries());

        assert!(matches!(
            book.select_category("0"),
            Err(DrillError::UnknownCategory(_))
        ));
        assert!(matches!(
            book.select_category("8"),
            Err(DrillError::UnknownCategory(_))
        ));
    }

    #[test]
    fn select_unknown_and_blank() {
        let book = VocabularyBook::builtin();
        assert_eq!(
            book.select_category("animals"),
            Err(DrillError::UnknownCategory("animals".into()))
        );
        assert_eq!(
            book.select_category("   "),
            Err(DrillError::UnknownCategory(String::new()))
        );
    }

    #[test]
    fn select_all_by_name() {
        let book = VocabularyBook::builtin();
        let all = book.select_category("ALL").unwrap();
        assert_eq!(all.len(), 48);
    }

    #[test]
    fn select_empty_category() {
        let book = VocabularyBook::from_categories(vec![Category::new("travel", vec![])]);
        assert_eq!(
            book.select_category("travel"),
            Err(DrillError::EmptyCategory("travel".into()))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn merge_extends_and_replaces() {
        let mut book = VocabularyBook::builtin();
        let stats = book.merge(vec![
            Category::new(
                "Family",
                vec![entry("wujek", "uncle"), entry("mama", "mother")],
            ),
            Category::new("travel", vec![entry("pociąg", "train")]),
        ]);

        assert_eq!(
            stats,
            MergeStats {
                added: 2,
                replaced: 1,
                new_categories: 1
            }
        );
        let family = book.category("family").unwrap();
        assert_eq!(family.len(), 9);
        assert!(family.contains(&entry("mama", "mother")));
        assert_eq!(book.categories().last().unwrap().name(), "travel");
    }
}
