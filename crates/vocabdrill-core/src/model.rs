//! Core data model types for vocabdrill.
//!
//! A [`VocabularyEntry`] is one source/target pair, a [`Category`] is a named,
//! ordered list of entries. The book that owns the categories lives in
//! [`crate::book`].

use serde::Serialize;
use std::fmt;

/// One vocabulary pair: a term in the source language and its translation.
///
/// Both terms are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VocabularyEntry {
    source: String,
    target: String,
}

impl VocabularyEntry {
    /// Build an entry, returning `None` when either term is blank.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Option<Self> {
        let source = source.into().trim().to_string();
        let target = target.into().trim().to_string();
        if source.is_empty() || target.is_empty() {
            return None;
        }
        Some(Self { source, target })
    }

    /// The term shown to the user (Polish).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The expected translation (English).
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// A named group of entries, e.g. "greetings" or "numbers".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    entries: Vec<VocabularyEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<VocabularyEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `entry` belongs to this category.
    pub fn contains(&self, entry: &VocabularyEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Name in title case for menus ("greetings" -> "Greetings").
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Add an entry, replacing any existing entry with the same source term.
    ///
    /// Returns `true` when an earlier entry was replaced.
    pub(crate) fn upsert(&mut self, entry: VocabularyEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.source == entry.source) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_trims_and_rejects_blank_terms() {
        let entry = VocabularyEntry::new("  kot ", "cat\n").unwrap();
        assert_eq!(entry.source(), "kot");
        assert_eq!(entry.target(), "cat");
        assert!(VocabularyEntry::new("", "cat").is_none());
        assert!(VocabularyEntry::new("kot", "   ").is_none());
    }

    #[test]
    fn category_title_handles_unicode() {
        let cat = Category::new("żywność", vec![]);
        assert_eq!(cat.title(), "Żywność");
        assert_eq!(Category::new("", vec![]).title(), "");
    }

    #[test]
    fn upsert_replaces_same_source() {
        let mut cat = Category::new("family", vec![]);
        assert!(!cat.upsert(VocabularyEntry::new("mama", "mother").unwrap()));
        assert!(cat.upsert(VocabularyEntry::new("mama", "mom").unwrap()));
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.entries()[0].target(), "mom");
    }
}
