use crate::core::TutorialError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Term -> definition table, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    pub fn new(entries: Vec<GlossaryEntry>) -> Result<Self, TutorialError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.term.as_str()) {
                return Err(TutorialError::DuplicateTerm(entry.term.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self, TutorialError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Exact-key lookup. `None` means "render the bare term".
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&GlossaryEntry> {
        self.entries.iter().find(|e| e.term == term)
    }

    #[must_use]
    pub fn lookup_ignore_case(&self, term: &str) -> Option<&GlossaryEntry> {
        self.lookup(term)
            .or_else(|| self.entries.iter().find(|e| e.term.eq_ignore_ascii_case(term)))
    }

    /// Entries whose term contains `substring`, ignoring case. Empty matches all.
    #[must_use]
    pub fn search(&self, substring: &str) -> Vec<(&str, &GlossaryEntry)> {
        let needle = substring.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.term.to_lowercase().contains(&needle))
            .map(|e| (e.term.as_str(), e))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.iter()
    }
}
