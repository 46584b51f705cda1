//! Keyword index: keyword → vault-relative paths of the notes carrying it
//!
//! Each path appears at most once per keyword, in order of first insertion.
//! The index doubles as the reverse lookup for "which keywords does this note
//! carry" when note text is not re-parsed.

mod builder;
mod store;

pub use builder::IndexBuilder;
pub use store::{IndexStore, JsonIndexFile};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Persisted keyword index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordIndex {
    entries: BTreeMap<String, Vec<String>>,
}

// Loaded maps go through `insert` so keys are lowercased and paths deduplicated
impl<'de> Deserialize<'de> for KeywordIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        let mut index = KeywordIndex::new();
        for (keyword, paths) in &raw {
            for path in paths {
                index.insert(keyword, path);
            }
        }
        Ok(index)
    }
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` carries `keyword`. Returns false if already recorded.
    pub fn insert(&mut self, keyword: &str, path: &str) -> bool {
        let paths = self.entries.entry(keyword.to_lowercase()).or_default();
        if paths.iter().any(|p| p == path) {
            return false;
        }
        paths.push(path.to_string());
        true
    }

    /// Record every keyword of one note
    pub fn add_note<'a>(&mut self, path: &str, keywords: impl IntoIterator<Item = &'a String>) {
        for keyword in keywords {
            self.insert(keyword, path);
        }
    }

    /// Paths carrying `keyword` (exact, lowercase key)
    pub fn paths_for(&self, keyword: &str) -> &[String] {
        self.entries
            .get(keyword)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Reverse lookup: every keyword whose path list contains `path`
    pub fn keywords_for(&self, path: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, paths)| paths.iter().any(|p| p == path))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }

    /// Distinct note paths, in order of first appearance
    pub fn note_paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Iterate (keyword, paths)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct notes
    pub fn note_count(&self) -> usize {
        self.note_paths().len()
    }
}
