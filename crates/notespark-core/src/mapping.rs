//! Bilingual keyword mapping
//!
//! A read-only table from a canonical term to its translations and synonyms.
//! The table is passed explicitly to keyword extraction and query expansion
//! so tests can substitute their own clusters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical term → synonym list, loaded once from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordMapping {
    clusters: BTreeMap<String, Vec<String>>,
}

impl KeywordMapping {
    /// Build a mapping from explicit clusters
    pub fn new(clusters: BTreeMap<String, Vec<String>>) -> Self {
        KeywordMapping { clusters }
    }

    /// A mapping with no clusters (disables cross-lingual expansion)
    pub fn empty() -> Self {
        KeywordMapping {
            clusters: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterate clusters as (canonical, synonyms) in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.clusters
            .iter()
            .map(|(canonical, synonyms)| (canonical.as_str(), synonyms.as_slice()))
    }

    /// Clusters with at least one term occurring as a substring of `text_lower`.
    ///
    /// `text_lower` must already be lowercased.
    pub fn clusters_in<'a>(
        &'a self,
        text_lower: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.iter().filter(move |(canonical, synonyms)| {
            text_lower.contains(&canonical.to_lowercase())
                || synonyms
                    .iter()
                    .any(|s| text_lower.contains(&s.to_lowercase()))
        })
    }

    /// Clusters in which `word` equals the canonical term or one of its synonyms
    pub fn clusters_for<'a>(
        &'a self,
        word: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        let word = word.to_lowercase();
        self.iter().filter(move |(canonical, synonyms)| {
            canonical.to_lowercase() == word || synonyms.iter().any(|s| s.to_lowercase() == word)
        })
    }

    /// Expand a query keyword to every lowercased term of each cluster it belongs to.
    ///
    /// Returns an empty list when the keyword is not part of any cluster.
    pub fn expand(&self, keyword: &str) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for (canonical, synonyms) in self.clusters_for(keyword) {
            for term in std::iter::once(canonical).chain(synonyms.iter().map(String::as_str)) {
                let term = term.to_lowercase();
                if !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        terms
    }
}

impl Default for KeywordMapping {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            ("정체성", &["identity", "self", "who am i", "sense of self"]),
            (
                "공감",
                &["empathy", "understanding", "compassion", "emotional intelligence"],
            ),
            (
                "성찰",
                &["reflection", "introspection", "self-awareness", "contemplation"],
            ),
            ("번아웃", &["burnout", "exhaustion", "overwhelmed", "stressed"]),
            ("성장", &["growth", "development", "improvement", "progress"]),
            ("질문", &["question", "curiosity", "inquiry", "wonder"]),
            ("과정", &["process", "journey", "path", "progress"]),
            ("의미", &["meaning", "purpose", "significance", "fulfillment"]),
            ("행복", &["happiness", "joy", "wellbeing", "contentment"]),
            ("관계", &["relationship", "connection", "bond", "social"]),
            ("선택", &["choice", "decision", "free will", "autonomy"]),
            ("변화", &["change", "transformation", "evolution", "transition"]),
            ("가치", &["value", "principle", "belief", "worth"]),
            ("자유", &["freedom", "liberty", "independence", "autonomy"]),
            (
                "책임",
                &["responsibility", "accountability", "duty", "obligation"],
            ),
            (
                "AI",
                &["AI", "artificial intelligence", "machine learning", "GPT", "LLM"],
            ),
            ("영화", &["movie", "film", "cinema", "director"]),
            ("도서", &["book", "reading", "literature", "novel"]),
            ("글쓰기", &["writing", "journaling", "essay", "blogging"]),
            ("노동", &["work", "labor", "job", "career", "employment"]),
        ];

        let clusters = table
            .iter()
            .map(|(canonical, synonyms)| {
                (
                    canonical.to_string(),
                    synonyms.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();

        KeywordMapping { clusters }
    }
}
