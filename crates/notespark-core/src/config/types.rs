//! Configuration type definitions

use crate::error::{Result, SparkError};
use crate::mapping::KeywordMapping;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory inside the vault holding notespark state
pub const STATE_DIR: &str = ".notespark";

/// Index file name inside [`STATE_DIR`]
pub const INDEX_FILE: &str = "keywords.json";

/// Vault-local configuration file name inside [`STATE_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkConfig {
    /// Vault root (the corpus); `--vault` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_path: Option<PathBuf>,

    /// Persisted keyword index location (default: `<vault>/.notespark/keywords.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,

    /// Extension of note files, without the dot
    #[serde(default = "default_note_extension")]
    pub note_extension: String,

    /// Pair selection parameters
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Trend matching parameters
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Canonical term → synonyms used for extraction and query expansion
    #[serde(default)]
    pub keyword_mapping: KeywordMapping,
}

/// Distant-pair selection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Notes shorter than this (in characters) are not eligible for pairing
    #[serde(default = "default_min_note_length")]
    pub min_note_length: usize,

    /// Summary prefix length in characters
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,

    /// Random sampling budget
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Early-exit threshold (0-100)
    #[serde(default = "default_min_distance_score")]
    pub min_distance_score: u32,

    /// Keywords a note needs to be eligible when derived from the index alone
    #[serde(default = "default_min_index_keywords")]
    pub min_index_keywords: usize,
}

/// Trend matching parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Maximum linked notes reported per trend
    #[serde(default = "default_max_linked_files")]
    pub max_linked_files: usize,

    /// Snapshot age after which a warning is emitted
    #[serde(default = "default_cache_expiry_minutes")]
    pub cache_expiry_minutes: i64,

    /// Maximum posts kept in a snapshot
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            vault_path: None,
            index_path: None,
            note_extension: default_note_extension(),
            selection: SelectionConfig::default(),
            matching: MatchingConfig::default(),
            keyword_mapping: KeywordMapping::default(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_note_length: default_min_note_length(),
            summary_length: default_summary_length(),
            max_attempts: default_max_attempts(),
            min_distance_score: default_min_distance_score(),
            min_index_keywords: default_min_index_keywords(),
        }
    }
}

impl MatchingConfig {
    /// Snapshot age limit; must be positive and representable
    pub fn cache_expiry(&self) -> Result<Duration> {
        Duration::try_minutes(self.cache_expiry_minutes)
            .filter(|expiry| *expiry > Duration::zero())
            .ok_or_else(|| {
                SparkError::invalid_value("matching.cache_expiry_minutes", self.cache_expiry_minutes)
            })
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_linked_files: default_max_linked_files(),
            cache_expiry_minutes: default_cache_expiry_minutes(),
            max_posts: default_max_posts(),
        }
    }
}

fn default_note_extension() -> String {
    "md".to_string()
}

fn default_min_note_length() -> usize {
    200
}

fn default_summary_length() -> usize {
    1000
}

fn default_max_attempts() -> usize {
    5
}

fn default_min_distance_score() -> u32 {
    70
}

fn default_min_index_keywords() -> usize {
    3
}

fn default_max_linked_files() -> usize {
    5
}

fn default_cache_expiry_minutes() -> i64 {
    60
}

fn default_max_posts() -> usize {
    100
}
