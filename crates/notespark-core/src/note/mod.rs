//! Note metadata used for pairing
//!
//! Notes are derived per request, either from vault text or from the keyword
//! index alone, and are never mutated afterwards.

mod parse;

pub use parse::{folder_of, notes_from_index, parse_note};

use serde::Serialize;
use std::collections::BTreeSet;

/// One note of the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Vault-relative path, unique within a snapshot
    pub path: String,
    /// Containing directory path, `""` at vault root
    pub folder: String,
    /// Filename without extension
    pub title: String,
    /// Lowercased hashtags
    pub tags: BTreeSet<String>,
    /// Lowercased keywords carried by this note in the index
    pub keywords: BTreeSet<String>,
    /// Trimmed prefix of the note text
    pub summary: String,
}
