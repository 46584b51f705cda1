use std::time::Instant;

use super::KeywordIndex;
use crate::keywords::extract_keywords;
use crate::mapping::KeywordMapping;
use crate::trace_time;
use crate::vault::{Vault, VaultEntry};

/// Index builder - full scan of a vault
pub struct IndexBuilder<'a> {
    vault: &'a Vault,
    mapping: &'a KeywordMapping,
    index: KeywordIndex,
}

impl<'a> IndexBuilder<'a> {
    /// Create a new index builder
    pub fn new(vault: &'a Vault, mapping: &'a KeywordMapping) -> Self {
        IndexBuilder {
            vault,
            mapping,
            index: KeywordIndex::new(),
        }
    }

    /// Build the index
    #[tracing::instrument(skip(self), fields(vault = %self.vault.root().display()))]
    pub fn build(mut self) -> KeywordIndex {
        let start = Instant::now();
        let entries = self.vault.entries();

        for entry in &entries {
            self.add_entry(entry);
        }

        tracing::info!(
            notes = entries.len(),
            keywords = self.index.len(),
            "Index built"
        );
        trace_time!(start, "build_index", notes = entries.len());

        self.index
    }

    fn add_entry(&mut self, entry: &VaultEntry) {
        let keywords = extract_keywords(&entry.relative_path, &entry.content, self.mapping);
        self.index.add_note(&entry.relative_path, &keywords);
    }
}
