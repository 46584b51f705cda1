//! Index persistence
//!
//! The on-disk format is a JSON object: lowercase keyword → array of
//! vault-relative paths.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::KeywordIndex;
use crate::error::{Result, SparkError};

/// Load/save boundary for the keyword index
pub trait IndexStore {
    /// Last saved index, or an empty index if none is available
    fn load(&self) -> KeywordIndex;

    /// Persist an index, replacing any previous one
    fn save(&self, index: &KeywordIndex) -> Result<()>;
}

/// Index stored as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonIndexFile {
    path: PathBuf,
}

impl JsonIndexFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonIndexFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl IndexStore for JsonIndexFile {
    fn load(&self) -> KeywordIndex {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No index file, using empty index");
            return KeywordIndex::new();
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(SparkError::from)
            .and_then(|content| serde_json::from_str(&content).map_err(SparkError::from));

        match parsed {
            Ok(index) => index,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to load index, using empty index");
                KeywordIndex::new()
            }
        }
    }

    fn save(&self, index: &KeywordIndex) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SparkError::io_operation("create", parent.display(), e))?;
        }

        let content = serde_json::to_string_pretty(index)?;

        // Write then rename so readers never see a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| SparkError::io_operation("write", tmp.display(), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| SparkError::io_operation("replace", self.path.display(), e))?;

        debug!(path = %self.path.display(), keywords = index.len(), "Index saved");
        Ok(())
    }
}
