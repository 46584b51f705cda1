//! Configuration for notespark
//!
//! Resolution order: an explicit file, then `<vault>/.notespark/config.toml`,
//! then the global config file, then built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SparkError};

pub use types::{
    MatchingConfig, SelectionConfig, SparkConfig, CONFIG_FILE, INDEX_FILE, STATE_DIR,
};

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` file or vault-local file
    File(PathBuf),
    /// Global config file
    Global(PathBuf),
    /// No file found
    Defaults,
}

impl SparkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SparkError::io_operation("read config", path.display(), e))?;
        let config: SparkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Locate and load configuration for a vault.
    ///
    /// Missing files fall through to the next source; malformed files are errors.
    pub fn discover(vault: &Path) -> Result<(Self, ConfigSource)> {
        let local = vault.join(STATE_DIR).join(CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "using vault config");
            return Ok((Self::load(&local)?, ConfigSource::File(local)));
        }

        if let Some(global) = global::global_config_path() {
            if global.is_file() {
                tracing::debug!(
                    path = %global.display(),
                    overridden = global::is_config_dir_overridden(),
                    "using global config"
                );
                return Ok((Self::load(&global)?, ConfigSource::Global(global)));
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Reject values the selector and scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.selection.max_attempts == 0 {
            return Err(SparkError::invalid_value("selection.max_attempts", 0));
        }
        if self.selection.min_distance_score > 100 {
            return Err(SparkError::invalid_value(
                "selection.min_distance_score",
                self.selection.min_distance_score,
            ));
        }
        self.matching.cache_expiry()?;
        if self.note_extension.trim().is_empty() {
            return Err(SparkError::invalid_value("note_extension", "(empty)"));
        }
        Ok(())
    }

    /// Persisted index path for a vault
    pub fn index_path_for(&self, vault: &Path) -> PathBuf {
        match &self.index_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => vault.join(path),
            None => vault.join(STATE_DIR).join(INDEX_FILE),
        }
    }
}
