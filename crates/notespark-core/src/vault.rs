//! Vault (corpus) access
//!
//! Walks a vault directory recursively and yields note files with their
//! vault-relative paths. Entries whose name starts with `.` are skipped at
//! every level below the root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SparkError};

/// One readable note file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    /// Path relative to the vault root, `/`-separated
    pub relative_path: String,
    /// Full text content
    pub content: String,
}

/// A note vault rooted at a directory
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    extension: String,
}

impl Vault {
    /// Open a vault, failing if the root is not a directory
    pub fn open(root: &Path, extension: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(SparkError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Vault {
            root: root.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of all note files, sorted for a stable scan order
    pub fn note_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "Failed to walk vault entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy() == self.extension)
            })
            .map(|e| e.into_path())
            .collect();
        paths.sort();
        paths
    }

    /// Read every note, skipping unreadable files with a warning
    pub fn entries(&self) -> Vec<VaultEntry> {
        self.note_paths()
            .into_iter()
            .filter_map(|path| match self.read_path(&path) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read note");
                    None
                }
            })
            .collect()
    }

    /// Read a single note by vault-relative path
    ///
    /// Paths that are absolute or climb out with `..` are treated as unknown.
    pub fn read(&self, relative_path: &str) -> Result<VaultEntry> {
        let inside_vault = Path::new(relative_path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        let path = self.root.join(relative_path);
        if !inside_vault || !path.is_file() {
            return Err(SparkError::NoteNotFound {
                path: relative_path.to_string(),
            });
        }
        self.read_path(&path)
    }

    fn read_path(&self, path: &Path) -> Result<VaultEntry> {
        let content = fs::read_to_string(path)
            .map_err(|e| SparkError::io_operation("read", path.display(), e))?;
        Ok(VaultEntry {
            relative_path: self.relative_path(path),
            content,
        })
    }

    /// Vault-relative, `/`-separated form of an absolute path
    pub fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
