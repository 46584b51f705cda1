//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::{resolve_against, resolve_root_path};
use crate::cli::Cli;
use notespark_core::config::{ConfigSource, SparkConfig};
use notespark_core::error::Result;
use notespark_core::index::JsonIndexFile;
use notespark_core::vault::Vault;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Vault root, which may not exist (index-only picking)
    pub vault_root: PathBuf,
    pub config: SparkConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration and the vault root.
    ///
    /// `--config` wins over discovery. The vault comes from `--vault`, then
    /// `vault_path` in the config, then the directory config was discovered from.
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let base = resolve_root_path(cli.vault.clone());

        let (config, source) = match &cli.config {
            Some(path) => (SparkConfig::load(path)?, ConfigSource::File(path.clone())),
            None => SparkConfig::discover(&base)?,
        };
        tracing::debug!(source = ?source, "config resolved");

        let vault_root = match (&cli.vault, &config.vault_path) {
            (Some(vault), _) => vault.clone(),
            (None, Some(configured)) => resolve_against(&base, configured),
            (None, None) => base,
        };

        Ok(Self {
            cli,
            vault_root,
            config,
            start,
        })
    }

    pub fn open_vault(&self) -> Result<Vault> {
        Vault::open(&self.vault_root, &self.config.note_extension)
    }

    pub fn index_file(&self) -> JsonIndexFile {
        JsonIndexFile::new(self.config.index_path_for(&self.vault_root))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notespark {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Pick distant notes from a markdown vault.");
        println!();
        println!("Run `notespark --help` for usage information.");
        Ok(())
    }
}
