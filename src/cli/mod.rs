//! CLI argument parsing for notespark
//!
//! Global flags: --vault, --config, --format, --quiet, --verbose

pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Notespark - pick distant notes from a markdown vault
#[derive(Parser, Debug)]
#[command(name = "notespark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the configured vault, then the current directory)
    #[arg(long, global = true, env = "NOTESPARK_VAULT")]
    pub vault: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the keyword index from the vault
    Index,

    /// Pick a pair of distant notes
    Pick {
        /// Number of pairs to sample (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        attempts: Option<u64>,

        /// Stop early once a pair scores at least this much (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        min_distance: Option<u32>,

        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,

        /// Derive notes from the index only, without reading the vault
        #[arg(long)]
        from_index: bool,
    },

    /// Show the distance between two notes
    Distance {
        /// First note, relative to the vault root
        note_a: String,

        /// Second note, relative to the vault root
        note_b: String,
    },

    /// Link trending posts to notes
    Match {
        /// Trend snapshot JSON file
        #[arg(long)]
        trends: PathBuf,

        /// Maximum linked notes per post (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },
}
