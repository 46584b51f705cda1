//! Output format handling for notespark
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use clap::ValueEnum;

/// Output format for notespark commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}
