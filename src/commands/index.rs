//! `notespark index` command - build the keyword index
//!
//! Scans every note of the vault, extracts keywords and persists the
//! keyword → paths map next to the vault.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::print_json_status;
use notespark_core::error::Result;
use notespark_core::index::{IndexBuilder, IndexStore};

/// Execute the index command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let vault = ctx.open_vault()?;
    trace_command!(cli, ctx.start, "open_vault");

    let index = IndexBuilder::new(&vault, &ctx.config.keyword_mapping).build();
    trace_command!(cli, ctx.start, "build_index");

    let store = ctx.index_file();
    store.save(&index)?;

    match cli.format {
        OutputFormat::Json => {
            print_json_status(
                "ok",
                &[
                    ("notes_indexed", json!(index.note_count())),
                    ("keywords_indexed", json!(index.len())),
                    ("index_path", json!(store.path().display().to_string())),
                ],
            )?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Indexed {} notes ({} keywords)",
                    index.note_count(),
                    index.len()
                );
                if cli.verbose {
                    println!("  index: {}", store.path().display());
                }
            }
        }
    }

    Ok(())
}
