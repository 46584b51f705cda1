//! `notespark distance` command - score two notes against each other

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_note_block};
use notespark_core::distance::{distance_breakdown, DistanceBreakdown};
use notespark_core::error::Result;
use notespark_core::index::IndexStore;
use notespark_core::note::{parse_note, Note};

#[derive(Serialize)]
struct DistanceOutput<'a> {
    note_a: &'a Note,
    note_b: &'a Note,
    distance_score: u32,
    breakdown: DistanceBreakdown,
}

/// Execute the distance command
pub fn execute(ctx: &CommandContext, note_a: &str, note_b: &str) -> Result<()> {
    let cli = ctx.cli;
    let vault = ctx.open_vault()?;
    let index = ctx.index_file().load();
    let summary_length = ctx.config.selection.summary_length;

    let load = |path: &str| -> Result<Note> {
        let entry = vault.read(path)?;
        Ok(parse_note(
            &entry.relative_path,
            &entry.content,
            &index,
            summary_length,
        ))
    };
    let a = load(note_a)?;
    let b = load(note_b)?;

    let breakdown = distance_breakdown(&a, &b);

    match cli.format {
        OutputFormat::Json => print_json(&DistanceOutput {
            note_a: &a,
            note_b: &b,
            distance_score: breakdown.total,
            breakdown,
        })?,
        OutputFormat::Human => {
            println!("Distance: {}/100", breakdown.total);
            println!("  folder:   {}", breakdown.folder);
            println!("  tags:     {}", breakdown.tags);
            println!("  keywords: {}", breakdown.keywords);
            if !cli.quiet {
                println!();
                print_note_block("A", &a, false);
                print_note_block("B", &b, false);
            }
        }
    }

    Ok(())
}
