//! `notespark pick` command - select a pair of distant notes
//!
//! Notes come from a vault scan, or from the keyword index alone when
//! `--from-index` is given or the vault directory is missing. The printed
//! pair is the input for the idea-generation step.

use serde::Serialize;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{print_json, print_note_block};
use notespark_core::error::Result;
use notespark_core::index::IndexStore;
use notespark_core::note::{notes_from_index, Note};
use notespark_core::picker::{eligible_notes, select_pair, PairSelection, PickerOptions, RngSource};

/// Flag overrides for the pick command
#[derive(Debug, Clone, Copy, Default)]
pub struct PickArgs {
    pub attempts: Option<usize>,
    pub min_distance: Option<u32>,
    pub seed: Option<u64>,
    pub from_index: bool,
}

/// Where the candidate notes came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusMode {
    Vault,
    Index,
}

#[derive(Serialize)]
struct PickOutput<'a> {
    mode: CorpusMode,
    eligible_notes: usize,
    #[serde(flatten)]
    selection: &'a PairSelection,
}

/// Execute the pick command
pub fn execute(ctx: &CommandContext, args: PickArgs) -> Result<()> {
    let cli = ctx.cli;
    let (notes, mode) = collect_notes(ctx, args.from_index)?;
    trace_command!(cli, ctx.start, "collect_notes");

    let mut options = PickerOptions::from(&ctx.config.selection);
    if let Some(attempts) = args.attempts {
        options.max_attempts = attempts;
    }
    if let Some(min_distance) = args.min_distance {
        options.min_distance = min_distance;
    }

    let mut rng = RngSource::from_seed(args.seed);
    let selection = select_pair(&notes, &options, &mut rng)?;
    trace_command!(cli, ctx.start, "select_pair");

    match cli.format {
        OutputFormat::Json => print_json(&PickOutput {
            mode,
            eligible_notes: notes.len(),
            selection: &selection,
        })?,
        OutputFormat::Human => print_human(&selection, mode, options, cli.quiet),
    }

    Ok(())
}

fn collect_notes(ctx: &CommandContext, from_index: bool) -> Result<(Vec<Note>, CorpusMode)> {
    let store = ctx.index_file();
    let index = store.load();

    if from_index || !ctx.vault_root.is_dir() {
        if !from_index {
            warn!(
                vault = %ctx.vault_root.display(),
                "Vault directory not found, picking from the keyword index only"
            );
        }
        let notes = notes_from_index(&index, ctx.config.selection.min_index_keywords);
        return Ok((notes, CorpusMode::Index));
    }

    if !store.exists() {
        warn!(
            index = %store.path().display(),
            "No keyword index found; run `notespark index` for keyword distances"
        );
    }

    let vault = ctx.open_vault()?;
    let notes = eligible_notes(&vault, &index, &ctx.config.selection);
    Ok((notes, CorpusMode::Vault))
}

fn print_human(selection: &PairSelection, mode: CorpusMode, options: PickerOptions, quiet: bool) {
    let breakdown = selection.breakdown;
    println!(
        "Distance: {}/100 (folder {}, tags {}, keywords {})",
        selection.distance_score, breakdown.folder, breakdown.tags, breakdown.keywords
    );

    if !quiet {
        let outcome = if selection.threshold_met {
            "met"
        } else {
            "not met"
        };
        println!(
            "Attempts: {} (threshold {} {})",
            selection.attempts, options.min_distance, outcome
        );
        if mode == CorpusMode::Index {
            println!("Mode: index only");
        }
    }

    println!();
    print_note_block("A", &selection.note_a, !quiet);
    print_note_block("B", &selection.note_b, !quiet);
}
