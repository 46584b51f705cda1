//! `notespark match` command - link trending posts to notes
//!
//! Reads a trend snapshot from disk; fetching posts is left to other tools.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::print_json;
use notespark_core::error::{Result, SparkError};
use notespark_core::index::IndexStore;
use notespark_core::trends::{match_trends, TrendMatch, TrendSnapshot};

#[derive(Serialize)]
struct MatchOutput<'a> {
    fetched_at: String,
    stale: bool,
    posts: usize,
    match_count: usize,
    matches: &'a [TrendMatch],
}

/// Execute the match command
pub fn execute(ctx: &CommandContext, trends_path: &Path, limit: Option<usize>) -> Result<()> {
    let cli = ctx.cli;
    let matching = &ctx.config.matching;

    let snapshot = load_snapshot(trends_path, matching.max_posts)?;
    let expiry = matching.cache_expiry()?;
    let stale = !snapshot.is_fresh(Utc::now(), expiry);
    if stale {
        warn!(
            fetched_at = %snapshot.fetched_at.to_rfc3339(),
            expiry_minutes = matching.cache_expiry_minutes,
            "Trend snapshot is stale"
        );
    }

    let store = ctx.index_file();
    let index = store.load();
    if index.is_empty() {
        warn!(
            index = %store.path().display(),
            "Keyword index is empty; run `notespark index` first"
        );
    }
    trace_command!(cli, ctx.start, "load_index");

    let limit = limit.unwrap_or(matching.max_linked_files);
    let matches = match_trends(&snapshot, &index, &ctx.config.keyword_mapping, limit);

    match cli.format {
        OutputFormat::Json => print_json(&MatchOutput {
            fetched_at: snapshot.fetched_at.to_rfc3339(),
            stale,
            posts: snapshot.posts.len(),
            match_count: matches.len(),
            matches: &matches,
        })?,
        OutputFormat::Human => {
            if matches.is_empty() {
                if !cli.quiet {
                    println!("No trends matched ({} posts)", snapshot.posts.len());
                }
                return Ok(());
            }
            for m in &matches {
                println!("[r/{}] {} ({})", m.subreddit, m.title, m.score);
                if !cli.quiet {
                    println!("  {}", m.url);
                }
                for path in &m.linked_notes {
                    println!("  -> {}", path);
                }
            }
        }
    }

    Ok(())
}

fn load_snapshot(path: &Path, max_posts: usize) -> Result<TrendSnapshot> {
    let content = fs::read_to_string(path)
        .map_err(|e| SparkError::io_operation("read trends", path.display(), e))?;
    let raw: TrendSnapshot = serde_json::from_str(&content)?;
    Ok(TrendSnapshot::from_posts(raw.posts, raw.fetched_at, max_posts))
}
