//! Distant-pair selection
//!
//! A bounded random search: each attempt samples two different notes and
//! scores them. The search stops early once a pair reaches the configured
//! threshold, and otherwise returns the best pair seen. It is a heuristic,
//! not an exhaustive search for the most distant pair.

mod random;

pub use random::{RandomSource, RngSource};

use serde::Serialize;
use std::collections::HashSet;
use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::config::SelectionConfig;
use crate::distance::{distance_breakdown, DistanceBreakdown};
use crate::error::{Result, SparkError};
use crate::index::KeywordIndex;
use crate::note::{parse_note, Note};
use crate::vault::Vault;

/// Fewest eligible notes a pair can be drawn from
pub const MIN_CORPUS: usize = 2;

/// Search budget and early-exit threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    /// Maximum number of sampled pairs (at least one is always sampled)
    pub max_attempts: usize,
    /// Stop as soon as a pair scores at least this much
    pub min_distance: u32,
}

impl From<&SelectionConfig> for PickerOptions {
    fn from(config: &SelectionConfig) -> Self {
        PickerOptions {
            max_attempts: config.max_attempts,
            min_distance: config.min_distance_score,
        }
    }
}

/// The winning pair, handed to the idea-generation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairSelection {
    pub note_a: Note,
    pub note_b: Note,
    pub distance_score: u32,
    pub breakdown: DistanceBreakdown,
    /// Number of pairs sampled before stopping
    pub attempts: usize,
    /// Whether the threshold was reached
    pub threshold_met: bool,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    a: usize,
    b: usize,
    breakdown: DistanceBreakdown,
    attempt: usize,
}

impl Candidate {
    fn score(&self) -> u32 {
        self.breakdown.total
    }
}

/// Notes of the vault long enough to be paired
#[tracing::instrument(skip_all, fields(vault = %vault.root().display()))]
pub fn eligible_notes(vault: &Vault, index: &KeywordIndex, config: &SelectionConfig) -> Vec<Note> {
    let notes: Vec<Note> = vault
        .entries()
        .into_iter()
        .filter(|entry| entry.content.chars().count() >= config.min_note_length)
        .map(|entry| {
            parse_note(
                &entry.relative_path,
                &entry.content,
                index,
                config.summary_length,
            )
        })
        .collect();

    debug!(eligible = notes.len(), "Collected eligible notes");
    notes
}

/// Draw one pair: `a` uniformly from all notes, `b` uniformly from notes with a different path
fn draw<R: RandomSource + ?Sized>(notes: &[Note], rng: &mut R, attempt: usize) -> Candidate {
    let a = rng.pick_index(notes.len());
    let others: Vec<usize> = (0..notes.len())
        .filter(|&i| notes[i].path != notes[a].path)
        .collect();
    let b = others[rng.pick_index(others.len())];

    let breakdown = distance_breakdown(&notes[a], &notes[b]);
    debug!(
        attempt,
        note_a = %notes[a].path,
        note_b = %notes[b].path,
        distance = breakdown.total,
        "Sampled pair"
    );

    Candidate {
        a,
        b,
        breakdown,
        attempt,
    }
}

/// Select a dissimilar pair of notes.
///
/// Fails with [`SparkError::InsufficientCorpus`] when fewer than two distinct
/// notes are given. Otherwise always returns a pair, even if no attempt
/// reached `min_distance`. Ties keep the earlier pair.
#[tracing::instrument(skip(notes, rng), fields(corpus = notes.len()))]
pub fn select_pair<R: RandomSource + ?Sized>(
    notes: &[Note],
    options: &PickerOptions,
    rng: &mut R,
) -> Result<PairSelection> {
    let distinct = notes
        .iter()
        .map(|n| n.path.as_str())
        .collect::<HashSet<_>>()
        .len();
    if distinct < MIN_CORPUS {
        return Err(SparkError::InsufficientCorpus {
            current: distinct,
            required: MIN_CORPUS,
        });
    }

    let max_attempts = options.max_attempts.max(1);
    let first = draw(notes, rng, 1);

    let outcome = if first.score() >= options.min_distance {
        ControlFlow::Break(first)
    } else {
        (2..=max_attempts).try_fold(first, |best, attempt| {
            let candidate = draw(notes, rng, attempt);
            let reached = candidate.score() >= options.min_distance;
            let best = if candidate.score() > best.score() {
                candidate
            } else {
                best
            };
            if reached {
                ControlFlow::Break(best)
            } else {
                ControlFlow::Continue(best)
            }
        })
    };

    let (best, attempts, threshold_met) = match outcome {
        ControlFlow::Break(best) => (best, best.attempt, true),
        ControlFlow::Continue(best) => (best, max_attempts, false),
    };

    info!(
        distance = best.score(),
        attempts,
        threshold_met,
        "Selected note pair"
    );

    Ok(PairSelection {
        note_a: notes[best.a].clone(),
        note_b: notes[best.b].clone(),
        distance_score: best.score(),
        breakdown: best.breakdown,
        attempts,
        threshold_met,
    })
}
