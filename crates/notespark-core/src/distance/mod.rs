//! Structural distance between two notes
//!
//! The score (0-100, higher is more dissimilar) is the sum of three bounded
//! sub-scores: folder (0/15/30), tags (0/20/40) and keyword Jaccard distance
//! (0-30). Missing tags or keywords count as maximally distant on that axis.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::note::Note;

/// Maximum folder sub-score
pub const FOLDER_MAX: u32 = 30;
/// Folder sub-score when only the top-level segment is shared
pub const FOLDER_SHARED_TOP: u32 = 15;
/// Maximum tag sub-score
pub const TAG_MAX: u32 = 40;
/// Tag sub-score for exactly one shared tag
pub const TAG_ONE_SHARED: u32 = 20;
/// Maximum keyword sub-score
pub const KEYWORD_MAX: u32 = 30;
/// Upper bound of the total score
pub const DISTANCE_MAX: u32 = 100;

/// Sub-scores and total for one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceBreakdown {
    pub folder: u32,
    pub tags: u32,
    pub keywords: u32,
    pub total: u32,
}

/// Folder sub-score: identical → 0, same first segment → 15, otherwise → 30
pub fn folder_distance(folder_a: &str, folder_b: &str) -> u32 {
    if folder_a == folder_b {
        return 0;
    }

    let top_a = folder_a.split('/').next();
    let top_b = folder_b.split('/').next();
    if top_a == top_b {
        FOLDER_SHARED_TOP
    } else {
        FOLDER_MAX
    }
}

fn lowercase_set<'a>(items: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    items.into_iter().map(|s| s.to_lowercase()).collect()
}

/// Tag sub-score: ≥2 shared → 0, one shared → 20, none or either side empty → 40
pub fn tag_distance<'a>(
    tags_a: impl IntoIterator<Item = &'a String>,
    tags_b: impl IntoIterator<Item = &'a String>,
) -> u32 {
    let set_a = lowercase_set(tags_a);
    let set_b = lowercase_set(tags_b);
    if set_a.is_empty() || set_b.is_empty() {
        return TAG_MAX;
    }

    match set_a.intersection(&set_b).count() {
        0 => TAG_MAX,
        1 => TAG_ONE_SHARED,
        _ => 0,
    }
}

/// Keyword sub-score: round((1 - Jaccard) * 30), 30 if either side is empty
pub fn keyword_distance<'a>(
    keywords_a: impl IntoIterator<Item = &'a String>,
    keywords_b: impl IntoIterator<Item = &'a String>,
) -> u32 {
    let set_a = lowercase_set(keywords_a);
    let set_b = lowercase_set(keywords_b);
    if set_a.is_empty() || set_b.is_empty() {
        return KEYWORD_MAX;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    let jaccard = intersection as f64 / union as f64;

    ((1.0 - jaccard) * KEYWORD_MAX as f64).round() as u32
}

/// Full breakdown for a pair of notes
pub fn distance_breakdown(note_a: &Note, note_b: &Note) -> DistanceBreakdown {
    let folder = folder_distance(&note_a.folder, &note_b.folder);
    let tags = tag_distance(&note_a.tags, &note_b.tags);
    let keywords = keyword_distance(&note_a.keywords, &note_b.keywords);

    DistanceBreakdown {
        folder,
        tags,
        keywords,
        total: (folder + tags + keywords).min(DISTANCE_MAX),
    }
}

/// Total distance (0-100) between two notes
pub fn note_distance(note_a: &Note, note_b: &Note) -> u32 {
    distance_breakdown(note_a, note_b).total
}
