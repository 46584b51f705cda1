use std::collections::{BTreeMap, BTreeSet};

use super::Note;
use crate::index::KeywordIndex;
use crate::keywords::{extract_hashtags, file_stem};

/// Containing directory of a vault-relative path, `""` at vault root
pub fn folder_of(relative_path: &str) -> String {
    relative_path
        .rsplit_once('/')
        .map(|(dir, _)| dir.to_string())
        .unwrap_or_default()
}

/// Build note metadata from its text.
///
/// Keywords come from a reverse lookup into `index`, not from re-extraction,
/// so a stale index yields stale keywords.
pub fn parse_note(
    relative_path: &str,
    content: &str,
    index: &KeywordIndex,
    summary_length: usize,
) -> Note {
    let tags = extract_hashtags(content)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();

    let keywords = index.keywords_for(relative_path).into_iter().collect();

    let summary: String = content.chars().take(summary_length).collect();

    Note {
        path: relative_path.to_string(),
        folder: folder_of(relative_path),
        title: file_stem(relative_path),
        tags,
        keywords,
        summary: summary.trim().to_string(),
    }
}

/// Derive notes from the index alone, for when vault text is unavailable.
///
/// Tags are empty and the summary is a placeholder. Only notes carrying at
/// least `min_keywords` keywords are returned, in order of first appearance.
pub fn notes_from_index(index: &KeywordIndex, min_keywords: usize) -> Vec<Note> {
    let mut order: Vec<&str> = Vec::new();
    let mut keywords: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();

    for (keyword, paths) in index.iter() {
        for path in paths {
            let entry = keywords.entry(path.as_str()).or_insert_with(|| {
                order.push(path.as_str());
                BTreeSet::new()
            });
            entry.insert(keyword.to_string());
        }
    }

    order
        .into_iter()
        .filter_map(|path| {
            let note_keywords = keywords.remove(path)?;
            if note_keywords.len() < min_keywords {
                return None;
            }
            let title = file_stem(path);
            Some(Note {
                path: path.to_string(),
                folder: folder_of(path),
                summary: format!("Keyword-only note: {}", title),
                title,
                tags: BTreeSet::new(),
                keywords: note_keywords,
            })
        })
        .collect()
}
