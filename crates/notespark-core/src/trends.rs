//! Trend-to-note matching
//!
//! A trend snapshot is a list of discussion posts with keywords derived from
//! their titles. Each post is linked to notes through the keyword index, with
//! mapping expansion so an English title can reach notes indexed under the
//! canonical term and vice versa.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::index::KeywordIndex;
use crate::mapping::KeywordMapping;

/// One trending post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPost {
    pub subreddit: String,
    pub title: String,
    pub score: i64,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A fetched set of posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    pub posts: Vec<TrendPost>,
    pub fetched_at: DateTime<Utc>,
}

/// A post linked to at least one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendMatch {
    pub subreddit: String,
    pub title: String,
    pub url: String,
    pub score: i64,
    pub linked_notes: Vec<String>,
    /// Post keywords present directly in the index
    pub matched_keywords: Vec<String>,
}

impl TrendSnapshot {
    /// Drop duplicate URLs (first wins), sort by score descending and keep `max_posts`
    pub fn from_posts(posts: Vec<TrendPost>, fetched_at: DateTime<Utc>, max_posts: usize) -> Self {
        let mut seen = HashSet::new();
        let mut posts: Vec<TrendPost> = posts
            .into_iter()
            .filter(|post| seen.insert(post.url.clone()))
            .collect();
        posts.sort_by(|a, b| b.score.cmp(&a.score));
        posts.truncate(max_posts);

        TrendSnapshot { posts, fetched_at }
    }

    /// Whether the snapshot is younger than `expiry` at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>, expiry: Duration) -> bool {
        now - self.fetched_at < expiry
    }
}

/// Derive keywords from a post title.
///
/// Canonical terms of mapping clusters hit by a title word come first, then
/// the remaining words longer than three characters.
pub fn extract_title_keywords(title: &str, mapping: &KeywordMapping) -> Vec<String> {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for (canonical, synonyms) in mapping.iter() {
        let hit = words.iter().any(|word| {
            canonical.to_lowercase() == *word || synonyms.iter().any(|s| s.to_lowercase() == *word)
        });
        if hit {
            push_unique(&mut keywords, canonical.to_lowercase());
        }
    }

    for word in words.iter().filter(|w| w.chars().count() > 3) {
        push_unique(&mut keywords, word.to_string());
    }

    keywords
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Notes reachable from `keywords`, directly or through mapping expansion.
///
/// Insertion-ordered, deduplicated, at most `limit` paths.
pub fn find_linked_notes(
    keywords: &[String],
    index: &KeywordIndex,
    mapping: &KeywordMapping,
    limit: usize,
) -> Vec<String> {
    let mut linked: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        let expanded = mapping.expand(&keyword);
        let terms = std::iter::once(&keyword).chain(expanded.iter());

        for term in terms {
            for path in index.paths_for(term) {
                if seen.insert(path.as_str()) {
                    linked.push(path.clone());
                }
            }
        }
    }

    linked.truncate(limit);
    linked
}

/// Match every post of a snapshot against the index.
///
/// Posts without linked notes are dropped; the rest are ordered by number of
/// linked notes, most first.
#[tracing::instrument(skip_all, fields(posts = snapshot.posts.len()))]
pub fn match_trends(
    snapshot: &TrendSnapshot,
    index: &KeywordIndex,
    mapping: &KeywordMapping,
    limit: usize,
) -> Vec<TrendMatch> {
    let mut matches: Vec<TrendMatch> = snapshot
        .posts
        .iter()
        .filter_map(|post| {
            let keywords = if post.keywords.is_empty() {
                extract_title_keywords(&post.title, mapping)
            } else {
                post.keywords.clone()
            };

            let linked_notes = find_linked_notes(&keywords, index, mapping, limit);
            if linked_notes.is_empty() {
                return None;
            }

            let matched_keywords = keywords
                .iter()
                .filter(|k| index.contains_keyword(&k.to_lowercase()))
                .cloned()
                .collect();

            Some(TrendMatch {
                subreddit: post.subreddit.clone(),
                title: post.title.clone(),
                url: post.url.clone(),
                score: post.score,
                linked_notes,
                matched_keywords,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.linked_notes.len().cmp(&a.linked_notes.len()));
    tracing::debug!(matches = matches.len(), "Matched trends");
    matches
}
