//! Keyword extraction
//!
//! A note's keywords are the union of its filename stem, its top-level folder,
//! its hashtags and every mapping cluster mentioned in its text. All keywords
//! are lowercased; the result is a set.

use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::mapping::KeywordMapping;

static HASHTAG_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn hashtag_regex() -> Option<&'static Regex> {
    HASHTAG_RE
        .get_or_init(|| match Regex::new(r"#(\w+)") {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to compile hashtag regex");
                None
            }
        })
        .as_ref()
}

/// Hashtag words in `content`, without `#`, in order of appearance.
///
/// Case is preserved; callers lowercase when comparing.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    let Some(re) = hashtag_regex() else {
        return Vec::new();
    };
    re.captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Filename without its extension
pub fn file_stem(relative_path: &str) -> String {
    Path::new(relative_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// First path segment of the containing directory, `None` at vault root
pub fn top_level_folder(relative_path: &str) -> Option<&str> {
    let (dir, _) = relative_path.rsplit_once('/')?;
    dir.split('/').next().filter(|s| !s.is_empty())
}

/// Extract the keyword set for one note
pub fn extract_keywords(
    relative_path: &str,
    content: &str,
    mapping: &KeywordMapping,
) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();

    keywords.insert(file_stem(relative_path).to_lowercase());

    if let Some(folder) = top_level_folder(relative_path) {
        keywords.insert(folder.to_lowercase());
    }

    for tag in extract_hashtags(content) {
        keywords.insert(tag.to_lowercase());
    }

    let content_lower = content.to_lowercase();
    for (canonical, synonyms) in mapping.clusters_in(&content_lower) {
        keywords.insert(canonical.to_lowercase());
        keywords.extend(synonyms.iter().map(|s| s.to_lowercase()));
    }

    keywords
}
