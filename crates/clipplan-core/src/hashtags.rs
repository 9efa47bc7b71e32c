//! Hashtag selection for a niche and an optional trend keyword.

use crate::catalog::catalog;
use crate::text::{compact_lowercase, non_blank};

/// Maximum number of hashtags returned by [`select_hashtags`].
pub const MAX_HASHTAGS: usize = 10;

/// Return the catalog key for `niche`.
///
/// The first key (in catalog declaration order) contained in the lowercased
/// niche wins. Falls back to the catalog's default niche.
pub fn match_niche(niche: &str) -> &'static str {
    let cat = catalog();
    let normalized = niche.to_lowercase();
    cat.niches()
        .iter()
        .find(|entry| normalized.contains(entry.key.as_str()))
        .map(|entry| entry.key.as_str())
        .unwrap_or(cat.default_niche.as_str())
}

/// Select up to [`MAX_HASHTAGS`] unique hashtags.
///
/// Order: category tags, then the baseline tags, then (when a non-blank trend
/// keyword is given) `#<trend>` and `#<trend>trend`, where `<trend>` is the
/// keyword with whitespace removed and lowercased. Duplicates keep their
/// first position. Trend tags always survive the cap; when the list is too
/// long, baseline tags are dropped from the tail to make room for them.
pub fn select_hashtags(niche: &str, trend_keyword: Option<&str>) -> Vec<String> {
    let cat = catalog();
    let category = cat
        .niche(match_niche(niche))
        .map(|entry| entry.hashtags.as_slice())
        .unwrap_or_default();

    let trend_tags = match non_blank(trend_keyword) {
        Some(trend) => {
            let body = compact_lowercase(trend);
            dedup([format!("#{body}"), format!("#{body}trend")].iter())
        }
        None => Vec::new(),
    };

    // Slots left for tags that are not trend tags.
    let room = MAX_HASHTAGS.saturating_sub(trend_tags.len());

    let mut tags: Vec<String> = Vec::with_capacity(MAX_HASHTAGS);
    let mut filled = 0;
    for tag in dedup(category.iter().chain(cat.base_hashtags.iter())) {
        if trend_tags.contains(&tag) {
            tags.push(tag);
        } else if filled < room {
            tags.push(tag);
            filled += 1;
        }
    }
    for tag in trend_tags {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Collect `tags`, keeping only the first occurrence of each.
fn dedup<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        if !out.contains(tag) {
            out.push(tag.clone());
        }
    }
    out
}
