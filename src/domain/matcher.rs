//! Case-insensitive substring matching over tool names.
//!
//! Matching is recomputed from scratch for every query. Tool sets are tens of
//! entries, so there is no incremental index.

use super::models::{Match, EXACT_MATCH_SCORE, SUBSTRING_MATCH_SCORE};
use std::cmp::Reverse;
use std::ops::Range;

/// Returns at most `limit` names containing `query`, best first.
///
/// An empty query matches every name. Exact (case-folded) matches score
/// [`EXACT_MATCH_SCORE`], any other containment [`SUBSTRING_MATCH_SCORE`].
/// Ties are broken by the original name in ascending order, so the result
/// does not depend on the iteration order of `names`.
pub fn top_matches<'a>(
    query: &str,
    names: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<Match> {
    if limit == 0 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut matches: Vec<Match> = names
        .into_iter()
        .filter_map(|name| {
            let folded = name.to_lowercase();
            if needle.is_empty() || folded.contains(&needle) {
                let score = if !needle.is_empty() && folded == needle {
                    EXACT_MATCH_SCORE
                } else {
                    SUBSTRING_MATCH_SCORE
                };
                Some(Match::new(name, score))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        (Reverse(a.score), a.name.as_str()).cmp(&(Reverse(b.score), b.name.as_str()))
    });
    matches.truncate(limit);
    matches
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
pub fn highlight_span(text: &str, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in text.char_indices() {
        let mut folded = Vec::with_capacity(needle.len());
        for (offset, c) in text[start..].char_indices() {
            folded.extend(c.to_lowercase());
            if folded.len() >= needle.len() {
                if folded == needle {
                    return Some(start..start + offset + c.len_utf8());
                }
                break;
            }
            if !needle.starts_with(&folded) {
                break;
            }
        }
    }
    None
}
