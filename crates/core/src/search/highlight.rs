//! # Title Highlighting
//!
//! Splits display text around case-insensitive occurrences of the search
//! keyword so the presentation layer can style the matches.
//!
//! Matching is literal: punctuation such as `(`, `+` or `*` in the keyword is
//! plain text. Segments are exact slices of the input, so joining them gives
//! the input back.

use super::fold::{equals_folded, fold_chars, match_len};
use serde::Serialize;

/// A run of display text tagged as matching the keyword or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSegment {
    /// Segment with `is_match` set by comparing its folded form to `needle`
    fn tagged(text: &str, needle: &[char]) -> Self {
        Self {
            text: text.to_string(),
            is_match: equals_folded(text, needle),
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }
}

/// Segment `text` around every non-overlapping occurrence of `keyword`
///
/// An empty keyword (or empty text) yields one non-matching segment holding
/// the whole text. Otherwise no empty segments are produced.
pub fn highlight_matches(text: &str, keyword: &str) -> Vec<HighlightSegment> {
    if keyword.is_empty() || text.is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let needle = fold_chars(keyword);
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        let rest = &text[cursor..];
        match match_len(rest, &needle) {
            Some(len) => {
                if plain_start < cursor {
                    segments.push(HighlightSegment::tagged(&text[plain_start..cursor], &needle));
                }
                segments.push(HighlightSegment::tagged(&rest[..len], &needle));
                cursor += len;
                plain_start = cursor;
            }
            None => {
                cursor += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(HighlightSegment::tagged(&text[plain_start..], &needle));
    }

    segments
}
