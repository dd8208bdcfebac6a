//! Case folding shared by filtering and highlighting.
//!
//! Folding is char by char (lowercase, with final sigma `ς` folded to `σ`), so
//! it never depends on the surrounding word and byte offsets found in the
//! folded form map back onto char boundaries of the original text.

/// Folded chars of a single char
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase()
        .map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Folded form of `text`, as a char sequence usable as a needle
pub(crate) fn fold_chars(text: &str) -> Vec<char> {
    text.chars().flat_map(fold_char).collect()
}

/// Byte length of the prefix of `haystack` whose folded form equals
/// `needle`, ending on a char boundary
pub(crate) fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;

    for (offset, ch) in haystack.char_indices() {
        for folded in fold_char(ch) {
            match remaining.split_first() {
                Some((expected, tail)) if *expected == folded => remaining = tail,
                _ => return None,
            }
        }
        if remaining.is_empty() {
            return Some(offset + ch.len_utf8());
        }
    }

    None
}

/// Whether `haystack` contains `needle` (already folded) under folding
pub(crate) fn contains_folded(haystack: &str, needle: &[char]) -> bool {
    needle.is_empty()
        || haystack
            .char_indices()
            .any(|(offset, _)| match_len(&haystack[offset..], needle).is_some())
}

/// Whether `text` and `needle` (already folded) are equal under folding
pub(crate) fn equals_folded(text: &str, needle: &[char]) -> bool {
    text.chars().flat_map(fold_char).eq(needle.iter().copied())
}
