//! Grapheme cluster iteration and indexing.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over extended grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Collect the grapheme clusters of a string for random access.
#[must_use]
pub fn split_graphemes(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    // "\r\n" is one cluster, so ASCII alone is not enough for the fast path
    if s.is_ascii() && !s.contains('\r') {
        return s.len();
    }
    s.graphemes(true).count()
}

/// Byte offset of the grapheme at `index`.
///
/// Indices at or past the end map to `s.len()`.
#[must_use]
pub fn grapheme_byte_offset(s: &str, index: usize) -> usize {
    if s.is_ascii() && !s.contains('\r') {
        return index.min(s.len());
    }
    s.grapheme_indices(true)
        .nth(index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Whether `c` forms a grapheme cluster on its own.
///
/// Combining marks, joiners and control characters merge with their
/// neighbours (or split oddly), so they cannot serve as a slot marker.
#[must_use]
pub fn is_standalone_grapheme(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    let mut buf = [0u8; 4];
    let single: &str = c.encode_utf8(&mut buf);
    // A mark glued to a base letter must stay a separate cluster.
    let framed = format!("a{single}a");
    framed.graphemes(true).count() == 3
}
