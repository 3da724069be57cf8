//! Character spans over candidate and pattern text.
//!
//! All positions are **character** (not byte) indices, matching the way the
//! matcher walks text as `&[char]`.

use itertools::Itertools;

/// A half-open run of characters: `start..start + length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    /// Create a new span.
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Create a span from a start and an exclusive end.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            length: end - start,
        }
    }

    /// Exclusive end position.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The same span moved right by `offset` characters.
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.length)
    }

    /// The part of this span left after dropping its first `n` characters.
    pub fn skip(&self, n: usize) -> Self {
        let n = n.min(self.length);
        Self::new(self.start + n, self.length - n)
    }

    /// Test whether the two spans share at least one character.
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Slice the characters covered by this span.
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        &chars[self.start..self.end()]
    }
}

/// Sort spans and merge any that overlap. Empty spans are dropped.
///
/// Spans that merely touch are kept apart so camel-case hump highlights stay
/// distinguishable.
pub fn normalize_spans(spans: impl IntoIterator<Item = TextSpan>) -> Vec<TextSpan> {
    spans
        .into_iter()
        .filter(|s| !s.is_empty())
        .sorted()
        .coalesce(|a, b| {
            if a.overlaps(&b) {
                Ok(TextSpan::from_bounds(a.start, a.end().max(b.end())))
            } else {
                Err((a, b))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(start: usize, length: usize) -> TextSpan {
        TextSpan::new(start, length)
    }

    #[test]
    fn end_and_shift() {
        let s = sp(2, 3);
        assert_eq!(s.end(), 5);
        assert_eq!(s.shifted(4), sp(6, 3));
        assert_eq!(TextSpan::from_bounds(2, 5), s);
    }

    #[test]
    fn skip_clamps_to_length() {
        assert_eq!(sp(4, 6).skip(2), sp(6, 4));
        assert_eq!(sp(4, 2).skip(5), sp(6, 0));
    }

    #[test]
    fn overlap_requires_shared_character() {
        assert!(sp(0, 3).overlaps(&sp(2, 2)));
        assert!(!sp(0, 3).overlaps(&sp(3, 2)));
    }

    #[test]
    fn normalize_merges_overlaps_only() {
        let merged = normalize_spans([sp(5, 2), sp(0, 3), sp(2, 2), sp(7, 1)]);
        assert_eq!(merged, vec![sp(0, 4), sp(5, 2), sp(7, 1)]);
    }

    #[test]
    fn normalize_drops_empty_and_duplicates() {
        let merged = normalize_spans([sp(1, 0), sp(3, 2), sp(3, 2)]);
        assert_eq!(merged, vec![sp(3, 2)]);
    }

    #[test]
    fn normalize_keeps_touching_spans_apart() {
        assert_eq!(normalize_spans([sp(3, 5), sp(0, 3)]), vec![sp(0, 3), sp(3, 5)]);
    }

    #[test]
    fn normalize_absorbs_contained_span() {
        assert_eq!(normalize_spans([sp(0, 10), sp(2, 3)]), vec![sp(0, 10)]);
    }
}
