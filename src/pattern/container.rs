//! Matching dotted (or otherwise separated) names segment by segment.

use crate::case_folding::CaseFolding;
use crate::span::TextSpan;

use super::kind::PatternMatch;
use super::matcher::{Candidate, MatchContext};
use super::segment::PatternSegment;

/// Pattern segments aligned right-to-left against candidate parts.
///
/// With separators `{'.'}`, the pattern `A.B` matches `Foo.A.B` by pairing
/// `B` with `B` and `A` with `A`; the leading `Foo` is left over.
#[derive(Debug)]
pub(crate) struct ContainerMatcher {
    segments: Vec<PatternSegment>,
    separators: Vec<char>,
}

impl ContainerMatcher {
    /// Empty pieces (`"A."`, `"A..B"`) are dropped, so a half-typed pattern
    /// still matches. A whitespace-only piece is kept and makes the matcher
    /// invalid, as does a pattern made only of separators.
    pub fn new(pattern: &str, separators: Vec<char>, folding: CaseFolding) -> Self {
        let segments = pattern
            .split(separators.as_slice())
            .filter(|text| !text.is_empty())
            .map(|text| PatternSegment::new(text.trim(), folding))
            .collect();
        Self {
            segments,
            separators,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.segments.is_empty() || self.segments.iter().any(|s| s.is_invalid())
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn try_match(
        &self,
        ctx: &MatchContext,
        candidate: &Candidate<'_>,
        fuzzy: bool,
    ) -> Option<PatternMatch> {
        let parts = split_parts(&candidate.chars, &self.separators);
        if self.segments.len() > parts.len() {
            return None;
        }

        let mut merged: Option<PatternMatch> = None;
        for (segment, part) in self.segments.iter().rev().zip(parts.iter().rev()) {
            let text: String = part.slice(&candidate.chars).iter().collect();
            let part_candidate = Candidate::new(&text);
            let m = ctx.match_segment(&part_candidate, segment, fuzzy, part.start)?;
            merged = Some(match merged {
                Some(prev) => prev.merge(m),
                None => m,
            });
        }
        merged
    }

    pub fn release(&self) {
        for segment in &self.segments {
            segment.release();
        }
    }
}

/// Non-empty runs between separators, as spans into the candidate.
fn split_parts(chars: &[char], separators: &[char]) -> Vec<TextSpan> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (pos, ch) in chars.iter().enumerate() {
        if separators.contains(ch) {
            if pos > start {
                parts.push(TextSpan::from_bounds(start, pos));
            }
            start = pos + 1;
        }
    }
    if chars.len() > start {
        parts.push(TextSpan::from_bounds(start, chars.len()));
    }
    parts
}
