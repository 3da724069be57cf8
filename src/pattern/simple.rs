//! Matching the whole candidate as one segment.

use crate::case_folding::CaseFolding;

use super::kind::PatternMatch;
use super::matcher::{Candidate, MatchContext};
use super::segment::PatternSegment;

/// The pattern as a single segment, matched against the whole candidate.
#[derive(Debug)]
pub(crate) struct SimpleMatcher {
    segment: PatternSegment,
}

impl SimpleMatcher {
    pub fn new(pattern: &str, folding: CaseFolding) -> Self {
        Self {
            segment: PatternSegment::new(pattern.trim(), folding),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.segment.is_invalid()
    }

    pub fn segment_count(&self) -> usize {
        1
    }

    pub fn try_match(
        &self,
        ctx: &MatchContext,
        candidate: &Candidate<'_>,
        fuzzy: bool,
    ) -> Option<PatternMatch> {
        ctx.match_segment(candidate, &self.segment, fuzzy, 0)
    }

    pub fn release(&self) {
        self.segment.release();
    }
}
