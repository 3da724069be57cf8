//! The public matcher: one per pattern, used for many candidates.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::error::MatcherError;
use crate::options::MatcherOptions;
use crate::pattern::PatternMatch;
use crate::pattern::container::ContainerMatcher;
use crate::pattern::matcher::{Candidate, MatchContext};
use crate::pattern::simple::SimpleMatcher;

/// How the pattern is laid against a candidate.
#[derive(Debug)]
enum Strategy {
    /// The whole candidate is one segment.
    Simple(SimpleMatcher),
    /// Separator-delimited parts, aligned from the right.
    Container(ContainerMatcher),
}

impl Strategy {
    fn try_match(
        &self,
        ctx: &MatchContext,
        candidate: &Candidate<'_>,
        fuzzy: bool,
    ) -> Option<PatternMatch> {
        match self {
            Strategy::Simple(m) => m.try_match(ctx, candidate, fuzzy),
            Strategy::Container(m) => m.try_match(ctx, candidate, fuzzy),
        }
    }

    fn is_invalid(&self) -> bool {
        match self {
            Strategy::Simple(m) => m.is_invalid(),
            Strategy::Container(m) => m.is_invalid(),
        }
    }

    fn segment_count(&self) -> usize {
        match self {
            Strategy::Simple(m) => m.segment_count(),
            Strategy::Container(m) => m.segment_count(),
        }
    }

    fn release(&self) {
        match self {
            Strategy::Simple(m) => m.release(),
            Strategy::Container(m) => m.release(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Strategy::Simple(_) => "simple",
            Strategy::Container(_) => "container",
        }
    }
}

/// A candidate that survived [`PatternMatcher::rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch<'a> {
    /// Position of the candidate in the input sequence.
    pub index: usize,
    pub candidate: &'a str,
    pub pattern_match: PatternMatch,
}

/// Matches one pattern against any number of candidates.
///
/// Safe to share between threads; the only mutable state is an internal
/// word-break cache. Call [`dispose`](Self::dispose) (or drop the matcher)
/// to release the caches. Matching after `dispose` panics.
pub struct PatternMatcher {
    pattern: String,
    allow_fuzzy: bool,
    strategy: Strategy,
    context: MatchContext,
    invalid: bool,
    disposed: AtomicBool,
}

impl PatternMatcher {
    /// Build a matcher for `pattern`.
    ///
    /// Fails only for an empty or whitespace pattern, or an empty separator
    /// set. A pattern that cannot match anything (say `"a..b"` in container
    /// mode) still builds; it just never matches.
    pub fn new(pattern: &str, options: &MatcherOptions) -> Result<Self, MatcherError> {
        if pattern.trim().is_empty() {
            return Err(MatcherError::EmptyPattern);
        }
        let folding = options.case_folding();
        let strategy = match &options.container_split_characters {
            Some(separators) if separators.is_empty() => {
                return Err(MatcherError::InvalidSplitCharacters);
            }
            Some(separators) => Strategy::Container(ContainerMatcher::new(
                pattern,
                separators.iter().copied().collect(),
                folding,
            )),
            None => Strategy::Simple(SimpleMatcher::new(pattern, folding)),
        };
        let invalid = strategy.is_invalid();
        debug!(
            pattern,
            strategy = strategy.name(),
            segments = strategy.segment_count(),
            invalid,
            "created pattern matcher"
        );

        Ok(Self {
            pattern: pattern.to_string(),
            allow_fuzzy: options.allow_fuzzy_matching,
            strategy,
            context: MatchContext::new(
                folding,
                options.allow_simple_substring_matching,
                options.include_matched_spans,
            ),
            invalid,
            disposed: AtomicBool::new(false),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True when the pattern can never match (it has a blank segment).
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Match one candidate.
    ///
    /// Exact rules run first; fuzzy matching is tried only if they all fail
    /// and it was enabled.
    pub fn try_match(&self, candidate: &str) -> Option<PatternMatch> {
        self.assert_live();
        let result = self.try_match_inner(candidate);
        // A dispose racing with this call may have cleared the cache before
        // our insert landed.
        if self.disposed.load(Ordering::SeqCst) {
            self.context.clear_cache();
        }
        result
    }

    fn try_match_inner(&self, candidate: &str) -> Option<PatternMatch> {
        if self.invalid || candidate.trim().is_empty() {
            return None;
        }
        let candidate = Candidate::new(candidate);
        if let Some(m) = self.strategy.try_match(&self.context, &candidate, false) {
            return Some(m);
        }
        if !self.allow_fuzzy {
            return None;
        }
        trace!(candidate = candidate.text, "falling back to fuzzy matching");
        self.strategy.try_match(&self.context, &candidate, true)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.try_match(candidate).is_some()
    }

    /// Match every candidate and return the survivors, best first.
    ///
    /// Equal-quality matches keep their input order.
    pub fn rank<'a, I>(&self, candidates: I) -> Vec<RankedMatch<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranked: Vec<RankedMatch<'a>> = candidates
            .into_iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.try_match(candidate).map(|pattern_match| RankedMatch {
                    index,
                    candidate,
                    pattern_match,
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.pattern_match.compare_quality(&a.pattern_match));
        ranked
    }

    /// Release cached word breaks and similarity checkers.
    ///
    /// Calling it again does nothing. Calls to `try_match` already in flight
    /// on other threads finish normally and drop anything they cached.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        debug!(
            pattern = %self.pattern,
            cached = self.context.cached_candidates(),
            "disposing pattern matcher"
        );
        self.context.clear_cache();
        self.strategy.release();
    }

    /// Number of distinct candidates with cached word breaks.
    pub fn cached_candidates(&self) -> usize {
        self.context.cached_candidates()
    }

    fn assert_live(&self) {
        assert!(
            !self.is_disposed(),
            "pattern matcher for {:?} used after dispose",
            self.pattern
        );
    }
}

impl std::fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("pattern", &self.pattern)
            .field("strategy", &self.strategy.name())
            .field("invalid", &self.invalid)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Build a matcher; see [`PatternMatcher::new`].
pub fn create_matcher(
    pattern: &str,
    options: &MatcherOptions,
) -> Result<PatternMatcher, MatcherError> {
    PatternMatcher::new(pattern, options)
}
