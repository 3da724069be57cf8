//! Match results and their quality ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::span::{TextSpan, normalize_spans};

/// How a pattern matched a candidate, weakest first.
///
/// The derived ordering is load-bearing: merging keeps the minimum and
/// ranking sorts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternMatchKind {
    /// Accepted by the edit-distance similarity check.
    Fuzzy,
    /// The pattern occurs somewhere inside the candidate.
    Substring,
    /// Pattern humps matched candidate humps with gaps, not from the first hump.
    CamelCaseNonContiguous,
    /// Pattern humps matched candidate humps with gaps, starting at the first hump.
    CamelCaseNonContiguousFromStart,
    /// Consecutive candidate humps matched, neither first nor last.
    CamelCaseSubstring,
    /// Consecutive candidate humps matched, ending at the last hump.
    CamelCaseContiguous,
    /// Consecutive candidate humps matched from the first hump.
    CamelCaseContiguousFromStart,
    /// Every candidate hump matched, in order.
    CamelCaseExact,
    /// The candidate starts with the pattern.
    Prefix,
    /// The candidate equals the pattern, ignoring case.
    Exact,
}

impl PatternMatchKind {
    pub fn is_camel_case(self) -> bool {
        matches!(
            self,
            Self::CamelCaseNonContiguous
                | Self::CamelCaseNonContiguousFromStart
                | Self::CamelCaseSubstring
                | Self::CamelCaseContiguous
                | Self::CamelCaseContiguousFromStart
                | Self::CamelCaseExact
        )
    }

    /// Stable, lowercase name used by the command line output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fuzzy => "fuzzy",
            Self::Substring => "substring",
            Self::CamelCaseNonContiguous => "camel-non-contiguous",
            Self::CamelCaseNonContiguousFromStart => "camel-non-contiguous-from-start",
            Self::CamelCaseSubstring => "camel-substring",
            Self::CamelCaseContiguous => "camel-contiguous",
            Self::CamelCaseContiguousFromStart => "camel-contiguous-from-start",
            Self::CamelCaseExact => "camel-exact",
            Self::Prefix => "prefix",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for PatternMatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successful match of a pattern against one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    kind: PatternMatchKind,
    punctuation_stripped: bool,
    is_case_sensitive: bool,
    matched_spans: Option<Vec<TextSpan>>,
}

impl PatternMatch {
    pub fn new(
        kind: PatternMatchKind,
        punctuation_stripped: bool,
        is_case_sensitive: bool,
        matched_spans: Option<Vec<TextSpan>>,
    ) -> Self {
        Self {
            kind,
            punctuation_stripped,
            is_case_sensitive,
            matched_spans,
        }
    }

    pub fn kind(&self) -> PatternMatchKind {
        self.kind
    }

    /// True when non-alphanumeric pattern characters were ignored to get this match.
    pub fn punctuation_stripped(&self) -> bool {
        self.punctuation_stripped
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.is_case_sensitive
    }

    /// Matched character spans, relative to the whole candidate.
    ///
    /// `None` when spans were not requested, or for fuzzy matches.
    pub fn matched_spans(&self) -> Option<&[TextSpan]> {
        self.matched_spans.as_deref()
    }

    /// Combine two sub-matches: weakest kind, AND of case sensitivity,
    /// OR of punctuation stripping, union of spans.
    pub fn merge(self, other: PatternMatch) -> PatternMatch {
        let matched_spans = match (self.matched_spans, other.matched_spans) {
            (Some(a), Some(b)) => Some(normalize_spans(a.into_iter().chain(b))),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        PatternMatch {
            kind: self.kind.min(other.kind),
            punctuation_stripped: self.punctuation_stripped || other.punctuation_stripped,
            is_case_sensitive: self.is_case_sensitive && other.is_case_sensitive,
            matched_spans,
        }
    }

    /// Order by match quality; `Greater` is the better match.
    ///
    /// Kind decides first, then a case-sensitive match beats an insensitive
    /// one, then a match that needed no punctuation stripping wins.
    pub fn compare_quality(&self, other: &PatternMatch) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then(self.is_case_sensitive.cmp(&other.is_case_sensitive))
            .then(other.punctuation_stripped.cmp(&self.punctuation_stripped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PatternMatchKind::*;

    const ALL: [PatternMatchKind; 10] = [
        Fuzzy,
        Substring,
        CamelCaseNonContiguous,
        CamelCaseNonContiguousFromStart,
        CamelCaseSubstring,
        CamelCaseContiguous,
        CamelCaseContiguousFromStart,
        CamelCaseExact,
        Prefix,
        Exact,
    ];

    fn pm(kind: PatternMatchKind, stripped: bool, case_sensitive: bool) -> PatternMatch {
        PatternMatch::new(kind, stripped, case_sensitive, None)
    }

    #[test]
    fn kinds_are_ordered_weakest_first() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn camel_case_band() {
        let camel: Vec<_> = ALL.iter().filter(|k| k.is_camel_case()).collect();
        assert_eq!(camel.len(), 6);
        assert!(!Prefix.is_camel_case());
        assert!(!Substring.is_camel_case());
    }

    #[test]
    fn merge_takes_weakest_kind_for_every_pair() {
        for &a in &ALL {
            for &b in &ALL {
                let merged = pm(a, false, true).merge(pm(b, false, true));
                assert_eq!(merged.kind(), a.min(b));
            }
        }
    }

    #[test]
    fn merge_flags() {
        let merged = pm(Exact, false, true).merge(pm(Prefix, true, false));
        assert!(merged.punctuation_stripped());
        assert!(!merged.is_case_sensitive());

        let merged = pm(Exact, false, true).merge(pm(Prefix, false, true));
        assert!(!merged.punctuation_stripped());
        assert!(merged.is_case_sensitive());
    }

    #[test]
    fn merge_unions_spans() {
        let a = PatternMatch::new(Prefix, false, true, Some(vec![TextSpan::new(0, 3)]));
        let b = PatternMatch::new(
            Substring,
            false,
            true,
            Some(vec![TextSpan::new(6, 2), TextSpan::new(2, 2)]),
        );
        assert_eq!(
            a.merge(b).matched_spans(),
            Some(&[TextSpan::new(0, 4), TextSpan::new(6, 2)][..])
        );
    }

    #[test]
    fn merge_without_spans_stays_without_spans() {
        assert_eq!(pm(Exact, false, true).merge(pm(Fuzzy, false, false)).matched_spans(), None);
    }

    #[test]
    fn quality_order() {
        assert_eq!(
            pm(Exact, false, false).compare_quality(&pm(Prefix, false, true)),
            Ordering::Greater
        );
        assert_eq!(
            pm(Prefix, false, true).compare_quality(&pm(Prefix, false, false)),
            Ordering::Greater
        );
        assert_eq!(
            pm(Prefix, false, true).compare_quality(&pm(Prefix, true, true)),
            Ordering::Greater
        );
        assert_eq!(
            pm(Substring, true, false).compare_quality(&pm(Substring, true, false)),
            Ordering::Equal
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(CamelCaseExact.to_string(), "camel-exact");
        assert_eq!(Fuzzy.to_string(), "fuzzy");
    }
}
