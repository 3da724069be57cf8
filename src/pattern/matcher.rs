//! The chunk rule cascade and segment matching.
//!
//! All positions are **character** (not byte) indices into the candidate.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::case_folding::CaseFolding;
use crate::span::TextSpan;
use crate::word_breaker::{is_punctuation, word_parts};

use super::camel_case::{self, CamelCaseResult, starts_with};
use super::chunk::TextChunk;
use super::kind::{PatternMatch, PatternMatchKind};
use super::segment::PatternSegment;

/// A candidate string decoded once for the duration of one match.
pub(crate) struct Candidate<'a> {
    pub text: &'a str,
    pub chars: Vec<char>,
}

impl<'a> Candidate<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().collect(),
        }
    }
}

/// Per-matcher state shared by every strategy: comparison settings and the
/// word-break cache.
pub(crate) struct MatchContext {
    folding: CaseFolding,
    allow_simple_substring: bool,
    include_spans: bool,
    word_cache: Mutex<HashMap<String, Arc<[TextSpan]>>>,
}

impl MatchContext {
    pub fn new(folding: CaseFolding, allow_simple_substring: bool, include_spans: bool) -> Self {
        Self {
            folding,
            allow_simple_substring,
            include_spans,
            word_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Word humps of `candidate`, computed once per distinct string.
    ///
    /// The lock covers only the lookup and the insert, never the breaking.
    fn word_spans(&self, candidate: &Candidate<'_>) -> Arc<[TextSpan]> {
        if let Some(spans) = self.word_cache.lock().get(candidate.text) {
            return spans.clone();
        }
        trace!(candidate = candidate.text, "word break cache miss");
        let spans: Arc<[TextSpan]> = word_parts(&candidate.chars).into();
        self.word_cache
            .lock()
            .entry(candidate.text.to_string())
            .or_insert(spans)
            .clone()
    }

    pub fn cached_candidates(&self) -> usize {
        self.word_cache.lock().len()
    }

    pub fn clear_cache(&self) {
        self.word_cache.lock().clear();
    }

    /// Match a segment: first its whole text as one chunk, then every
    /// sub-chunk independently, merging the results.
    pub fn match_segment(
        &self,
        candidate: &Candidate<'_>,
        segment: &PatternSegment,
        fuzzy: bool,
        offset: usize,
    ) -> Option<PatternMatch> {
        if let Some(m) = self.match_chunk(candidate, segment.total_chunk(), false, fuzzy, offset) {
            return Some(m);
        }
        if segment.sub_chunks_redundant() {
            return None;
        }

        let stripped = segment.strips_punctuation();
        let mut merged: Option<PatternMatch> = None;
        for chunk in segment.sub_chunks() {
            let m = self.match_chunk(candidate, chunk, stripped, fuzzy, offset)?;
            merged = Some(match merged {
                Some(prev) => prev.merge(m),
                None => m,
            });
        }
        merged
    }

    /// Match one chunk against the candidate.
    ///
    /// With `fuzzy` set only the similarity check runs. Otherwise the rules
    /// are tried strongest first and the first hit wins. Spans are shifted by
    /// `offset` so they are relative to the full candidate.
    pub fn match_chunk(
        &self,
        candidate: &Candidate<'_>,
        chunk: &TextChunk,
        punctuation_stripped: bool,
        fuzzy: bool,
        offset: usize,
    ) -> Option<PatternMatch> {
        if fuzzy {
            return chunk
                .similarity_checker()
                .are_similar(candidate.text)
                .then(|| PatternMatch::new(PatternMatchKind::Fuzzy, punctuation_stripped, false, None));
        }
        self.match_chunk_exactly(candidate, chunk, punctuation_stripped, offset)
    }

    fn match_chunk_exactly(
        &self,
        candidate: &Candidate<'_>,
        chunk: &TextChunk,
        punctuation_stripped: bool,
        offset: usize,
    ) -> Option<PatternMatch> {
        let text = candidate.chars.as_slice();
        let pattern = chunk.chars();
        if pattern.is_empty() || text.is_empty() {
            return None;
        }
        let found = |kind, start: usize, case_sensitive| {
            self.build(kind, punctuation_stripped, case_sensitive, offset, || {
                vec![TextSpan::new(start, pattern.len())]
            })
        };

        let insensitive_index = self.index_of(text, pattern, true);

        if insensitive_index == Some(0) {
            let case_sensitive = text.starts_with(pattern);
            let kind = if pattern.len() == text.len() {
                PatternMatchKind::Exact
            } else {
                PatternMatchKind::Prefix
            };
            return Some(found(kind, 0, case_sensitive));
        }

        if self.allow_simple_substring
            && let Some(index) = insensitive_index
        {
            return Some(found(
                PatternMatchKind::Substring,
                index,
                text[index..].starts_with(pattern),
            ));
        }

        if chunk.is_lowercase() {
            if let Some(index) = insensitive_index {
                // A lowercase chunk only counts as a substring at a word start.
                if is_punctuation(text[index - 1]) || is_punctuation(pattern[0]) {
                    return Some(found(
                        PatternMatchKind::Substring,
                        index,
                        text[index..].starts_with(pattern),
                    ));
                }
                let humps = self.word_spans(candidate);
                if let Some(hump) = humps
                    .iter()
                    .find(|hump| starts_with(&text[hump.start..], pattern, true, self.folding))
                {
                    return Some(found(
                        PatternMatchKind::Substring,
                        hump.start,
                        text[hump.start..].starts_with(pattern),
                    ));
                }
            }
        } else if let Some(index) = self.index_of(text, pattern, false) {
            return Some(found(PatternMatchKind::Substring, index, true));
        }

        if let Some(m) = self.match_camel_case(candidate, chunk, punctuation_stripped, offset) {
            return Some(m);
        }

        if chunk.is_lowercase()
            && pattern.len() < text.len()
            && let Some(index) = insensitive_index
            && text[index].is_uppercase()
        {
            return Some(found(PatternMatchKind::Substring, index, false));
        }

        None
    }

    fn match_camel_case(
        &self,
        candidate: &Candidate<'_>,
        chunk: &TextChunk,
        punctuation_stripped: bool,
        offset: usize,
    ) -> Option<PatternMatch> {
        let humps = self.word_spans(candidate);
        let text = candidate.chars.as_slice();

        let (result, case_sensitive) = if chunk.is_lowercase() {
            (
                camel_case::match_lowercase(text, &humps, chunk.chars(), self.folding)?,
                false,
            )
        } else {
            let aligned = |ignore_case| {
                camel_case::match_humps(
                    text,
                    &humps,
                    chunk.chars(),
                    chunk.hump_spans(),
                    ignore_case,
                    self.folding,
                )
            };
            match aligned(false) {
                Some(result) => (result, true),
                None => (aligned(true)?, false),
            }
        };

        let kind = result.kind();
        let CamelCaseResult { matched_spans, .. } = result;
        Some(self.build(kind, punctuation_stripped, case_sensitive, offset, || {
            matched_spans
        }))
    }

    fn build(
        &self,
        kind: PatternMatchKind,
        punctuation_stripped: bool,
        case_sensitive: bool,
        offset: usize,
        spans: impl FnOnce() -> Vec<TextSpan>,
    ) -> PatternMatch {
        let spans = self
            .include_spans
            .then(|| spans().into_iter().map(|s| s.shifted(offset)).collect());
        PatternMatch::new(kind, punctuation_stripped, case_sensitive, spans)
    }

    /// First index at which `pattern` occurs in `text`.
    fn index_of(&self, text: &[char], pattern: &[char], ignore_case: bool) -> Option<usize> {
        if pattern.len() > text.len() {
            return None;
        }
        (0..=text.len() - pattern.len())
            .find(|&start| starts_with(&text[start..], pattern, ignore_case, self.folding))
    }
}
