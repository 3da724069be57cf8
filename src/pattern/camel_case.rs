//! Greedy alignment of pattern humps against candidate humps.

use std::collections::HashSet;

use crate::case_folding::CaseFolding;
use crate::span::TextSpan;

use super::kind::PatternMatchKind;

/// Outcome of a successful alignment. Spans are relative to the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CamelCaseResult {
    /// The first matched candidate hump is the candidate's first hump.
    pub from_start: bool,
    /// Once matching began, no candidate hump was skipped.
    pub contiguous: bool,
    /// The last matched candidate hump is the candidate's last hump.
    pub to_end: bool,
    pub matched_spans: Vec<TextSpan>,
}

impl CamelCaseResult {
    /// Map the alignment flags onto the camel-case band.
    ///
    /// | from_start | contiguous | to_end | kind                          |
    /// |------------|------------|--------|-------------------------------|
    /// | yes        | yes        | yes    | `CamelCaseExact`              |
    /// | yes        | yes        | no     | `CamelCaseContiguousFromStart`|
    /// | no         | yes        | yes    | `CamelCaseContiguous`         |
    /// | no         | yes        | no     | `CamelCaseSubstring`          |
    /// | yes        | no         | any    | `CamelCaseNonContiguousFromStart` |
    /// | no         | no         | any    | `CamelCaseNonContiguous`      |
    pub fn kind(&self) -> PatternMatchKind {
        match (self.from_start, self.contiguous, self.to_end) {
            (true, true, true) => PatternMatchKind::CamelCaseExact,
            (true, true, false) => PatternMatchKind::CamelCaseContiguousFromStart,
            (false, true, true) => PatternMatchKind::CamelCaseContiguous,
            (false, true, false) => PatternMatchKind::CamelCaseSubstring,
            (true, false, _) => PatternMatchKind::CamelCaseNonContiguousFromStart,
            (false, false, _) => PatternMatchKind::CamelCaseNonContiguous,
        }
    }
}

/// Bookkeeping shared by both alignment modes.
#[derive(Default)]
struct Alignment {
    first_hump: Option<usize>,
    last_hump: usize,
    contiguous: Option<bool>,
    spans: Vec<TextSpan>,
}

impl Alignment {
    fn record(&mut self, hump_index: usize, span: TextSpan) {
        self.first_hump.get_or_insert(hump_index);
        self.last_hump = hump_index;
        self.contiguous.get_or_insert(true);
        self.spans.push(span);
    }

    /// A candidate hump went by without contributing anything.
    fn skipped(&mut self) {
        if self.contiguous == Some(true) {
            self.contiguous = Some(false);
        }
    }

    fn finish(self, hump_count: usize) -> CamelCaseResult {
        CamelCaseResult {
            from_start: self.first_hump == Some(0),
            contiguous: self.contiguous.unwrap_or(false),
            to_end: self.last_hump + 1 == hump_count,
            matched_spans: self.spans,
        }
    }
}

/// Align an all-lowercase chunk as a run of hump initials.
///
/// Each candidate hump absorbs as long a prefix of the remaining chunk as it
/// can (case-insensitively); humps that absorb nothing are skipped. So
/// `cofipro` aligns with `Co`+`Fi`+`Pro` of `CodeFixProvider`. When the
/// longest take leaves the rest unplaceable, shorter takes and skips are
/// tried, so `cofa` still finds `Co`+`Fa` in `CodeFixFactory`.
pub(crate) fn match_lowercase(
    candidate: &[char],
    candidate_humps: &[TextSpan],
    chunk: &[char],
    folding: CaseFolding,
) -> Option<CamelCaseResult> {
    if chunk.is_empty() {
        return None;
    }
    let mut search = LowercaseSearch {
        candidate,
        humps: candidate_humps,
        chunk,
        folding,
        dead_ends: HashSet::new(),
        picks: Vec::new(),
    };
    if !search.place(0, 0) {
        return None;
    }

    let mut alignment = Alignment::default();
    let mut previous: Option<usize> = None;
    for (index, span) in search.picks {
        if previous.is_some_and(|p| index > p + 1) {
            alignment.skipped();
        }
        alignment.record(index, span);
        previous = Some(index);
    }
    Some(alignment.finish(candidate_humps.len()))
}

/// Depth-first placement of the lowercase chunk, longest take first.
struct LowercaseSearch<'a> {
    candidate: &'a [char],
    humps: &'a [TextSpan],
    chunk: &'a [char],
    folding: CaseFolding,
    /// `(hump, consumed)` states known to lead nowhere.
    dead_ends: HashSet<(usize, usize)>,
    picks: Vec<(usize, TextSpan)>,
}

impl LowercaseSearch<'_> {
    fn place(&mut self, hump: usize, consumed: usize) -> bool {
        if consumed == self.chunk.len() {
            return true;
        }
        if hump == self.humps.len() || self.dead_ends.contains(&(hump, consumed)) {
            return false;
        }
        let span = self.humps[hump];
        let longest = span
            .slice(self.candidate)
            .iter()
            .zip(&self.chunk[consumed..])
            .take_while(|&(&c, &p)| self.folding.eq(c, p))
            .count();
        for taken in (1..=longest).rev() {
            self.picks.push((hump, TextSpan::new(span.start, taken)));
            if self.place(hump + 1, consumed + taken) {
                return true;
            }
            self.picks.pop();
        }
        if self.place(hump + 1, consumed) {
            return true;
        }
        self.dead_ends.insert((hump, consumed));
        false
    }
}

/// Align the chunk's own humps (`CoFiPro` → `Co`, `Fi`, `Pro`) as prefixes of
/// successive candidate humps.
///
/// After a pattern hump matches only part of a candidate hump, the next
/// pattern hump may continue into the rest of that candidate hump, but only
/// when both pattern humps begin with a capital. That lets `SiUI` match
/// `SimpleUI`.
pub(crate) fn match_humps(
    candidate: &[char],
    candidate_humps: &[TextSpan],
    chunk: &[char],
    chunk_humps: &[TextSpan],
    ignore_case: bool,
    folding: CaseFolding,
) -> Option<CamelCaseResult> {
    if chunk_humps.is_empty() {
        return None;
    }
    let mut alignment = Alignment::default();
    let mut pattern_index = 0;

    for (index, &hump) in candidate_humps.iter().enumerate() {
        if pattern_index == chunk_humps.len() {
            break;
        }
        let mut remaining = hump;
        let mut matched_here = false;

        while let Some(&pattern_hump) = chunk_humps.get(pattern_index) {
            if matched_here {
                let previous = chunk_humps[pattern_index - 1];
                if !chunk[previous.start].is_uppercase() || !chunk[pattern_hump.start].is_uppercase()
                {
                    break;
                }
            }
            let wanted = pattern_hump.slice(chunk);
            if !starts_with(remaining.slice(candidate), wanted, ignore_case, folding) {
                break;
            }
            alignment.record(index, TextSpan::new(remaining.start, pattern_hump.length));
            remaining = remaining.skip(pattern_hump.length);
            matched_here = true;
            pattern_index += 1;
        }

        if !matched_here {
            alignment.skipped();
        }
    }

    (pattern_index == chunk_humps.len()).then(|| alignment.finish(candidate_humps.len()))
}

/// Prefix test used for hump comparisons.
pub(crate) fn starts_with(
    text: &[char],
    prefix: &[char],
    ignore_case: bool,
    folding: CaseFolding,
) -> bool {
    if prefix.len() > text.len() {
        return false;
    }
    if ignore_case {
        text.iter().zip(prefix).all(|(&a, &b)| folding.eq(a, b))
    } else {
        text.starts_with(prefix)
    }
}
