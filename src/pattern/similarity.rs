//! Edit-distance similarity between a pattern chunk and a candidate.

use crate::case_folding::CaseFolding;

/// Chunks shorter than this never match fuzzily.
const MIN_FUZZY_LENGTH: usize = 3;

/// Chunks up to this length tolerate a single edit; longer ones two.
const SINGLE_EDIT_MAX_LENGTH: usize = 5;

/// Decides whether a candidate is a plausible misspelling of a chunk.
///
/// Distance is optimal-string-alignment Damerau-Levenshtein over case-folded
/// text, so a transposition counts as one edit.
#[derive(Debug)]
pub struct SimilarityChecker {
    source: String,
    source_len: usize,
    threshold: usize,
    folding: CaseFolding,
}

impl SimilarityChecker {
    pub fn new(text: &str, folding: CaseFolding) -> Self {
        let source = folding.fold_str(text);
        let source_len = source.chars().count();
        Self {
            source,
            source_len,
            threshold: threshold_for(source_len),
            folding,
        }
    }

    /// Largest number of edits still considered similar.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn are_similar(&self, candidate: &str) -> bool {
        if self.source_len < MIN_FUZZY_LENGTH {
            return false;
        }
        let candidate_len = candidate.chars().count();
        if candidate_len.abs_diff(self.source_len) > self.threshold {
            return false;
        }
        let candidate = self.folding.fold_str(candidate);
        strsim::osa_distance(&self.source, &candidate) <= self.threshold
    }
}

fn threshold_for(len: usize) -> usize {
    match len {
        0..MIN_FUZZY_LENGTH => 0,
        MIN_FUZZY_LENGTH..=SINGLE_EDIT_MAX_LENGTH => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similar(pattern: &str, candidate: &str) -> bool {
        SimilarityChecker::new(pattern, CaseFolding::Invariant).are_similar(candidate)
    }

    #[test]
    fn thresholds() {
        assert_eq!(SimilarityChecker::new("ab", CaseFolding::Invariant).threshold(), 0);
        assert_eq!(SimilarityChecker::new("abc", CaseFolding::Invariant).threshold(), 1);
        assert_eq!(SimilarityChecker::new("abcde", CaseFolding::Invariant).threshold(), 1);
        assert_eq!(SimilarityChecker::new("abcdef", CaseFolding::Invariant).threshold(), 2);
    }

    #[test]
    fn single_typo_on_short_words() {
        assert!(similar("cat", "cut"));
        assert!(similar("catt", "cat"));
        assert!(!similar("cat", "dog"));
    }

    #[test]
    fn transposition_is_one_edit() {
        assert!(similar("form", "from"));
        assert!(similar("Cosnole", "Console"));
    }

    #[test]
    fn ignores_case() {
        assert!(similar("CONSOLE", "consloe"));
    }

    #[test]
    fn length_difference_rejected_early() {
        assert!(!similar("abc", "abcdef"));
        assert!(similar("Dictionary", "Dictonry"));
        assert!(!similar("Dictionary", "Dict"));
    }

    #[test]
    fn very_short_chunks_never_match() {
        assert!(!similar("ab", "ab"));
        assert!(!similar("", ""));
    }
}
