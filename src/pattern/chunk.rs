//! A single piece of pattern text ready for matching.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::case_folding::CaseFolding;
use crate::span::TextSpan;
use crate::word_breaker::character_parts;

use super::similarity::SimilarityChecker;

/// Pattern text plus the humps used for camel-case alignment.
///
/// The similarity checker is built on first fuzzy use and can be released
/// again when the owning matcher is disposed.
#[derive(Debug)]
pub struct TextChunk {
    text: String,
    chars: Vec<char>,
    hump_spans: Vec<TextSpan>,
    is_lowercase: bool,
    folding: CaseFolding,
    similarity: Mutex<Option<Arc<SimilarityChecker>>>,
}

impl TextChunk {
    pub fn new(text: &str, folding: CaseFolding) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let hump_spans = character_parts(&chars);
        let is_lowercase = !chars.iter().any(|c| c.is_uppercase());
        Self {
            text: text.to_string(),
            chars,
            hump_spans,
            is_lowercase,
            folding,
            similarity: Mutex::new(None),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character-part humps of the chunk text (`CoFiPro` → `Co`, `Fi`, `Pro`).
    pub fn hump_spans(&self) -> &[TextSpan] {
        &self.hump_spans
    }

    /// True when the chunk contains no uppercase letter.
    pub fn is_lowercase(&self) -> bool {
        self.is_lowercase
    }

    pub fn similarity_checker(&self) -> Arc<SimilarityChecker> {
        let mut slot = self.similarity.lock();
        slot.get_or_insert_with(|| Arc::new(SimilarityChecker::new(&self.text, self.folding)))
            .clone()
    }

    /// Drop the lazily built similarity checker.
    pub fn release(&self) {
        self.similarity.lock().take();
    }

    #[cfg(test)]
    pub(crate) fn has_similarity_checker(&self) -> bool {
        self.similarity.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_detection() {
        assert!(TextChunk::new("foo", CaseFolding::Invariant).is_lowercase());
        assert!(TextChunk::new("foo_1", CaseFolding::Invariant).is_lowercase());
        assert!(!TextChunk::new("fooBar", CaseFolding::Invariant).is_lowercase());
    }

    #[test]
    fn humps_are_character_parts() {
        let chunk = TextChunk::new("SiUI", CaseFolding::Invariant);
        assert_eq!(
            chunk.hump_spans(),
            &[TextSpan::new(0, 2), TextSpan::new(2, 1), TextSpan::new(3, 1)]
        );
        assert_eq!(chunk.len(), 4);
    }

    #[test]
    fn similarity_checker_is_lazy_and_releasable() {
        let chunk = TextChunk::new("Console", CaseFolding::Invariant);
        assert!(!chunk.has_similarity_checker());
        assert!(chunk.similarity_checker().are_similar("Consloe"));
        assert!(chunk.has_similarity_checker());
        chunk.release();
        assert!(!chunk.has_similarity_checker());
    }
}
