//! One separator-delimited piece of the user's pattern.

use crate::case_folding::CaseFolding;
use crate::word_breaker::word_runs;

use super::chunk::TextChunk;

/// The whole segment text as one chunk, plus one chunk per run of letters
/// and digits in it.
///
/// `"get value"` has the total chunk `"get value"` and the sub-chunks
/// `"get"` and `"value"`.
#[derive(Debug)]
pub struct PatternSegment {
    total_chunk: TextChunk,
    sub_chunks: Vec<TextChunk>,
    trimmed_len: usize,
}

impl PatternSegment {
    pub fn new(text: &str, folding: CaseFolding) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let sub_chunks = word_runs(&chars)
            .into_iter()
            .map(|span| {
                let word: String = span.slice(&chars).iter().collect();
                TextChunk::new(&word, folding)
            })
            .collect();
        Self {
            total_chunk: TextChunk::new(text, folding),
            sub_chunks,
            trimmed_len: text.trim().chars().count(),
        }
    }

    pub fn total_chunk(&self) -> &TextChunk {
        &self.total_chunk
    }

    pub fn sub_chunks(&self) -> &[TextChunk] {
        &self.sub_chunks
    }

    /// A segment with nothing to match against.
    pub fn is_invalid(&self) -> bool {
        self.trimmed_len == 0 || self.sub_chunks.is_empty()
    }

    /// True when matching the sub-chunks means something was thrown away:
    /// there are several of them, or the single one lost surrounding punctuation.
    pub fn strips_punctuation(&self) -> bool {
        match self.sub_chunks.as_slice() {
            [only] => only.len() != self.trimmed_len,
            _ => true,
        }
    }

    /// True when the sub-chunk pass would just repeat the total-chunk match.
    pub(crate) fn sub_chunks_redundant(&self) -> bool {
        matches!(self.sub_chunks.as_slice(), [only] if only.text() == self.total_chunk.text())
    }

    pub(crate) fn release(&self) {
        self.total_chunk.release();
        for chunk in &self.sub_chunks {
            chunk.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> PatternSegment {
        PatternSegment::new(text, CaseFolding::Invariant)
    }

    fn sub_texts(segment: &PatternSegment) -> Vec<&str> {
        segment.sub_chunks().iter().map(|c| c.text()).collect()
    }

    #[test]
    fn splits_on_non_word_characters() {
        assert_eq!(sub_texts(&seg("get value")), ["get", "value"]);
        assert_eq!(sub_texts(&seg("foo_bar")), ["foo", "bar"]);
        assert_eq!(sub_texts(&seg("FooBar")), ["FooBar"]);
    }

    #[test]
    fn total_chunk_keeps_text_verbatim() {
        assert_eq!(seg(" foo_bar").total_chunk().text(), " foo_bar");
    }

    #[test]
    fn invalid_segments() {
        assert!(seg("").is_invalid());
        assert!(seg("   ").is_invalid());
        assert!(seg("...").is_invalid());
        assert!(!seg("a").is_invalid());
    }

    #[test]
    fn punctuation_stripping() {
        assert!(!seg("Foo").strips_punctuation());
        assert!(seg("_foo").strips_punctuation());
        assert!(seg("foo bar").strips_punctuation());
    }

    #[test]
    fn redundant_sub_chunks() {
        assert!(seg("Foo").sub_chunks_redundant());
        assert!(!seg("foo_bar").sub_chunks_redundant());
        assert!(!seg("_foo").sub_chunks_redundant());
    }
}
