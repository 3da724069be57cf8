//! Splits identifier-like text into humps.
//!
//! Two flavours are produced:
//!
//! * **word parts** (`break_words`): `"XMLHttpRequest"` → `XML`, `Http`,
//!   `Request`. A run of capitals stays together except that its last
//!   capital starts the next hump when a lowercase letter follows.
//! * **character parts** (`break_character_parts`): every uppercase letter
//!   starts a new part, so `"SiUI"` → `Si`, `U`, `I`. Used for pattern humps.
//!
//! Characters that are not letters or digits never belong to a hump.

use phf::{Set, phf_set};

use crate::span::TextSpan;

/// Characters in the Unicode punctuation categories (`Pc`, `Pd`, `Ps`, `Pe`,
/// `Pi`, `Pf`, `Po`) that identifiers and file names commonly contain.
/// ASCII symbols such as `$`, `+` and `|` are deliberately absent.
static PUNCTUATION: Set<char> = phf_set! {
    '!', '"', '#', '%', '&', '\'', '(', ')', '*', ',', '-', '.', '/', ':', ';',
    '?', '@', '[', '\\', ']', '_', '{', '}',
    '¡', '§', '«', '¶', '·', '»', '¿',
    '‐', '‑', '‒', '–', '—', '―', '‘', '’', '‚', '‛', '“', '”', '„', '‟',
    '†', '‡', '•', '…', '‰', '′', '″', '‹', '›',
    '、', '。', '「', '」', '『', '』', '【', '】', '〈', '〉', '《', '》', '・',
    '（', '）', '，', '．', '：', '；', '？', '！', '＿',
};

/// Test whether `ch` is a punctuation character.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Letters and digits are the only characters that can be part of a hump.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Break `text` into word parts.
pub fn break_words(text: &str) -> Vec<TextSpan> {
    let chars: Vec<char> = text.chars().collect();
    word_parts(&chars)
}

/// Break `text` into character parts.
pub fn break_character_parts(text: &str) -> Vec<TextSpan> {
    let chars: Vec<char> = text.chars().collect();
    character_parts(&chars)
}

pub(crate) fn word_parts(chars: &[char]) -> Vec<TextSpan> {
    break_parts(chars, false)
}

pub(crate) fn character_parts(chars: &[char]) -> Vec<TextSpan> {
    break_parts(chars, true)
}

/// Maximal runs of word characters, ignoring camel-case boundaries.
///
/// This is how a pattern is split into sub-word chunks.
pub(crate) fn word_runs(chars: &[char]) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if !is_word_char(chars[pos]) {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        spans.push(TextSpan::from_bounds(start, pos));
    }
    spans
}

fn break_parts(chars: &[char], every_upper: bool) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if !is_word_char(chars[pos]) {
            pos += 1;
            continue;
        }
        let start = pos;
        pos += 1;
        while pos < chars.len() && !starts_new_hump(chars, pos, every_upper) {
            pos += 1;
        }
        spans.push(TextSpan::from_bounds(start, pos));
    }
    spans
}

/// Does the hump containing `pos - 1` end before `pos`?
fn starts_new_hump(chars: &[char], pos: usize, every_upper: bool) -> bool {
    let prev = chars[pos - 1];
    let cur = chars[pos];

    if !is_word_char(cur) {
        return true;
    }
    if prev.is_numeric() != cur.is_numeric() {
        return true;
    }
    if !cur.is_uppercase() {
        return false;
    }
    if every_upper || !prev.is_uppercase() {
        return true;
    }
    // Inside a run of capitals: the last one belongs to the following word.
    chars.get(pos + 1).is_some_and(|next| next.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        word_parts(&chars)
            .iter()
            .map(|span| span.slice(&chars).iter().collect())
            .collect()
    }

    fn parts(s: &str) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        character_parts(&chars)
            .iter()
            .map(|span| span.slice(&chars).iter().collect())
            .collect()
    }

    #[test]
    fn empty_and_single() {
        assert!(break_words("").is_empty());
        assert_eq!(break_words("a"), vec![TextSpan::new(0, 1)]);
        assert_eq!(break_words("A"), vec![TextSpan::new(0, 1)]);
    }

    #[test]
    fn lower_to_upper() {
        assert_eq!(words("CodeFixProvider"), ["Code", "Fix", "Provider"]);
        assert_eq!(words("camelCase"), ["camel", "Case"]);
    }

    #[test]
    fn capital_run_followed_by_lowercase() {
        assert_eq!(words("XMLHttp"), ["XML", "Http"]);
        assert_eq!(words("IEnumerable"), ["I", "Enumerable"]);
        assert_eq!(words("SimpleUI"), ["Simple", "UI"]);
        assert_eq!(words("ALLCAPS"), ["ALLCAPS"]);
    }

    #[test]
    fn digit_transitions() {
        assert_eq!(words("Utf8Decoder"), ["Utf", "8", "Decoder"]);
        assert_eq!(words("v2beta10"), ["v", "2", "beta", "10"]);
    }

    #[test]
    fn punctuation_and_whitespace_split() {
        assert_eq!(words("foo_bar"), ["foo", "bar"]);
        assert_eq!(words("__init__"), ["init"]);
        assert_eq!(words("  get value  "), ["get", "value"]);
        assert_eq!(words("a.b-c"), ["a", "b", "c"]);
        assert!(words("...").is_empty());
    }

    #[test]
    fn character_parts_split_every_capital() {
        assert_eq!(parts("SiUI"), ["Si", "U", "I"]);
        assert_eq!(parts("CoFiPro"), ["Co", "Fi", "Pro"]);
        assert_eq!(parts("CFP"), ["C", "F", "P"]);
        assert_eq!(parts("fooBar"), ["foo", "Bar"]);
        assert_eq!(parts("UIElement"), ["U", "I", "Element"]);
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(words("ÄpfelÖl"), ["Äpfel", "Öl"]);
    }

    #[test]
    fn humps_cover_only_word_chars_without_overlap() {
        for s in ["get_XMLHttp2Request", "a  b", "__x__", "Foo.Bar::baz", "¿Qué?"] {
            let chars: Vec<char> = s.chars().collect();
            let spans = word_parts(&chars);
            for pair in spans.windows(2) {
                assert!(pair[0].end() <= pair[1].start, "{s}: {pair:?}");
            }
            for span in &spans {
                assert!(!span.is_empty());
                assert!(span.slice(&chars).iter().all(|&c| is_word_char(c)));
            }
            let covered: usize = spans.iter().map(|s| s.length).sum();
            let word_chars = chars.iter().filter(|&&c| is_word_char(c)).count();
            assert_eq!(covered, word_chars, "{s}");
        }
    }

    #[test]
    fn word_runs_ignore_case_changes() {
        let chars: Vec<char> = "fooBar baz_Qux".chars().collect();
        assert_eq!(
            word_runs(&chars),
            vec![TextSpan::new(0, 6), TextSpan::new(7, 3), TextSpan::new(11, 3)]
        );
    }

    #[test]
    fn punctuation_table() {
        for ch in ['.', '_', '-', ':', '(', '…', '「'] {
            assert!(is_punctuation(ch), "expected punctuation: {ch}");
        }
        for ch in ['$', '+', '|', 'a', '1', ' '] {
            assert!(!is_punctuation(ch), "unexpected punctuation: {ch}");
        }
    }
}
