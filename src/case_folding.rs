//! Locale-sensitive, per-character case folding.

/// How characters are folded for case-insensitive comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// Unicode simple lowercase mapping.
    #[default]
    Invariant,
    /// Turkish and Azerbaijani: dotted and dotless `i` are distinct letters.
    Turkic,
}

impl CaseFolding {
    /// Pick the folding for a locale tag such as `"en-US"` or `"tr"`.
    ///
    /// Only the primary language subtag is inspected.
    pub fn for_locale(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Invariant;
        };
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case("tr") || language.eq_ignore_ascii_case("az") {
            Self::Turkic
        } else {
            Self::Invariant
        }
    }

    /// Fold a single character.
    ///
    /// A character whose lowercase form is more than one character folds to
    /// itself, so positions never shift.
    pub fn fold(self, ch: char) -> char {
        if self == Self::Turkic {
            match ch {
                'I' => return 'ı',
                'İ' => return 'i',
                _ => {}
            }
        }
        if ch.is_ascii() {
            return ch.to_ascii_lowercase();
        }
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => ch,
        }
    }

    /// Compare two characters ignoring case.
    pub fn eq(self, a: char, b: char) -> bool {
        a == b || self.fold(a) == self.fold(b)
    }

    /// Fold a whole string.
    pub fn fold_str(self, text: &str) -> String {
        text.chars().map(|c| self.fold(c)).collect()
    }
}
