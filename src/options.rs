//! Matcher configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::case_folding::CaseFolding;

/// Options fixed at matcher construction.
///
/// Deserializable from TOML; every field is optional there:
///
/// ```toml
/// locale = "tr-TR"
/// allow_fuzzy_matching = true
/// container_split_characters = [".", ":"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Locale tag used for case-insensitive comparison.
    pub locale: Option<String>,

    /// Retry with edit-distance matching when nothing else matched.
    pub allow_fuzzy_matching: bool,

    /// Accept a case-insensitive occurrence anywhere in the candidate.
    pub allow_simple_substring_matching: bool,

    /// Report which candidate characters matched.
    pub include_matched_spans: bool,

    /// When present, pattern and candidate are split on these characters and
    /// matched part by part.
    pub container_split_characters: Option<BTreeSet<char>>,
}

impl MatcherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn fuzzy(mut self, allow: bool) -> Self {
        self.allow_fuzzy_matching = allow;
        self
    }

    pub fn simple_substring(mut self, allow: bool) -> Self {
        self.allow_simple_substring_matching = allow;
        self
    }

    pub fn matched_spans(mut self, include: bool) -> Self {
        self.include_matched_spans = include;
        self
    }

    pub fn container(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.container_split_characters = Some(separators.into_iter().collect());
        self
    }

    pub(crate) fn case_folding(&self) -> CaseFolding {
        CaseFolding::for_locale(self.locale.as_deref())
    }
}
