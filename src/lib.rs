//! Camel-case aware matching and ranking of identifier-like candidates.
//!
//! A [`PatternMatcher`] is built once per user-typed pattern and then asked
//! about each candidate (symbol names, file names, commands). Matches are
//! classified by [`PatternMatchKind`], which orders them for ranking.
//!
//! # Example
//!
//! ```rust
//! use humpmatch::{MatcherOptions, PatternMatchKind, PatternMatcher};
//!
//! let matcher = PatternMatcher::new("CFP", &MatcherOptions::new()).unwrap();
//!
//! let m = matcher.try_match("CodeFixProvider").unwrap();
//! assert_eq!(m.kind(), PatternMatchKind::CamelCaseExact);
//! assert!(m.is_case_sensitive());
//!
//! assert!(matcher.try_match("Console").is_none());
//!
//! // Dotted names, matched from the right.
//! let options = MatcherOptions::new().container(['.']);
//! let matcher = PatternMatcher::new("Gen.List", &options).unwrap();
//! assert!(matcher.matches("System.Collections.Generic.List"));
//! ```

mod case_folding;
mod error;
mod matcher;
mod options;
pub mod pattern;
mod span;
pub mod word_breaker;

pub use case_folding::CaseFolding;
pub use error::MatcherError;
pub use matcher::{PatternMatcher, RankedMatch, create_matcher};
pub use options::MatcherOptions;
pub use pattern::{PatternMatch, PatternMatchKind};
pub use span::{TextSpan, normalize_spans};
pub use word_breaker::{break_character_parts, break_words};
