use thiserror::Error;

/// Reasons a matcher cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    /// The pattern is empty or only whitespace.
    #[error("pattern must contain at least one non-whitespace character")]
    EmptyPattern,
    /// Container matching was requested without any separator characters.
    #[error("container split characters must not be empty")]
    InvalidSplitCharacters,
}
