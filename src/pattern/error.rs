// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern: unexpected character {found:?} at position {position}")]
    UnexpectedCharacter { position: usize, found: char },
    #[error("Pattern unit {index} contains a wildcard and has no concrete value")]
    ContainsWildcards { index: usize },
    #[error("Match unit contains a wildcard and has no concrete value")]
    WildcardUnit,
}

impl PatternError {
    /// True for errors raised while parsing pattern text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnexpectedCharacter { .. })
    }
}
