//! Pattern compilation errors

use thiserror::Error;

/// A pattern string that cannot be compiled.
///
/// Offsets are byte offsets of the offending `%` in the pattern text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `%` is the last character of the pattern
    #[error("invalid pattern: trailing '%' at offset {offset}")]
    TrailingPercent { offset: usize },

    /// `%` followed by a character that is not a known placeholder code
    #[error("invalid pattern: unknown placeholder '{code}' at offset {offset}")]
    UnknownPlaceholder { code: String, offset: usize },

    /// Two placeholders with no literal between them
    #[error("invalid pattern: placeholders must be separated ('{previous}' followed by '{next}' at offset {offset})")]
    AdjacentPlaceholders {
        previous: String,
        next: String,
        offset: usize,
    },
}

impl PatternError {
    /// Create a trailing percent error
    pub fn trailing_percent(offset: usize) -> Self {
        Self::TrailingPercent { offset }
    }

    /// Create an unknown placeholder error
    pub fn unknown_placeholder(code: &str, offset: usize) -> Self {
        Self::UnknownPlaceholder {
            code: code.to_string(),
            offset,
        }
    }

    /// Create an adjacent placeholders error
    pub fn adjacent_placeholders(previous: &str, next: &str, offset: usize) -> Self {
        Self::AdjacentPlaceholders {
            previous: previous.to_string(),
            next: next.to_string(),
            offset,
        }
    }

    /// Byte offset of the `%` that triggered the error
    pub fn offset(&self) -> usize {
        match self {
            Self::TrailingPercent { offset }
            | Self::UnknownPlaceholder { offset, .. }
            | Self::AdjacentPlaceholders { offset, .. } => *offset,
        }
    }
}
