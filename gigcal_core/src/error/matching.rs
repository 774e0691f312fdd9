//! Location matching errors

use crate::pattern::Placeholder;
use thiserror::Error;

/// A location that does not fit a compiled pattern.
///
/// These are raised per location and are meant to be tallied by the caller
/// rather than abort a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A literal of the pattern is not at the start of the remaining text
    #[error(
        "location does not match pattern: expected literal '{expected}' but not found in remaining string '{remaining}'"
    )]
    LiteralMismatch { expected: String, remaining: String },

    /// The literal bounding a placeholder could not be located
    #[error(
        "location does not match pattern: could not find separator '{literal}' for placeholder '{placeholder}'"
    )]
    SeparatorNotFound {
        placeholder: Placeholder,
        literal: String,
    },

    /// Text left over once every token of the pattern was consumed
    #[error("location has trailing characters not matched by pattern: '{remaining}'")]
    TrailingUnmatchedText { remaining: String },

    /// A numeric capture that is not a base-10 integer fitting in 64 bits
    /// (strict mode only)
    #[error("location has invalid numeric value '{value}' for placeholder '{placeholder}'")]
    InvalidNumber {
        placeholder: Placeholder,
        value: String,
    },
}

impl MatchError {
    /// Create a literal mismatch error
    pub fn literal_mismatch(expected: &str, remaining: &str) -> Self {
        Self::LiteralMismatch {
            expected: expected.to_string(),
            remaining: remaining.to_string(),
        }
    }

    /// Create a separator not found error
    pub fn separator_not_found(placeholder: Placeholder, literal: &str) -> Self {
        Self::SeparatorNotFound {
            placeholder,
            literal: literal.to_string(),
        }
    }

    /// Create a trailing unmatched text error
    pub fn trailing_unmatched(remaining: &str) -> Self {
        Self::TrailingUnmatchedText {
            remaining: remaining.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(placeholder: Placeholder, value: &str) -> Self {
        Self::InvalidNumber {
            placeholder,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_mismatch_error() {
        let error = MatchError::literal_mismatch(" - ", "x");
        assert!(error.to_string().contains("expected literal ' - '"));
        assert!(error.to_string().contains("remaining string 'x'"));
    }

    #[test]
    fn test_separator_not_found_error() {
        let error = MatchError::separator_not_found(Placeholder::Venue, ")");
        assert!(error.to_string().contains("separator ')'"));
        assert!(error.to_string().contains("placeholder '%V'"));
    }

    #[test]
    fn test_trailing_unmatched_error() {
        let error = MatchError::trailing_unmatched("extra");
        assert!(error.to_string().contains("'extra'"));
    }

    #[test]
    fn test_invalid_number_error() {
        let error = MatchError::invalid_number(Placeholder::Year, "20x4");
        assert!(error.to_string().contains("'20x4'"));
        assert!(error.to_string().contains("'%y'"));
    }
}
