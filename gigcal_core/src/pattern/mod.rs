//! Location pattern compiler and validator.
//!
//! A pattern is a run of literal text interleaved with placeholders that
//! name the fields to capture from a directory path:
//!
//! | Token | Meaning                                   |
//! |-------|-------------------------------------------|
//! | `%y`  | Numeric year                              |
//! | `%m`  | Numeric month                             |
//! | `%d`  | Numeric day of the month                  |
//! | `%M`  | English month name                        |
//! | `%P`  | Comma separated performers (greedy)       |
//! | `%V`  | Venue name                                |
//! | `%p`  | Comma separated promoters (greedy)        |
//!
//! Anything else is literal text that must appear verbatim in the location.
//! Two placeholders must always be separated by at least one literal
//! character, otherwise the boundary between them cannot be recovered.
//!
//! ```rust
//! use gigcal_core::pattern::{Pattern, Placeholder, Token};
//!
//! let pattern = Pattern::compile("%y/%d - %P").unwrap();
//! assert_eq!(pattern.tokens()[0], Token::Placeholder(Placeholder::Year));
//! assert_eq!(pattern.tokens()[1], Token::Literal("/".to_string()));
//! assert_eq!(pattern.separator_depth(false), 2);
//! ```

mod placeholder;

pub use placeholder::{PLACEHOLDER_MARKER, Placeholder};

use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Separator between directory levels in a pattern.
pub const PATH_SEPARATOR: char = '/';

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Verbatim text; never empty and never contains `%`
    Literal(String),
    /// A typed field to capture
    Placeholder(Placeholder),
}

impl Token {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Literal(_) => None,
            Self::Placeholder(placeholder) => Some(*placeholder),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// A compiled location pattern.
///
/// Immutable once compiled; compile once and reuse it for every location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Compile and validate a pattern string.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            source: pattern.to_string(),
            tokens: tokenize(pattern, true)?,
        })
    }

    /// Tokenize without the adjacency check.
    ///
    /// Used when matching against a pattern that was never validated: only
    /// a trailing `%` or an unknown code make such a pattern unusable.
    pub(crate) fn compile_lenient(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            source: pattern.to_string(),
            tokens: tokenize(pattern, false)?,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Placeholders in pattern order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.tokens.iter().filter_map(Token::as_placeholder)
    }

    /// Number of directory levels below the scan root a location spans.
    ///
    /// See [`separator_depth`].
    pub fn separator_depth(&self, include_parent: bool) -> usize {
        separator_depth(&self.source, include_parent)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Check that a pattern string only uses known, separated placeholders.
///
/// The empty pattern is valid and matches only the empty location.
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    tokenize(pattern, true).map(|_| ())
}

/// Directory depth implied by a pattern: one level per `/` plus one.
///
/// When the scan root's own name is part of each location
/// (`include_parent`), the candidates sit one level shallower. The empty
/// pattern spans no levels.
pub fn separator_depth(pattern: &str, include_parent: bool) -> usize {
    if pattern.is_empty() {
        return 0;
    }

    let depth = pattern.matches(PATH_SEPARATOR).count() + 1;
    if include_parent {
        depth.saturating_sub(1)
    } else {
        depth
    }
}

fn tokenize(pattern: &str, reject_adjacent: bool) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut previous: Option<Placeholder> = None;
    let mut chars = pattern.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != PLACEHOLDER_MARKER {
            previous = None;
            continue;
        }

        if reject_adjacent && let Some(previous) = previous {
            let next: String = pattern[offset..].chars().take(2).collect();
            return Err(PatternError::adjacent_placeholders(
                previous.as_str(),
                &next,
                offset,
            ));
        }

        if offset > literal_start {
            tokens.push(Token::Literal(pattern[literal_start..offset].to_string()));
        }

        let Some((_, code)) = chars.next() else {
            return Err(PatternError::trailing_percent(offset));
        };
        let placeholder = Placeholder::from_code(code).ok_or_else(|| {
            PatternError::unknown_placeholder(&format!("{PLACEHOLDER_MARKER}{code}"), offset)
        })?;

        tokens.push(Token::Placeholder(placeholder));
        previous = Some(placeholder);
        literal_start = offset + PLACEHOLDER_MARKER.len_utf8() + code.len_utf8();
    }

    if literal_start < pattern.len() {
        tokens.push(Token::Literal(pattern[literal_start..].to_string()));
    }

    Ok(tokens)
}
