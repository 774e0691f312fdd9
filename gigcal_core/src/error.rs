//! Error types for the gig-calendar core library
//!
//! Errors are grouped by the stage that raises them, so callers can decide
//! which ones abort a run and which ones are merely counted.

use thiserror::Error;

pub mod io;
pub mod matching;
pub mod pattern;

pub use self::io::{ScanError, ScanErrorKind};
pub use self::matching::MatchError;
pub use self::pattern::PatternError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gig-calendar core library
///
/// - Pattern errors: the pattern itself is malformed; abort the whole run
/// - Match errors: one location does not fit the pattern; tally and continue
/// - Scan errors: the directory tree could not be traversed; fatal to the scan
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed pattern
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Location does not fit the pattern
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Directory traversal failure
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl Error {
    /// Whether the error only concerns a single location
    pub fn is_per_location(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Scan(ScanError::from_std(source))
    }
}

impl From<walkdir::Error> for Error {
    fn from(source: walkdir::Error) -> Self {
        Self::Scan(ScanError::from(source))
    }
}
