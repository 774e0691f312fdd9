//! Gig Calendar Core Library
//!
//! Extracts event metadata (date, performers, venue, promoters) from the
//! directory names of a gig photo archive, using a small placeholder
//! pattern language, and locates the directories those names live in.
//!
//! ```rust
//! use gigcal_core::{Pattern, parse_location};
//!
//! let record = parse_location("%y/%d - %P (%V)", "2024/24 - Band, Support (Club)").unwrap();
//! assert_eq!(record.year, 2024);
//! assert_eq!(record.performers, vec!["Band", "Support"]);
//! assert_eq!(record.venue, "Club");
//!
//! let pattern = Pattern::compile("%y/%d - %P (%V)").unwrap();
//! assert_eq!(pattern.separator_depth(false), 2);
//! ```

pub mod batch;
pub mod discovery;
pub mod error;
pub mod location;
pub mod pattern;

// Re-export main types
pub use batch::{BatchResult, CandidateOutcome, match_candidates};
pub use discovery::{
    IgnoreFilter, ScanOptions, ScanReport, TreeScanner, candidate_location, scan_at_depth,
};
pub use error::{Error, MatchError, PatternError, Result, ScanError, ScanErrorKind};
pub use location::{LocationRecord, MatchOptions, parse_location};
pub use pattern::{Pattern, Placeholder, Token, separator_depth, validate};
