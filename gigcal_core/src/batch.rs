//! Matching a whole candidate set
//!
//! Every candidate is matched independently; a location that does not fit
//! the pattern is counted as failed and the batch carries on. Outcomes keep
//! the order the candidates were discovered in.

use crate::discovery::candidate_location;
use crate::error::MatchError;
use crate::location::{LocationRecord, MatchOptions};
use crate::pattern::Pattern;
use std::path::PathBuf;

/// Outcome of matching one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateOutcome {
    /// Candidate path as discovered
    pub path: PathBuf,
    /// Location string the pattern was matched against
    pub location: String,
    /// Decoded record or the reason the location did not match
    pub result: Result<LocationRecord, MatchError>,
}

impl CandidateOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(&self.result, Ok(record) if !record.consistent)
    }
}

/// Aggregate result of matching a candidate set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    /// Total candidates matched
    pub total: usize,
    /// Candidates that matched (consistent or not)
    pub successful: usize,
    /// Matched candidates whose record is inconsistent
    pub inconsistent: usize,
    /// Candidates that did not match
    pub failed: usize,
    /// Per-candidate outcomes, in candidate order
    pub outcomes: Vec<CandidateOutcome>,
}

impl BatchResult {
    pub fn records(&self) -> impl Iterator<Item = &LocationRecord> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&CandidateOutcome, &MatchError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }
}

/// Match every candidate against `pattern` and tally the outcomes.
pub fn match_candidates(
    pattern: &Pattern,
    candidates: &[PathBuf],
    options: &MatchOptions,
) -> BatchResult {
    let mut batch = BatchResult {
        total: candidates.len(),
        ..BatchResult::default()
    };

    for path in candidates {
        let location = candidate_location(path);
        let result = pattern.parse_location_with(&location, options);

        match &result {
            Ok(record) => {
                batch.successful += 1;
                if !record.consistent {
                    log::debug!("Inconsistent data in {location}");
                    batch.inconsistent += 1;
                }
            }
            Err(e) => {
                log::debug!("Error parsing location {location}: {e}");
                batch.failed += 1;
            }
        }

        batch.outcomes.push(CandidateOutcome {
            path: path.clone(),
            location,
            result,
        });
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_tally() {
        let pattern = Pattern::compile("%y/%M %m - %V").unwrap();
        let batch = match_candidates(
            &pattern,
            &candidates(&[
                "2024/March 03 - Hall",
                "2024/March 04 - Hall",
                "misc",
                "2025/April 04 - Club",
            ]),
            &MatchOptions::default(),
        );

        assert_eq!(batch.total, 4);
        assert_eq!(batch.successful, 3);
        assert_eq!(batch.inconsistent, 1);
        assert_eq!(batch.failed, 1);
        assert_eq!(batch.records().count(), 3);
    }

    #[test]
    fn test_outcomes_keep_candidate_order() {
        let pattern = Pattern::compile("%V").unwrap();
        let batch = match_candidates(
            &pattern,
            &candidates(&["b", "a", "c"]),
            &MatchOptions::default(),
        );

        let venues: Vec<_> = batch.records().map(|r| r.venue.as_str()).collect();
        assert_eq!(venues, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_failures_carry_location() {
        let pattern = Pattern::compile("%y/%d - %V").unwrap();
        let batch = match_candidates(
            &pattern,
            &candidates(&["2024/01 - Hall", "Hall"]),
            &MatchOptions::default(),
        );

        let failures: Vec<_> = batch.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0.location, "Hall");
        assert!(matches!(failures[0].1, MatchError::SeparatorNotFound { .. }));
        assert!(!failures[0].0.is_success());
    }

    #[test]
    fn test_empty_candidate_set() {
        let pattern = Pattern::compile("%V").unwrap();
        let batch = match_candidates(&pattern, &[], &MatchOptions::default());
        assert_eq!(batch, BatchResult::default());
    }
}
