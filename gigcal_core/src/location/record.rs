//! Decoded location metadata and the capture decoder.

use super::MatchOptions;
use super::month::month_number;
use crate::error::MatchError;
use crate::pattern::Placeholder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event metadata decoded from one location.
///
/// Fields whose placeholder is absent from the pattern keep their default
/// (zero, empty string, empty list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub month_name: String,
    pub performers: Vec<String>,
    pub venue: String,
    pub promoters: Vec<String>,
    /// False when repeated captures disagree, or the month name is unknown
    /// or contradicts the numeric month.
    pub consistent: bool,
}

impl LocationRecord {
    /// Decode raw captures, in pattern order, into a record.
    pub(crate) fn decode(
        captures: &[(Placeholder, &str)],
        options: &MatchOptions,
    ) -> Result<Self, MatchError> {
        let mut record = Self {
            consistent: true,
            ..Self::default()
        };
        let mut first_seen: HashMap<Placeholder, &str> = HashMap::new();

        for &(placeholder, value) in captures {
            match first_seen.get(&placeholder) {
                Some(first) if *first != value => {
                    log::trace!("{placeholder} captured '{value}' after '{first}'");
                    record.consistent = false;
                }
                Some(_) => {}
                None => {
                    first_seen.insert(placeholder, value);
                }
            }

            match placeholder {
                Placeholder::Year => record.year = decode_number(placeholder, value, options)?,
                Placeholder::Month => record.month = decode_number(placeholder, value, options)?,
                Placeholder::Day => record.day = decode_number(placeholder, value, options)?,
                Placeholder::MonthName => record.month_name = value.to_string(),
                Placeholder::Performers => record.performers = decode_list(value),
                Placeholder::Venue => record.venue = value.trim().to_string(),
                Placeholder::Promoters => record.promoters = decode_list(value),
            }
        }

        if !record.month_name.is_empty() {
            match month_number(&record.month_name) {
                Some(number) => {
                    if first_seen.contains_key(&Placeholder::Month) && record.month != number {
                        record.consistent = false;
                    }
                }
                None => record.consistent = false,
            }
        }

        Ok(record)
    }
}

/// Malformed numbers, and numbers that do not fit in 64 bits, decode as
/// zero unless strict numeric mode is on.
///
/// Empty captures always decode as zero.
fn decode_number(
    placeholder: Placeholder,
    value: &str,
    options: &MatchOptions,
) -> Result<i64, MatchError> {
    if value.is_empty() {
        return Ok(0);
    }

    if options.strict_numeric {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MatchError::invalid_number(placeholder, value));
        }
        return value
            .parse()
            .map_err(|_| MatchError::invalid_number(placeholder, value));
    }

    Ok(value.parse().unwrap_or(0))
}

fn decode_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(|part| part.trim().to_string()).collect()
}
