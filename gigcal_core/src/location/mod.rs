//! Location matcher
//!
//! Walks the tokens of a compiled [`Pattern`] left to right against a
//! location string, without backtracking. Each placeholder's capture ends
//! at the next literal of the pattern: the last occurrence of that literal
//! for the greedy list placeholders (`%P`, `%p`), the first occurrence for
//! everything else.
//!
//! Trailing placeholders are optional: once only placeholders remain after
//! a literal, a location that simply stops is still a match and the
//! missing fields are captured empty. This is what lets
//! `%P (%V) %p` parse `Band (Venue)` with no promoters.

mod month;
mod record;
mod split;

pub use month::{month_name, month_number};
pub use record::LocationRecord;
pub use split::find_split;

use crate::error::{MatchError, Result};
use crate::pattern::{Pattern, Placeholder, Token};

/// Decoding options for [`Pattern::parse_location_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Reject numeric captures that are not plain digits instead of
    /// decoding them as zero.
    pub strict_numeric: bool,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_numeric(mut self, strict: bool) -> Self {
        self.strict_numeric = strict;
        self
    }
}

/// Parse a location with a pattern string that may not have been validated.
///
/// A trailing `%` or an unknown placeholder fail with a pattern error;
/// adjacent placeholders are tolerated (the first one captures the rest of
/// the text, the next one captures nothing).
pub fn parse_location(pattern: &str, location: &str) -> Result<LocationRecord> {
    let pattern = Pattern::compile_lenient(pattern)?;
    Ok(pattern.parse_location(location)?)
}

impl Pattern {
    /// Match a location against this pattern with default options.
    pub fn parse_location(&self, location: &str) -> std::result::Result<LocationRecord, MatchError> {
        self.parse_location_with(location, &MatchOptions::default())
    }

    /// Match a location against this pattern.
    pub fn parse_location_with(
        &self,
        location: &str,
        options: &MatchOptions,
    ) -> std::result::Result<LocationRecord, MatchError> {
        let captures = capture(self.tokens(), location)?;
        LocationRecord::decode(&captures, options)
    }
}

/// Split `location` into raw placeholder captures, in pattern order.
fn capture<'a>(
    tokens: &[Token],
    location: &'a str,
) -> std::result::Result<Vec<(Placeholder, &'a str)>, MatchError> {
    let mut captures = Vec::new();
    let mut remaining = location;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(literal) => {
                if let Some(rest) = remaining.strip_prefix(literal.as_str()) {
                    remaining = rest;
                    continue;
                }

                let tail = &tokens[index + 1..];
                if is_optional_tail(tail) && literal.starts_with(remaining) {
                    captures.extend(tail.iter().filter_map(Token::as_placeholder).map(|p| (p, "")));
                    remaining = "";
                    break;
                }

                return Err(MatchError::literal_mismatch(literal, remaining));
            }
            Token::Placeholder(placeholder) => {
                let next_literal = tokens[index + 1..]
                    .iter()
                    .enumerate()
                    .find_map(|(offset, t)| t.as_literal().map(|l| (index + 1 + offset, l)));

                let value = match next_literal {
                    None => std::mem::take(&mut remaining),
                    Some((literal_index, literal)) => {
                        let split = find_split(remaining, literal, placeholder.is_greedy())
                            .or_else(|| {
                                // Nothing but placeholders (or nothing) after the literal:
                                // take the rest and let the literal itself decide.
                                tokens[literal_index + 1..]
                                    .iter()
                                    .all(Token::is_placeholder)
                                    .then_some(remaining.len())
                            })
                            .ok_or_else(|| MatchError::separator_not_found(*placeholder, literal))?;
                        let (value, rest) = remaining.split_at(split);
                        remaining = rest;
                        value
                    }
                };

                captures.push((*placeholder, value));
            }
        }
    }

    if !remaining.is_empty() {
        return Err(MatchError::trailing_unmatched(remaining));
    }

    Ok(captures)
}

/// Whether the tokens are all placeholders, and there is at least one.
fn is_optional_tail(tokens: &[Token]) -> bool {
    !tokens.is_empty() && tokens.iter().all(Token::is_placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, PatternError};

    const FULL_PATTERN: &str = "%y/%m - %M %y/%d - %P (%V) %p";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_match() {
        let record = parse_location(
            FULL_PATTERN,
            "2024/01 - January 2024/24 - Performer1, Performer2 (Venue Name) Promoter1, Promoter2",
        )
        .unwrap();

        assert_eq!(
            record,
            LocationRecord {
                year: 2024,
                month: 1,
                day: 24,
                month_name: "January".to_string(),
                performers: strings(&["Performer1", "Performer2"]),
                venue: "Venue Name".to_string(),
                promoters: strings(&["Promoter1", "Promoter2"]),
                consistent: true,
            }
        );
    }

    #[test]
    fn test_missing_optional_promoters() {
        let record = parse_location(
            FULL_PATTERN,
            "2024/01 - January 2024/24 - Liv Austin, Charllote Campbell, Beth Keeping (Bar Topolski)",
        )
        .unwrap();

        assert_eq!(
            record.performers,
            strings(&["Liv Austin", "Charllote Campbell", "Beth Keeping"])
        );
        assert_eq!(record.venue, "Bar Topolski");
        assert!(record.promoters.is_empty());
        assert!(record.consistent);
    }

    #[test]
    fn test_missing_optional_promoters_with_separator() {
        let record = parse_location(FULL_PATTERN, "2024/01 - January 2024/24 - A (V) ").unwrap();
        assert_eq!(record.venue, "V");
        assert!(record.promoters.is_empty());
        assert!(record.consistent);
    }

    #[test]
    fn test_simple_pattern_missing_optional_end() {
        let record = parse_location("%P %V %p", "Perf Venue").unwrap();

        assert_eq!(record.performers, strings(&["Perf"]));
        assert_eq!(record.venue, "Venue");
        assert!(record.promoters.is_empty());
    }

    #[test]
    fn test_repeated_year_last_wins() {
        let record = parse_location("%y/%m - %M %y/%d", "2023/01 - January 2024/24").unwrap();
        assert_eq!(record.year, 2024);
        assert!(!record.consistent);
    }

    #[test]
    fn test_month_name_consistency() {
        assert!(!parse_location("%M %m", "March 04").unwrap().consistent);
        assert!(parse_location("%M %m", "March 03").unwrap().consistent);
        assert!(parse_location("%M %m", "march 03").unwrap().consistent);
    }

    #[test]
    fn test_greedy_performers_span_separators() {
        let record = parse_location("%P - %V", "A - B - Venue").unwrap();
        assert_eq!(record.performers, strings(&["A - B"]));
        assert_eq!(record.venue, "Venue");
    }

    #[test]
    fn test_non_greedy_venue_stops_at_first_separator() {
        let record = parse_location("%V - %P", "Venue - A - B").unwrap();
        assert_eq!(record.venue, "Venue");
        assert_eq!(record.performers, strings(&["A - B"]));
    }

    #[test]
    fn test_missing_separator_before_optional_tail() {
        // Only placeholders follow the "/", so the year swallows everything.
        let pattern = Pattern::compile("%y/%m").unwrap();
        let record = pattern.parse_location("2024-01").unwrap();
        assert_eq!((record.year, record.month), (0, 0));

        let strict = MatchOptions::new().with_strict_numeric(true);
        assert_eq!(
            pattern.parse_location_with("2024-01", &strict),
            Err(MatchError::invalid_number(Placeholder::Year, "2024-01"))
        );
    }

    #[test]
    fn test_literal_mismatch() {
        let error = parse_location("gig %y", "show 2024").unwrap_err();
        assert!(matches!(
            error,
            Error::Match(MatchError::LiteralMismatch { ref expected, ref remaining })
                if expected == "gig " && remaining == "show 2024"
        ));
    }

    #[test]
    fn test_last_literal_is_required() {
        let pattern = Pattern::compile("%V!").unwrap();
        assert_eq!(
            pattern.parse_location("Venue"),
            Err(MatchError::literal_mismatch("!", ""))
        );

        let pattern = Pattern::compile("%y/%V)").unwrap();
        assert_eq!(
            pattern.parse_location("2024/Hall"),
            Err(MatchError::literal_mismatch(")", ""))
        );
    }

    #[test]
    fn test_separator_not_found() {
        let pattern = Pattern::compile("%y/%m/%d").unwrap();
        assert_eq!(
            pattern.parse_location("2024"),
            Err(MatchError::separator_not_found(Placeholder::Year, "/"))
        );
    }

    #[test]
    fn test_trailing_unmatched_text() {
        let pattern = Pattern::compile("%y/%m!").unwrap();
        assert_eq!(
            pattern.parse_location("2024/01!extra"),
            Err(MatchError::trailing_unmatched("extra"))
        );
    }

    #[test]
    fn test_literal_only_pattern() {
        let pattern = Pattern::compile("photos").unwrap();
        assert!(pattern.parse_location("photos").unwrap().consistent);
        assert_eq!(
            pattern.parse_location("photos2"),
            Err(MatchError::trailing_unmatched("2"))
        );
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = Pattern::compile("").unwrap();
        let record = pattern.parse_location("").unwrap();
        assert_eq!(
            record,
            LocationRecord {
                consistent: true,
                ..LocationRecord::default()
            }
        );
        assert_eq!(
            pattern.parse_location("x"),
            Err(MatchError::trailing_unmatched("x"))
        );
    }

    #[test]
    fn test_unvalidated_pattern_errors() {
        assert!(matches!(
            parse_location("%y/%", "2024/"),
            Err(Error::Pattern(PatternError::TrailingPercent { offset: 3 }))
        ));
        assert!(matches!(
            parse_location("%y/%z", "2024/1"),
            Err(Error::Pattern(PatternError::UnknownPlaceholder { .. }))
        ));
    }

    #[test]
    fn test_unvalidated_adjacent_placeholders() {
        let record = parse_location("%y%m", "202401").unwrap();
        assert_eq!(record.year, 202401);
        assert_eq!(record.month, 0);
    }

    #[test]
    fn test_strict_numeric_option() {
        let pattern = Pattern::compile("%y/%d").unwrap();
        let strict = MatchOptions::new().with_strict_numeric(true);

        assert_eq!(pattern.parse_location("20x4/01").unwrap().year, 0);
        assert_eq!(
            pattern.parse_location_with("20x4/01", &strict),
            Err(MatchError::invalid_number(Placeholder::Year, "20x4"))
        );
        assert_eq!(pattern.parse_location_with("2024/01", &strict).unwrap().day, 1);
    }

    #[test]
    fn test_pattern_is_reusable() {
        let pattern = Pattern::compile("%y/%d - %V").unwrap();
        let first = pattern.parse_location("2024/01 - A").unwrap();
        let second = pattern.parse_location("2025/02 - B").unwrap();

        assert_eq!((first.year, first.venue.as_str()), (2024, "A"));
        assert_eq!((second.year, second.venue.as_str()), (2025, "B"));
    }
}
