//! The closed set of placeholder codes understood by location patterns.

use std::fmt;

/// Marker character that introduces a placeholder in a pattern.
pub const PLACEHOLDER_MARKER: char = '%';

/// A typed field captured from a location.
///
/// Every placeholder is written as the marker `%` followed by exactly one
/// code character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    /// `%y` numeric year
    Year,
    /// `%m` numeric month
    Month,
    /// `%d` numeric day of the month
    Day,
    /// `%M` English month name
    MonthName,
    /// `%P` comma separated performers
    Performers,
    /// `%V` venue name
    Venue,
    /// `%p` comma separated promoters
    Promoters,
}

impl Placeholder {
    /// All placeholders, in the order they are documented.
    pub const ALL: [Placeholder; 7] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::MonthName,
        Self::Performers,
        Self::Venue,
        Self::Promoters,
    ];

    /// Look up the placeholder for the character following `%`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'y' => Some(Self::Year),
            'm' => Some(Self::Month),
            'd' => Some(Self::Day),
            'M' => Some(Self::MonthName),
            'P' => Some(Self::Performers),
            'V' => Some(Self::Venue),
            'p' => Some(Self::Promoters),
            _ => None,
        }
    }

    /// The code character following `%`.
    pub fn code(self) -> char {
        match self {
            Self::Year => 'y',
            Self::Month => 'm',
            Self::Day => 'd',
            Self::MonthName => 'M',
            Self::Performers => 'P',
            Self::Venue => 'V',
            Self::Promoters => 'p',
        }
    }

    /// The two-character form as written in a pattern, e.g. `%y`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "%y",
            Self::Month => "%m",
            Self::Day => "%d",
            Self::MonthName => "%M",
            Self::Performers => "%P",
            Self::Venue => "%V",
            Self::Promoters => "%p",
        }
    }

    /// List-valued placeholders split their capture on commas.
    pub fn is_list(self) -> bool {
        matches!(self, Self::Performers | Self::Promoters)
    }

    /// Greedy placeholders extend to the last occurrence of the following
    /// literal rather than the first.
    pub fn is_greedy(self) -> bool {
        self.is_list()
    }

    /// Numeric placeholders decode their capture as a base-10 integer.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Day)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
