//! Known event data and the locations a pattern would give it

use gigcal_core::location::month_name;
use gigcal_core::{LocationRecord, Pattern, Placeholder, Token};

/// Event data to substitute into a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEvent {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub performers: Vec<String>,
    pub venue: String,
    pub promoters: Vec<String>,
}

/// Builder for [`SampleEvent`]
#[derive(Debug, Clone, Default)]
pub struct SampleEventBuilder {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    performers: Vec<String>,
    venue: Option<String>,
    promoters: Vec<String>,
}

impl SampleEventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date
    pub fn with_date(mut self, year: i64, month: i64, day: i64) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self.day = Some(day);
        self
    }

    /// Add a performer
    pub fn with_performer(mut self, name: &str) -> Self {
        self.performers.push(name.to_string());
        self
    }

    /// Set the venue
    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    /// Add a promoter
    pub fn with_promoter(mut self, name: &str) -> Self {
        self.promoters.push(name.to_string());
        self
    }

    /// Build the event, filling unset fields with defaults
    pub fn build(self) -> SampleEvent {
        SampleEvent {
            year: self.year.unwrap_or(2024),
            month: self.month.unwrap_or(1),
            day: self.day.unwrap_or(24),
            performers: if self.performers.is_empty() {
                vec!["Performer1".to_string()]
            } else {
                self.performers
            },
            venue: self.venue.unwrap_or_else(|| "Venue Name".to_string()),
            promoters: self.promoters,
        }
    }
}

impl SampleEvent {
    /// Text a placeholder stands for in a location of this event
    pub fn value_for(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Year => format!("{:04}", self.year),
            Placeholder::Month => format!("{:02}", self.month),
            Placeholder::Day => format!("{:02}", self.day),
            Placeholder::MonthName => month_name(self.month).unwrap_or_default(),
            Placeholder::Performers => self.performers.join(", "),
            Placeholder::Venue => self.venue.clone(),
            Placeholder::Promoters => self.promoters.join(", "),
        }
    }

    /// The record a pattern should decode from this event's location.
    ///
    /// Fields whose placeholder is not in the pattern stay at their defaults.
    pub fn expected_record(&self, pattern: &Pattern) -> LocationRecord {
        let mut record = LocationRecord {
            consistent: true,
            ..LocationRecord::default()
        };

        for placeholder in pattern.placeholders() {
            match placeholder {
                Placeholder::Year => record.year = self.year,
                Placeholder::Month => record.month = self.month,
                Placeholder::Day => record.day = self.day,
                Placeholder::MonthName => record.month_name = self.value_for(placeholder),
                Placeholder::Performers => record.performers = self.performers.clone(),
                Placeholder::Venue => record.venue = self.venue.clone(),
                Placeholder::Promoters => record.promoters = self.promoters.clone(),
            }
        }

        record
    }
}

/// Build the location a pattern gives an event: each placeholder replaced
/// by the event's value, joined by the pattern's literals.
pub fn synthesize_location(pattern: &Pattern, event: &SampleEvent) -> String {
    pattern
        .tokens()
        .iter()
        .map(|token| match token {
            Token::Literal(text) => text.clone(),
            Token::Placeholder(placeholder) => event.value_for(*placeholder),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_full_pattern() {
        let event = SampleEventBuilder::new()
            .with_date(2024, 1, 24)
            .with_performer("Performer1")
            .with_performer("Performer2")
            .with_venue("Venue Name")
            .with_promoter("Promoter1")
            .with_promoter("Promoter2")
            .build();
        let pattern = Pattern::compile("%y/%m - %M %y/%d - %P (%V) %p").unwrap();

        assert_eq!(
            synthesize_location(&pattern, &event),
            "2024/01 - January 2024/24 - Performer1, Performer2 (Venue Name) Promoter1, Promoter2"
        );
    }

    #[test]
    fn test_expected_record_only_has_pattern_fields() {
        let event = SampleEventBuilder::new().with_venue("Hall").build();
        let pattern = Pattern::compile("%V").unwrap();
        let record = event.expected_record(&pattern);

        assert_eq!(record.venue, "Hall");
        assert_eq!(record.year, 0);
        assert!(record.performers.is_empty());
        assert!(record.consistent);
    }
}
