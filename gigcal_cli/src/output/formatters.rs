use super::OutputFormatter;
use anyhow::Result;
use colored::*;
use gigcal_core::{BatchResult, CandidateOutcome, LocationRecord};
use serde_json::{Value, json};

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_record(&self, record: &LocationRecord) -> String {
        let mut output = format!(
            "year={} month={} day={} month_name={} performers=[{}] venue={} promoters=[{}]",
            record.year,
            record.month,
            record.day,
            record.month_name,
            record.performers.join(", "),
            record.venue,
            record.promoters.join(", "),
        );

        if !record.consistent {
            output.push(' ');
            output.push_str(&self.colorize("(inconsistent)", |s| s.yellow()));
        }

        output
    }
}

impl OutputFormatter for TextFormatter {
    fn format_single(&self, outcome: &CandidateOutcome) -> Result<String> {
        let location = self.colorize(&outcome.location, |s| s.cyan());

        Ok(match &outcome.result {
            Ok(record) => format!(
                "  Parsed Data: {location}: {}",
                self.format_record(record)
            ),
            Err(e) => format!(
                "  {} {location}: {e}",
                self.colorize("Error parsing location", |s| s.red())
            ),
        })
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_value(outcome: &CandidateOutcome) -> Result<Value> {
        let (record, error) = match &outcome.result {
            Ok(record) => (serde_json::to_value(record)?, Value::Null),
            Err(e) => (Value::Null, json!(e.to_string())),
        };

        Ok(json!({
            "path": outcome.path.to_string_lossy(),
            "location": outcome.location,
            "record": record,
            "error": error,
        }))
    }

    fn render(&self, value: &Value) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_single(&self, outcome: &CandidateOutcome) -> Result<String> {
        self.render(&Self::to_value(outcome)?)
    }

    fn format_batch(&self, batch: &BatchResult) -> Result<String> {
        let outcomes = batch
            .outcomes
            .iter()
            .map(Self::to_value)
            .collect::<Result<Vec<_>>>()?;

        self.render(&json!({
            "outcomes": outcomes,
            "summary": {
                "total": batch.total,
                "successful": batch.successful,
                "inconsistent": batch.inconsistent,
                "failed": batch.failed,
            },
        }))
    }
}

/// CSV formatter for tabular output
#[derive(Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn get_headers() -> Vec<&'static str> {
        vec![
            "location",
            "year",
            "month",
            "day",
            "month_name",
            "performers",
            "venue",
            "promoters",
            "consistent",
            "error",
        ]
    }

    fn outcome_to_record(outcome: &CandidateOutcome) -> Vec<String> {
        let mut row = vec![outcome.location.clone()];

        match &outcome.result {
            Ok(record) => {
                row.push(record.year.to_string());
                row.push(record.month.to_string());
                row.push(record.day.to_string());
                row.push(record.month_name.clone());
                row.push(record.performers.join("; "));
                row.push(record.venue.clone());
                row.push(record.promoters.join("; "));
                row.push(record.consistent.to_string());
                row.push(String::new());
            }
            Err(e) => {
                row.extend(std::iter::repeat_n(String::new(), 8));
                row.push(e.to_string());
            }
        }

        row
    }

    fn write_rows<'a>(outcomes: impl IntoIterator<Item = &'a CandidateOutcome>) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(Self::get_headers())?;

        for outcome in outcomes {
            wtr.write_record(Self::outcome_to_record(outcome))?;
        }

        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_single(&self, outcome: &CandidateOutcome) -> Result<String> {
        Self::write_rows([outcome])
    }

    fn format_batch(&self, batch: &BatchResult) -> Result<String> {
        Self::write_rows(&batch.outcomes)
    }
}
