mod formatters;

pub use formatters::{CsvFormatter, JsonFormatter, TextFormatter};

use anyhow::Result;
use gigcal_core::{BatchResult, CandidateOutcome};
use serde::{Deserialize, Serialize};

/// Output format enumeration
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Whether the format is meant for other programs rather than people
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the outcome of one candidate
    fn format_single(&self, outcome: &CandidateOutcome) -> Result<String>;

    /// Format every outcome of a batch
    fn format_batch(&self, batch: &BatchResult) -> Result<String> {
        let formatted: Result<Vec<String>> = batch
            .outcomes
            .iter()
            .map(|o| self.format_single(o))
            .collect();

        Ok(formatted?.join("\n"))
    }
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}

/// The parsing summary printed after every images run
pub fn format_summary(batch: &BatchResult) -> String {
    format!(
        "\n--- Parsing Summary ---\nSuccessfully parsed: {}\nInconsistent data:   {}\nFailed to parse:     {}\n",
        batch.successful, batch.inconsistent, batch.failed
    )
}
