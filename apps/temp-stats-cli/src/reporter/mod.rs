//! Statistics report output
//!
//! This module handles formatting and outputting a [`StatsReport`] in
//! human-readable or machine-readable form.
//!
//! # Output Formats
//!
//! - **Console**: Human-readable table of statistics
//! - **JSON**: Machine-readable format for scripting
//! - **JSON (pretty)**: Indented JSON
//!
//! # Example
//!
//! ```no_run
//! use temp_stats_cli::reporter::{OutputFormat, Reporter};
//! use temp_stats_cli::summary::StatsReport;
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = StatsReport::from_readings("Probe", "°C", &[20.5, 21.0, 20.0]);
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "stats.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::summary::StatsReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for statistics reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Console output with aligned columns
    #[default]
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for statistics reports
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &StatsReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &StatsReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let output = self.format_report(report)?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &StatsReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format(report),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report() -> StatsReport {
        StatsReport::from_readings("Test probe", "°C", &[20.0, 22.0, 21.0])
    }

    #[test]
    fn test_reporter_default_is_console() {
        let report = create_test_report();
        let output = Reporter::default().format_report(&report).unwrap();
        assert!(output.contains("TEMPERATURE STATISTICS"));
    }

    #[test]
    fn test_reporter_json_formats() {
        let report = create_test_report();

        let compact = Reporter::new(OutputFormat::Json).format_report(&report).unwrap();
        assert!(compact.starts_with('{'));
        assert!(!compact.contains('\n'));

        let pretty = Reporter::new(OutputFormat::JsonPretty)
            .format_report(&report)
            .unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_write_to_file() {
        let report = create_test_report();
        let path = std::env::temp_dir().join(format!("temp-stats-report-{}.json", std::process::id()));

        Reporter::new(OutputFormat::Json)
            .write_to_file(&report, &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let parsed: StatsReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.count, 3);
    }

    #[test]
    fn test_output_format_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let parsed: Wrapper = toml::from_str(r#"format = "json-pretty""#).unwrap();
        assert_eq!(parsed.format, OutputFormat::JsonPretty);
    }
}
