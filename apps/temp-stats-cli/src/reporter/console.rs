//! Console reporter for statistics reports
//!
//! Provides human-readable output with an ASCII header and aligned columns.

use anyhow::Result;
use std::fmt::Write;

use crate::summary::{Outcome, Statistic, StatsReport};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a statistics report for console output
    pub fn format(report: &StatsReport) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                  TEMPERATURE STATISTICS                      ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Dataset:   {}", report.dataset)?;
        writeln!(output, "Readings:  {}", report.count)?;
        writeln!(output)?;

        for statistic in &report.statistics {
            Self::format_statistic(&mut output, statistic, &report.unit)?;
        }

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        if report.is_complete() {
            writeln!(output, "Status: ✓ COMPLETE")?;
        } else {
            writeln!(
                output,
                "Status: ✗ INCOMPLETE ({} of {} statistics unavailable)",
                report.unavailable_count(),
                report.statistics.len()
            )?;
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_statistic(output: &mut String, statistic: &Statistic, unit: &str) -> Result<()> {
        let label = statistic.kind.label();
        match &statistic.outcome {
            Outcome::Value { value } => {
                writeln!(
                    output,
                    "  {:<17} {:>12.4} {}",
                    label,
                    value,
                    statistic.kind.unit(unit)
                )?;
            }
            Outcome::Unavailable { reason } => {
                writeln!(output, "  {:<17} {:>12} ({})", label, "n/a", reason)?;
            }
        }
        Ok(())
    }
}
