//! JSON reporter for statistics reports

use crate::summary::StatsReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Serialize a report, indented when `pretty` is set.
    ///
    /// Every `value` field is finite, so the output parses back into a
    /// [`StatsReport`].
    pub fn format(report: &StatsReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
