//! Dataset configuration for the statistics driver
//!
//! A dataset file names the sensor series, carries its readings inline and
//! optionally selects how the report is rendered.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::reporter::OutputFormat;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The readings to summarize
    pub dataset: DatasetConfig,
    /// Report rendering options
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Required fields are missing
    ///
    /// # Example
    ///
    /// ```no_run
    /// use temp_stats_cli::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("greenhouse.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("Loading dataset from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use temp_stats_cli::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     [dataset]
    ///     name = "Greenhouse probe"
    ///     readings = [20.5, 21.0, 20.0]
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.dataset.readings.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML dataset")
    }

    /// Build a configuration around readings supplied directly, with
    /// default report options.
    pub fn from_readings(name: impl Into<String>, readings: Vec<f32>) -> Self {
        Self {
            dataset: DatasetConfig {
                name: name.into(),
                unit: default_unit(),
                readings,
            },
            report: ReportConfig::default(),
        }
    }

    /// Reject readings the kernel cannot order.
    ///
    /// NaN is refused; infinities and every finite value are accepted as-is.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(index) = self.dataset.readings.iter().position(|r| r.is_nan()) {
            anyhow::bail!(
                "Dataset '{}' has a NaN reading at position {}",
                self.dataset.name,
                index
            );
        }
        Ok(())
    }
}

/// A named series of temperature readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Display name of the series
    pub name: String,
    /// Unit label used in the report (default: "°C")
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Readings in sensor order
    pub readings: Vec<f32>,
}

fn default_unit() -> String {
    "°C".to_string()
}

/// Report rendering options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format (default: console)
    #[serde(default)]
    pub format: OutputFormat,
    /// Treat any unavailable statistic as a failure
    #[serde(default)]
    pub strict: bool,
}
