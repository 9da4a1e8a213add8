//! Per-dataset statistics report
//!
//! Runs every kernel reduction over one reading series. A statistic that is
//! undefined for the input (an empty series, or a single reading for the
//! variance family) is recorded as unavailable with the kernel's reason
//! instead of aborting the whole report.

use serde::{Deserialize, Serialize};
use temp_stats_core::StatsError;
use tracing::debug;

/// The fallible statistics a report carries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Minimum,
    Maximum,
    Mean,
    Variance,
    SampleVariance,
    StdDev,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Minimum,
        StatKind::Maximum,
        StatKind::Mean,
        StatKind::Variance,
        StatKind::SampleVariance,
        StatKind::StdDev,
    ];

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Minimum => "Minimum",
            StatKind::Maximum => "Maximum",
            StatKind::Mean => "Mean",
            StatKind::Variance => "Variance",
            StatKind::SampleVariance => "Sample variance",
            StatKind::StdDev => "Std deviation",
        }
    }

    /// Unit of the statistic given the unit of the readings.
    /// Variances are in squared units.
    pub fn unit(self, reading_unit: &str) -> String {
        match self {
            StatKind::Variance | StatKind::SampleVariance => format!("{}²", reading_unit),
            _ => reading_unit.to_string(),
        }
    }

    fn compute(self, readings: &[f32]) -> Result<f64, StatsError> {
        match self {
            StatKind::Minimum => temp_stats_core::min(readings).map(f64::from),
            StatKind::Maximum => temp_stats_core::max(readings).map(f64::from),
            StatKind::Mean => temp_stats_core::mean(readings),
            StatKind::Variance => temp_stats_core::variance(readings),
            StatKind::SampleVariance => temp_stats_core::sample_variance(readings),
            StatKind::StdDev => temp_stats_core::std_dev(readings),
        }
    }
}

/// Result of one statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Value { value: f64 },
    Unavailable { reason: String },
}

impl From<Result<f64, StatsError>> for Outcome {
    fn from(result: Result<f64, StatsError>) -> Self {
        match result {
            Ok(value) if value.is_finite() => Outcome::Value { value },
            // Infinite readings propagate to inf/NaN; JSON has no encoding for either
            Ok(value) => Outcome::Unavailable {
                reason: format!("Result is not finite ({})", value),
            },
            Err(e) => Outcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub kind: StatKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Statistics for one reading series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub dataset: String,
    pub unit: String,
    pub count: usize,
    pub statistics: Vec<Statistic>,
}

impl StatsReport {
    /// Compute every statistic over `readings`.
    ///
    /// # Examples
    ///
    /// ```
    /// use temp_stats_cli::summary::{Outcome, StatKind, StatsReport};
    ///
    /// let report = StatsReport::from_readings("Probe", "°C", &[25.0]);
    /// assert_eq!(report.count, 1);
    /// assert_eq!(report.get(StatKind::Maximum), Some(&Outcome::Value { value: 25.0 }));
    /// assert!(!report.is_complete());
    /// ```
    pub fn from_readings(dataset: impl Into<String>, unit: impl Into<String>, readings: &[f32]) -> Self {
        let dataset = dataset.into();

        let statistics = StatKind::ALL
            .iter()
            .map(|&kind| {
                let outcome = Outcome::from(kind.compute(readings));
                if let Outcome::Unavailable { reason } = &outcome {
                    debug!("{} unavailable for '{}': {}", kind.label(), dataset, reason);
                }
                Statistic { kind, outcome }
            })
            .collect();

        StatsReport {
            count: temp_stats_core::count(readings),
            dataset,
            unit: unit.into(),
            statistics,
        }
    }

    /// Look up the outcome of one statistic
    pub fn get(&self, kind: StatKind) -> Option<&Outcome> {
        self.statistics
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| &s.outcome)
    }

    /// Number of statistics that could not be computed
    pub fn unavailable_count(&self) -> usize {
        self.statistics
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Unavailable { .. }))
            .count()
    }

    /// True when every statistic produced a value
    pub fn is_complete(&self) -> bool {
        self.unavailable_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SENSOR_READINGS: [f32; 10] = [
        20.5, 21.0, 20.0, 22.0, 21.5, 19.5, 20.8, 21.2, 20.7, 21.1,
    ];

    fn value_of(report: &StatsReport, kind: StatKind) -> f64 {
        match report.get(kind) {
            Some(Outcome::Value { value }) => *value,
            other => panic!("{:?} has no value: {:?}", kind, other),
        }
    }

    #[test]
    fn test_sensor_readings_report() {
        let report = StatsReport::from_readings("Greenhouse", "°C", &SENSOR_READINGS);

        assert_eq!(report.count, 10);
        assert!(report.is_complete());
        assert_eq!(value_of(&report, StatKind::Minimum), 19.5);
        assert_eq!(value_of(&report, StatKind::Maximum), 22.0);
        assert!((value_of(&report, StatKind::Mean) - 20.83).abs() < 1e-5);
        assert!((value_of(&report, StatKind::Variance) - 0.4641).abs() < 1e-4);
    }

    #[test]
    fn test_statistics_in_display_order() {
        let report = StatsReport::from_readings("Greenhouse", "°C", &SENSOR_READINGS);
        let kinds: Vec<StatKind> = report.statistics.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, StatKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_readings_report() {
        let report = StatsReport::from_readings("Offline", "°C", &[]);

        assert_eq!(report.count, 0);
        assert_eq!(report.unavailable_count(), StatKind::ALL.len());
        for statistic in &report.statistics {
            assert_eq!(
                statistic.outcome,
                Outcome::Unavailable {
                    reason: "Input sequence cannot be empty".to_string()
                }
            );
        }
    }

    #[test]
    fn test_single_reading_report() {
        let report = StatsReport::from_readings("Single", "°C", &[25.0]);

        assert_eq!(report.count, 1);
        assert_eq!(value_of(&report, StatKind::Minimum), 25.0);
        assert_eq!(value_of(&report, StatKind::Maximum), 25.0);
        assert_eq!(value_of(&report, StatKind::Mean), 25.0);
        assert_eq!(report.unavailable_count(), 3);
        assert_eq!(
            report.get(StatKind::Variance),
            Some(&Outcome::Unavailable {
                reason: "At least 2 readings are required, got 1".to_string()
            })
        );
    }

    #[test]
    fn test_infinite_reading_report() {
        let report = StatsReport::from_readings("Saturated", "°C", &[f32::INFINITY, 20.0]);

        assert_eq!(report.count, 2);
        assert_eq!(value_of(&report, StatKind::Minimum), 20.0);
        assert_eq!(
            report.get(StatKind::Maximum),
            Some(&Outcome::Unavailable {
                reason: "Result is not finite (inf)".to_string()
            })
        );
        assert_eq!(
            report.get(StatKind::Variance),
            Some(&Outcome::Unavailable {
                reason: "Result is not finite (NaN)".to_string()
            })
        );
        assert_eq!(report.unavailable_count(), 5);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_stat_units() {
        assert_eq!(StatKind::Mean.unit("°C"), "°C");
        assert_eq!(StatKind::Variance.unit("°C"), "°C²");
        assert_eq!(StatKind::SampleVariance.unit("K"), "K²");
        assert_eq!(StatKind::StdDev.unit("K"), "K");
    }
}
