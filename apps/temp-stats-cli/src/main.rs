//! Temperature Statistics Binary
//!
//! Entry point for the `temp-stats` command.

use clap::Parser;
use std::path::{Path, PathBuf};
use temp_stats_cli::{Config, OutputFormat, Reporter, StatsReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status when `--strict` is set and a statistic is unavailable
const EXIT_INCOMPLETE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "temp-stats")]
#[command(version, about = "Descriptive statistics for temperature readings")]
struct Args {
    /// TOML dataset file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated readings; replaces the dataset file's readings
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    readings: Option<Vec<f32>>,

    /// Dataset name shown in the report
    #[arg(long)]
    name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 2 if any statistic is unavailable
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(args.config, args.readings, args.name, args.format, args.strict)?;
    config.validate()?;

    let code = run(&config, args.output.as_deref())?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Summarize the configured dataset and emit the report.
///
/// Returns the process exit status: [`EXIT_INCOMPLETE`] under strict mode when
/// any statistic is unavailable, otherwise 0.
fn run(config: &Config, output: Option<&Path>) -> anyhow::Result<i32> {
    tracing::info!(
        "Summarizing '{}' ({} readings)",
        config.dataset.name,
        config.dataset.readings.len()
    );

    let report = StatsReport::from_readings(
        config.dataset.name.as_str(),
        config.dataset.unit.as_str(),
        &config.dataset.readings,
    );

    let reporter = Reporter::new(config.report.format);
    match output {
        Some(path) => {
            reporter.write_to_file(&report, path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&report)?,
    }

    if config.report.strict && !report.is_complete() {
        tracing::warn!(
            "{} statistics unavailable for '{}'",
            report.unavailable_count(),
            report.dataset
        );
        return Ok(EXIT_INCOMPLETE);
    }

    Ok(0)
}

/// Merge the dataset file with command-line overrides.
fn resolve_config(
    path: Option<PathBuf>,
    readings: Option<Vec<f32>>,
    name: Option<String>,
    format: Option<OutputFormat>,
    strict: bool,
) -> anyhow::Result<Config> {
    let mut config = match (path, readings) {
        (Some(path), readings) => {
            let mut config = Config::from_file(&path)?;
            if let Some(readings) = readings {
                config.dataset.readings = readings;
            }
            config
        }
        (None, Some(readings)) => Config::from_readings("command line", readings),
        (None, None) => anyhow::bail!("Either --config or --readings is required"),
    };

    if let Some(name) = name {
        config.dataset.name = name;
    }
    if let Some(format) = format {
        config.report.format = format;
    }
    config.report.strict |= strict;

    Ok(config)
}
