//! Command-line driver for temperature statistics
//!
//! Loads a reading series from a TOML dataset file (or from the command
//! line), runs every reduction in `temp-stats-core` over it and renders the
//! results.
//!
//! # Dataset file
//!
//! ```toml
//! [dataset]
//! name = "Greenhouse probe"
//! unit = "°C"
//! readings = [20.5, 21.0, 20.0, 22.0, 21.5, 19.5, 20.8, 21.2, 20.7, 21.1]
//!
//! [report]
//! format = "console"
//! strict = false
//! ```

pub mod config;
pub mod reporter;
pub mod summary;

// Re-export main types for convenience
pub use config::Config;
pub use reporter::{OutputFormat, Reporter};
pub use summary::{Outcome, StatKind, StatsReport};
