//! Descriptive statistics over temperature readings
//!
//! This crate provides a small set of pure reduction functions (count,
//! minimum, maximum, mean and variance) over a borrowed slice of readings.
//! Every function takes `&[T]`, never mutates it, and reports degenerate
//! inputs as a [`StatsError`] instead of producing NaN or infinity.
//!
//! # Example
//!
//! ```
//! use temp_stats_core::{count, max, mean, min, variance, StatsError};
//!
//! let readings = [20.5_f32, 21.0, 20.0, 22.0];
//! assert_eq!(count(&readings), 4);
//! assert_eq!(min(&readings)?, 20.0);
//! assert_eq!(max(&readings)?, 22.0);
//! assert!((mean(&readings)? - 20.875).abs() < 1e-9);
//! assert!(variance(&readings)? > 0.0);
//!
//! assert_eq!(mean::<f32>(&[]), Err(StatsError::EmptyInput));
//! # Ok::<(), StatsError>(())
//! ```

pub mod error;
pub mod kernel;

pub use error::StatsError;
pub use kernel::{count, max, mean, min, sample_variance, std_dev, variance, Reading};
