//! Reduction kernel for temperature readings.
//!
//! Each function is a single front-to-back pass (two for the variance family)
//! over a borrowed slice. Accumulation happens in `f64` regardless of the
//! reading type, so `f32` sensor data keeps its precision through the sum.
//!
//! Variance uses the two-pass form: the mean is computed first, then the
//! squared deviations from it are summed. This avoids the cancellation the
//! `sumsq/n - mean^2` shortcut suffers on large-magnitude readings.

use crate::error::StatsError;

/// Minimum number of readings the variance family needs.
const MIN_SPREAD_READINGS: usize = 2;

/// A numeric type the kernel can reduce.
///
/// Implemented for `f32`, the native sensor precision, and `f64`.
pub trait Reading: Copy + PartialOrd {
    /// Widen the reading for accumulation.
    fn to_f64(self) -> f64;
}

impl Reading for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Reading for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Number of readings in the sequence. Never fails.
pub fn count<T: Reading>(readings: &[T]) -> usize {
    readings.len()
}

/// Smallest reading.
///
/// Starts from the first element and only replaces it with a strictly
/// smaller value, so ties keep the earliest reading.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `readings` is empty.
///
/// # Examples
///
/// ```
/// use temp_stats_core::min;
///
/// assert_eq!(min(&[21.0_f32, 19.5, 20.0]), Ok(19.5));
/// assert!(min::<f32>(&[]).is_err());
/// ```
pub fn min<T: Reading>(readings: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = readings.split_first().ok_or(StatsError::EmptyInput)?;

    let mut min_val = first;
    for &value in rest {
        if value < min_val {
            min_val = value;
        }
    }

    Ok(min_val)
}

/// Largest reading.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `readings` is empty.
pub fn max<T: Reading>(readings: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = readings.split_first().ok_or(StatsError::EmptyInput)?;

    let mut max_val = first;
    for &value in rest {
        if value > max_val {
            max_val = value;
        }
    }

    Ok(max_val)
}

/// Arithmetic mean, `sum / n`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `readings` is empty. The check runs
/// before the division, so an empty slice never yields NaN.
///
/// # Examples
///
/// ```
/// use temp_stats_core::mean;
///
/// assert_eq!(mean(&[20.0_f32, 22.0]), Ok(21.0));
/// ```
pub fn mean<T: Reading>(readings: &[T]) -> Result<f64, StatsError> {
    if readings.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    Ok(sum(readings) / readings.len() as f64)
}

/// Population variance, `sum((x - mean)^2) / n`.
///
/// # Errors
///
/// - [`StatsError::EmptyInput`] for an empty slice
/// - [`StatsError::InsufficientData`] for a single reading
///
/// # Examples
///
/// ```
/// use temp_stats_core::{variance, StatsError};
///
/// let readings = [2.0_f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&readings), Ok(4.0));
///
/// assert_eq!(
///     variance(&[25.0_f32]),
///     Err(StatsError::InsufficientData { required: 2, actual: 1 })
/// );
/// ```
pub fn variance<T: Reading>(readings: &[T]) -> Result<f64, StatsError> {
    let squared_diffs = squared_deviations(readings)?;
    Ok(squared_diffs / readings.len() as f64)
}

/// Sample (Bessel-corrected) variance, `sum((x - mean)^2) / (n - 1)`.
///
/// # Errors
///
/// Same conditions as [`variance`].
pub fn sample_variance<T: Reading>(readings: &[T]) -> Result<f64, StatsError> {
    let squared_diffs = squared_deviations(readings)?;
    Ok(squared_diffs / (readings.len() - 1) as f64)
}

/// Population standard deviation, the square root of [`variance`].
///
/// # Errors
///
/// Same conditions as [`variance`].
pub fn std_dev<T: Reading>(readings: &[T]) -> Result<f64, StatsError> {
    variance(readings).map(f64::sqrt)
}

fn sum<T: Reading>(readings: &[T]) -> f64 {
    readings.iter().fold(0.0, |acc, &value| acc + value.to_f64())
}

/// Sum of squared deviations from the mean, after checking there is spread
/// to measure.
fn squared_deviations<T: Reading>(readings: &[T]) -> Result<f64, StatsError> {
    match readings.len() {
        0 => return Err(StatsError::EmptyInput),
        n if n < MIN_SPREAD_READINGS => {
            return Err(StatsError::InsufficientData {
                required: MIN_SPREAD_READINGS,
                actual: n,
            })
        }
        _ => {}
    }

    let mean = mean(readings)?;
    Ok(readings
        .iter()
        .map(|&value| (value.to_f64() - mean).powi(2))
        .sum())
}
