//! Rolling dispersion (sample standard deviation).
//!
//! The band-width component of the Bollinger Bands indicator: the sample
//! standard deviation (denominator `length - 1`) of each trailing window.
//!
//! # Mean Reuse
//!
//! The kernel deliberately takes the rolling mean series as an input and
//! computes each window's variance as squared deviations from the mean
//! already stored at that index. Recomputing the mean here would double the
//! cost and could drift by floating-point rounding from the basis line
//! actually plotted; the dispersion must agree exactly with the basis it
//! surrounds.
//!
//! # Example
//!
//! ```
//! use bollinger_ta::indicators::{sma, stddev::rolling_stddev};
//!
//! let data = vec![10.0_f64, 12.0, 11.0, 13.0, 12.0];
//! let means = sma(&data, 3).unwrap();
//! let result = rolling_stddev(&data, 3, &means).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // Sample stddev of [10, 12, 11] around mean 11: sqrt((1+1+0)/2) = 1
//! assert!((result[2] - 1.0).abs() < 1e-10);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Returns the lookback of the rolling sample standard deviation.
///
/// For `length >= 2` this is `length - 1`, matching the mean lookback. For
/// `length == 1` the sample denominator is zero, so no index is ever
/// defined and the lookback is the whole series.
#[inline]
#[must_use]
pub const fn stddev_lookback(length: usize) -> Option<usize> {
    match length {
        0 | 1 => None,
        _ => Some(length - 1),
    }
}

/// Computes the rolling sample standard deviation of a data series.
///
/// Returns a vector of the same length as the input. Index `i` holds the
/// sample standard deviation of the window `[i - length + 1, i]`, using the
/// precomputed mean at `means[i]` and denominator `length - 1`.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `length` - The window length
/// * `means` - The rolling mean series for the same data and length,
///   as produced by [`sma`](crate::indicators::sma::sma)
///
/// # NaN Handling
///
/// - An entry is NaN wherever the corresponding mean entry is NaN, which
///   covers both insufficient lookback and non-finite values in the window
/// - Every entry is NaN when `length == 1`: the sample denominator is zero,
///   treated as an explicit insufficient-history case rather than letting a
///   division by zero propagate
///
/// # Errors
///
/// Returns `Error::InvalidSettings` if the length is zero, or
/// `Error::LengthMismatch` if `means` does not align with `data`.
///
/// # Example
///
/// ```
/// use bollinger_ta::indicators::{sma, stddev::rolling_stddev};
///
/// // Length 1: defined mean, but dispersion is never defined
/// let data = vec![1.0_f64, 2.0, 3.0];
/// let means = sma(&data, 1).unwrap();
/// let result = rolling_stddev(&data, 1, &means).unwrap();
/// assert!(result.iter().all(|v| v.is_nan()));
/// ```
#[must_use = "this returns a Result with the rolling standard deviation values, which should be used"]
pub fn rolling_stddev<T: SeriesElement>(
    data: &[T],
    length: usize,
    means: &[T],
) -> Result<Vec<T>> {
    if length == 0 {
        return Err(Error::InvalidSettings {
            reason: "window length must be at least 1",
        });
    }

    if means.len() != data.len() {
        return Err(Error::LengthMismatch {
            expected: data.len(),
            actual: means.len(),
        });
    }

    let mut result = vec![T::nan(); data.len()];

    // Sample denominator is length - 1; a single-element window has no
    // dispersion to speak of
    if length == 1 || data.len() < length {
        return Ok(result);
    }

    let denominator = T::from_usize(length - 1)?;

    for i in (length - 1)..data.len() {
        let mean = means[i];
        if mean.is_nan() {
            continue;
        }

        let mut acc = T::zero();
        for &value in &data[i + 1 - length..=i] {
            let deviation = value - mean;
            acc = acc + deviation * deviation;
        }

        result[i] = (acc / denominator).sqrt();
    }

    Ok(result)
}
