//! Rolling mean (Simple Moving Average).
//!
//! The basis line of the Bollinger Bands indicator: the arithmetic mean of
//! the source values over a fixed trailing window.
//!
//! # Algorithm
//!
//! A rolling sum is maintained across the series: each step adds the newest
//! value and subtracts the value leaving the window. Non-finite values are
//! excluded from the sum and tracked with a counter; a window is only
//! emitted when it contains no non-finite value, otherwise the output is
//! NaN. This keeps the cost O(n) while degrading a single bad candle to
//! only the windows that touch it.
//!
//! # Example
//!
//! ```
//! use bollinger_ta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // First 2 values are NaN (length - 1 lookback)
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10); // (1+2+3)/3
//! assert!((result[3] - 3.0).abs() < 1e-10); // (2+3+4)/3
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Returns the lookback of the rolling mean: the number of NaN values at
/// the start of the output for fully finite input.
///
/// # Example
///
/// ```
/// use bollinger_ta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(length: usize) -> usize {
    length.saturating_sub(1)
}

/// Computes the rolling mean of a data series.
///
/// Returns a vector of the same length as the input. Index `i` holds the
/// arithmetic mean of the window `[i - length + 1, i]`; entries with
/// insufficient preceding history are NaN, as are entries whose window
/// contains a non-finite value.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `length` - The window length
///
/// # Errors
///
/// Returns `Error::InvalidSettings` if the length is zero. A window longer
/// than the data is not an error: the result is all NaN, including for
/// empty input (empty in, empty out).
///
/// # Example
///
/// ```
/// use bollinger_ta::indicators::sma::sma;
///
/// // Window longer than the series: every point is undefined
/// let data = vec![10.0_f64, 11.0, 12.0];
/// let result = sma(&data, 20).unwrap();
/// assert!(result.iter().all(|v| v.is_nan()));
/// ```
#[must_use = "this returns a Result with the rolling mean values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], length: usize) -> Result<Vec<T>> {
    if length == 0 {
        return Err(Error::InvalidSettings {
            reason: "window length must be at least 1",
        });
    }

    let mut result = vec![T::nan(); data.len()];
    if data.len() < length {
        return Ok(result);
    }

    let length_t = T::from_usize(length)?;

    // Initial window: sum finite values, count the rest
    let mut sum = T::zero();
    let mut non_finite = 0usize;
    for &value in &data[..length] {
        if value.is_finite() {
            sum = sum + value;
        } else {
            non_finite += 1;
        }
    }

    if non_finite == 0 {
        result[length - 1] = sum / length_t;
    }

    // Roll the window: add the entering value, drop the leaving one
    for i in length..data.len() {
        let entering = data[i];
        let leaving = data[i - length];

        if entering.is_finite() {
            sum = sum + entering;
        } else {
            non_finite += 1;
        }

        if leaving.is_finite() {
            sum = sum - leaving;
        } else {
            non_finite -= 1;
        }

        if non_finite == 0 {
            result[i] = sum / length_t;
        }
    }

    Ok(result)
}
