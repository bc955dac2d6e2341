//! Utility functions for bollinger-ta.
//!
//! Tolerance-based floating-point comparison helpers and NaN-prefix
//! inspection, shared between the test suites and exposed for consumers
//! validating indicator output.
//!
//! # Example
//!
//! ```
//! use bollinger_ta::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
///
/// This tolerance (1e-10) is appropriate for most indicator calculations
/// where accumulated floating-point error is minimal.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
///
/// Use this tolerance (1e-6) when comparing results that involve many
/// accumulated operations or when absolute precision is less critical.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use bollinger_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than absolute tolerance when comparing values of
/// varying magnitudes, e.g. prices anywhere in the 0.0001 to 1e7 range.
///
/// # Example
///
/// ```
/// use bollinger_ta::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(approx_eq_relative(1e-10, 1.000000001e-10, 1e-8));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Counts the number of leading NaN values in a series.
///
/// Useful for asserting that an indicator produced exactly the expected
/// lookback prefix.
///
/// # Example
///
/// ```
/// use bollinger_ta::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 3.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
