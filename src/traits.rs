//! Core traits for bollinger-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], a common interface for numeric
//! operations on time series data that abstracts over `f32` and `f64`.
//!
//! # Example
//!
//! ```
//! use bollinger_ta::traits::SeriesElement;
//!
//! fn window_mean<T: SeriesElement>(window: &[T]) -> bollinger_ta::Result<T> {
//!     let len = T::from_usize(window.len())?;
//!     let sum = window.iter().fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / len)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! assert!((window_mean(&data).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Extends `num_traits::Float` with fallible conversions used when turning
/// window lengths and multipliers into the series element type.
///
/// # Type Bounds
///
/// - `Float`: standard floating-point operations (NaN handling, arithmetic)
/// - `NumCast`: safe conversion between numeric types
/// - `Copy` + `Default`: cheap iteration and zero-initialization
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Commonly used for converting window lengths to the element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}
