//! Error types for bollinger-ta.
//!
//! Only malformed configuration is an error. Insufficient history and
//! non-finite input values are in-band per-point states encoded as NaN in
//! the output, never raised as errors.

use thiserror::Error;

/// The main error type for bollinger-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The indicator settings are malformed.
    ///
    /// Returned when the window length is zero, or the standard-deviation
    /// multiplier is non-finite or not strictly positive. Raised once per
    /// call, before any computation runs.
    #[error("invalid settings: {reason}")]
    InvalidSettings {
        /// Description of the settings violation.
        reason: &'static str,
    },

    /// A precomputed series has a different length than the source series.
    ///
    /// Returned by the dispersion kernel when the mean series it is asked
    /// to reuse does not align one-to-one with the input values.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The number of elements required.
        expected: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when using `NumCast::from()` to convert values (e.g., a
    /// `usize` window length to a generic `Float` type) and the conversion
    /// fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the bollinger-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
