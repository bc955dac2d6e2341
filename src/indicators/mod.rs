//! Rolling indicator kernels and the Bollinger Bands pipeline.
//!
//! The computation is a single-stage pipeline of three pure functions
//! composed left to right:
//!
//! 1. [`sma`] - rolling mean of the source values over a fixed window
//! 2. [`rolling_stddev`] - sample standard deviation over the same window,
//!    reusing the mean already computed for that window
//! 3. [`bollinger`](bollinger::bollinger) - band assembly (mean ± multiplier
//!    × dispersion) and positional offset
//!
//! # Output Alignment
//!
//! Every kernel returns a series of exactly the input length. Points that
//! cannot be computed (insufficient lookback, a non-finite value inside the
//! window, zero sample-stddev denominator) are NaN rather than omitted, so
//! outputs stay index-aligned with the original candles.
//!
//! # Error Handling
//!
//! Kernels return [`Result`](crate::error::Result) and fail only on
//! malformed configuration ([`InvalidSettings`](crate::error::Error::InvalidSettings))
//! or misaligned precomputed inputs
//! ([`LengthMismatch`](crate::error::Error::LengthMismatch)). Short or empty
//! input is never an error.

pub mod bollinger;
pub mod sma;
pub mod stddev;

// Re-export indicator functions for convenient access without naming the
// submodule, e.g. `use bollinger_ta::indicators::sma;`
pub use bollinger::{
    apply_offset, bollinger, bollinger_bands, bollinger_lookback, BandPoint, BollingerOutput,
};
pub use sma::{sma, sma_lookback};
pub use stddev::{rolling_stddev, stddev_lookback};
