//! bollinger-ta: Bollinger Bands computation core for candle series
//!
//! This crate computes the Bollinger Bands indicator over a time-ordered
//! sequence of OHLCV candles: a simple-moving-average basis line plus
//! upper/lower bands offset by a multiple of the rolling sample standard
//! deviation, with an optional positional shift of all three series.
//!
//! # Features
//!
//! - **Pure**: stateless, re-entrant computation with no side effects;
//!   every call allocates and returns fresh output
//! - **Aligned**: output always has the same length and timestamp order
//!   as the input, with NaN marking points that lack sufficient history
//! - **Generics**: the rolling kernels work with both `f32` and `f64`
//! - **Serializable**: settings and output points round-trip through serde
//!
//! # Quick Start
//!
//! ```
//! use bollinger_ta::prelude::*;
//!
//! let candles: Vec<Candle> = (0..30i64)
//!     .map(|i| Candle::new(i * 60_000, 100.0, 101.0, 99.0, 100.0 + (i % 5) as f64, 1_000.0))
//!     .collect();
//!
//! let settings = BollingerSettings::default(); // length 20, multiplier 2.0
//! let bands = bollinger_bands(&candles, &settings).unwrap();
//!
//! assert_eq!(bands.len(), candles.len());
//! // First 19 points lack history
//! assert!(bands[0].basis.is_nan());
//! assert!(!bands[19].basis.is_nan());
//! ```
//!
//! # NaN Handling
//!
//! Insufficient history is never an error: the first `length - 1` points of
//! every series are NaN, and any window containing a non-finite close
//! produces NaN for every index whose window overlaps it. Output length
//! always equals input length, even for empty or undersized input.
//!
//! # Error Handling
//!
//! Only malformed configuration fails, once per call and before any
//! computation runs:
//!
//! ```
//! use bollinger_ta::prelude::*;
//!
//! let candles = vec![Candle::new(0, 1.0, 1.0, 1.0, 1.0, 1.0)];
//! let settings = BollingerSettings::default().multiplier(-1.0);
//! assert!(bollinger_bands(&candles, &settings).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod candle;
pub mod error;
pub mod indicators;
pub mod prelude;
pub mod settings;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use candle::{Candle, PriceSource};
pub use error::{Error, Result};
pub use indicators::bollinger::{bollinger_bands, BandPoint};
pub use settings::{BollingerSettings, MaType};
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_relative, count_nan_prefix, EPSILON, LOOSE_EPSILON};
