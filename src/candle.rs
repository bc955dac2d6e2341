//! OHLCV candle data model.
//!
//! A [`Candle`] is one bar of a time-ordered price series: timestamp plus
//! open/high/low/close/volume. Candles are immutable inputs owned by the
//! caller; the indicator never mutates them. [`PriceSource`] selects which
//! field of the candle feeds the computation.

use serde::{Deserialize, Serialize};

/// A single OHLCV candle.
///
/// Timestamps are expected to be monotonically non-decreasing and unique
/// within a series; the indicator copies them into its output unchanged and
/// never reorders or recomputes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp, typically milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Candle {
    /// Creates a candle from its components.
    #[must_use]
    pub const fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Which candle field feeds the indicator.
///
/// Currently only the closing price is supported; the enum exists so the
/// settings surface matches what a settings editor persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// The closing price of each candle.
    #[default]
    Close,
}

impl PriceSource {
    /// Returns the selected field of a candle.
    #[inline]
    #[must_use]
    pub const fn value_of(self, candle: &Candle) -> f64 {
        match self {
            Self::Close => candle.close,
        }
    }

    /// Extracts the selected field from every candle in a slice.
    #[must_use]
    pub fn extract(self, candles: &[Candle]) -> Vec<f64> {
        candles.iter().map(|c| self.value_of(c)).collect()
    }
}
