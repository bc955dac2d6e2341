//! Bollinger Bands: band assembly and positional offset.
//!
//! Composes the rolling mean and rolling sample standard deviation into
//! three series:
//!
//! ```text
//! basis = SMA(source, length)
//! upper = basis + multiplier × stddev
//! lower = basis - multiplier × stddev
//! ```
//!
//! An integer offset then shifts all three series by whole positions before
//! they are paired with the original candle timestamps. Timestamps are
//! never shifted, only the values.
//!
//! # Example
//!
//! ```
//! use bollinger_ta::candle::Candle;
//! use bollinger_ta::indicators::bollinger::bollinger_bands;
//! use bollinger_ta::settings::BollingerSettings;
//!
//! let closes = [10.0, 12.0, 11.0, 13.0, 12.0];
//! let candles: Vec<Candle> = closes
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| Candle::new(i as i64 * 60_000, c, c, c, c, 1_000.0))
//!     .collect();
//!
//! let settings = BollingerSettings::new().length(3).multiplier(2.0);
//! let bands = bollinger_bands(&candles, &settings).unwrap();
//!
//! assert_eq!(bands.len(), 5);
//! assert!(bands[1].basis.is_nan());
//! // [10, 12, 11]: mean 11, sample stddev 1 -> bands at 13 and 9
//! assert!((bands[2].basis - 11.0).abs() < 1e-10);
//! assert!((bands[2].upper - 13.0).abs() < 1e-10);
//! assert!((bands[2].lower - 9.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::candle::Candle;
use crate::error::{Error, Result};
use crate::indicators::sma::sma;
use crate::indicators::stddev::rolling_stddev;
use crate::settings::BollingerSettings;
use crate::traits::SeriesElement;

/// Returns the lookback of the Bollinger basis line: `length - 1` NaN
/// values at the start of the output for fully finite input.
///
/// The upper and lower bands share this lookback except for `length == 1`,
/// where the bands are never defined (see
/// [`stddev_lookback`](crate::indicators::stddev::stddev_lookback)).
#[inline]
#[must_use]
pub const fn bollinger_lookback(length: usize) -> usize {
    length.saturating_sub(1)
}

/// Output structure containing all three Bollinger Bands series.
///
/// Each vector has the same length as the input data, index-aligned with
/// it. Points lacking sufficient history are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// The basis line (rolling mean).
    pub basis: Vec<T>,
    /// The upper band (basis + multiplier × stddev).
    pub upper: Vec<T>,
    /// The lower band (basis - multiplier × stddev).
    pub lower: Vec<T>,
}

/// Shifts a series by an integer number of positions.
///
/// The value at output position `i` is the value that was at `i - offset`
/// in the input. Where `i - offset` falls outside the series, the original
/// value at `i` is kept rather than marking the point undefined: the series
/// edges stay visually continuous instead of strictly correct. An offset of
/// zero returns the input unchanged, without copying.
///
/// # Example
///
/// ```
/// use bollinger_ta::indicators::bollinger::apply_offset;
///
/// let shifted = apply_offset(vec![1.0, 2.0, 3.0, 4.0], 2);
/// // Positions 0 and 1 have no source and keep their original values
/// assert_eq!(shifted, vec![1.0, 2.0, 1.0, 2.0]);
/// ```
#[must_use]
pub fn apply_offset<T: Copy>(series: Vec<T>, offset: i32) -> Vec<T> {
    if offset == 0 {
        return series;
    }

    let len = series.len() as i64;
    let mut shifted = Vec::with_capacity(series.len());
    for i in 0..len {
        let source = i - i64::from(offset);
        let index = if (0..len).contains(&source) { source } else { i };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        shifted.push(series[index as usize]);
    }
    shifted
}

/// Computes Bollinger Bands over a raw value series.
///
/// Series-level entry point for callers that have already extracted the
/// source values; [`bollinger_bands`] wraps this for candle input.
///
/// # Arguments
///
/// * `values` - The source values (typically closing prices)
/// * `length` - The window length for the mean and standard deviation
/// * `multiplier` - The standard-deviation multiplier for the bands
/// * `offset` - Positional shift applied to all three series
///
/// # NaN Handling
///
/// The upper and lower bands are NaN wherever the mean or the dispersion
/// is NaN; a point is never partially computed. With `length == 1` the
/// basis equals the input but the bands are all NaN.
///
/// # Errors
///
/// Returns `Error::InvalidSettings` if the length is zero or the
/// multiplier is non-finite or not strictly positive. Short or empty input
/// is not an error and produces NaN-filled (or empty) output of the input
/// length.
#[must_use = "this returns a Result with the Bollinger Bands series, which should be used"]
pub fn bollinger<T: SeriesElement>(
    values: &[T],
    length: usize,
    multiplier: T,
    offset: i32,
) -> Result<BollingerOutput<T>> {
    if !multiplier.is_finite() || multiplier <= T::zero() {
        return Err(Error::InvalidSettings {
            reason: "multiplier must be finite and greater than zero",
        });
    }

    let basis = sma(values, length)?;
    let stddev = rolling_stddev(values, length, &basis)?;

    let mut upper = Vec::with_capacity(values.len());
    let mut lower = Vec::with_capacity(values.len());
    for (&mean, &sd) in basis.iter().zip(&stddev) {
        if mean.is_nan() || sd.is_nan() {
            upper.push(T::nan());
            lower.push(T::nan());
        } else {
            upper.push(mean + multiplier * sd);
            lower.push(mean - multiplier * sd);
        }
    }

    Ok(BollingerOutput {
        basis: apply_offset(basis, offset),
        upper: apply_offset(upper, offset),
        lower: apply_offset(lower, offset),
    })
}

/// One output point of the Bollinger Bands computation.
///
/// The timestamp is copied from the input candle at the same positional
/// index; basis/upper/lower are NaN where insufficient history exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    /// Timestamp of the corresponding input candle.
    pub timestamp: i64,
    /// Basis line value.
    pub basis: f64,
    /// Upper band value.
    pub upper: f64,
    /// Lower band value.
    pub lower: f64,
}

/// Computes Bollinger Bands over a candle series.
///
/// Validates the settings, extracts the configured source field, runs the
/// three-stage pipeline (rolling mean, rolling dispersion, band assembly
/// with offset) and pairs each resulting triple with the timestamp of the
/// candle at the same index. The output always has exactly one point per
/// input candle, in the same timestamp order.
///
/// The computation is pure and re-entrant: inputs are treated as immutable
/// snapshots, each call allocates fresh output, and concurrent calls do not
/// interfere.
///
/// # Errors
///
/// Returns `Error::InvalidSettings` if the settings fail
/// [`validate`](BollingerSettings::validate). Never fails for any finite or
/// non-finite candle data; bad values degrade to NaN points in-band.
///
/// # Example
///
/// ```
/// use bollinger_ta::candle::Candle;
/// use bollinger_ta::indicators::bollinger::bollinger_bands;
/// use bollinger_ta::settings::BollingerSettings;
///
/// // Fewer candles than the window: all points undefined, no error
/// let candles = vec![Candle::new(0, 1.0, 1.0, 1.0, 1.0, 1.0)];
/// let bands = bollinger_bands(&candles, &BollingerSettings::default()).unwrap();
/// assert_eq!(bands.len(), 1);
/// assert!(bands[0].basis.is_nan());
/// ```
#[must_use = "this returns a Result with the Bollinger Bands points, which should be used"]
pub fn bollinger_bands(
    candles: &[Candle],
    settings: &BollingerSettings,
) -> Result<Vec<BandPoint>> {
    settings.validate()?;

    let values = settings.source.extract(candles);
    let output = bollinger(&values, settings.length, settings.multiplier, settings.offset)?;

    Ok(candles
        .iter()
        .enumerate()
        .map(|(i, candle)| BandPoint {
            timestamp: candle.timestamp,
            basis: output.basis[i],
            upper: output.upper[i],
            lower: output.lower[i],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::new(i as i64 * 60_000, c, c, c, c, 1_000.0))
            .collect()
    }

    // ==================== apply_offset ====================

    #[test]
    fn test_apply_offset_zero_is_identity() {
        let series = vec![1.0, 2.0, 3.0];
        assert_eq!(apply_offset(series.clone(), 0), series);
    }

    #[test]
    fn test_apply_offset_positive() {
        let shifted = apply_offset(vec![1.0, 2.0, 3.0, 4.0, 5.0], 2);
        // Interior positions read from i - 2; 0 and 1 keep originals
        assert_eq!(shifted, vec![1.0, 2.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_apply_offset_negative() {
        let shifted = apply_offset(vec![1.0, 2.0, 3.0, 4.0, 5.0], -2);
        // Positions read from i + 2; 3 and 4 keep originals
        assert_eq!(shifted, vec![3.0, 4.0, 5.0, 4.0, 5.0]);
    }

    #[test]
    fn test_apply_offset_beyond_length_keeps_everything() {
        let series = vec![1.0, 2.0, 3.0];
        assert_eq!(apply_offset(series.clone(), 10), series);
        assert_eq!(apply_offset(series.clone(), -10), series);
    }

    #[test]
    fn test_apply_offset_empty() {
        let empty: Vec<f64> = vec![];
        assert!(apply_offset(empty, 3).is_empty());
    }

    // ==================== bollinger (series level) ====================

    #[test]
    fn test_bollinger_known_values() {
        // Scenario: closes [10, 12, 11, 13, 12], length 3, multiplier 2
        let values = vec![10.0_f64, 12.0, 11.0, 13.0, 12.0];
        let result = bollinger(&values, 3, 2.0, 0).unwrap();

        for i in 0..2 {
            assert!(result.basis[i].is_nan());
            assert!(result.upper[i].is_nan());
            assert!(result.lower[i].is_nan());
        }

        // [10,12,11]: mean 11, sample stddev 1
        assert!(approx_eq(result.basis[2], 11.0, EPSILON));
        assert!(approx_eq(result.upper[2], 13.0, EPSILON));
        assert!(approx_eq(result.lower[2], 9.0, EPSILON));
    }

    #[test]
    fn test_bollinger_band_symmetry() {
        let values: Vec<f64> = (0..50).map(|x| (x as f64).sin() * 10.0 + 50.0).collect();
        let result = bollinger(&values, 5, 2.0, 0).unwrap();

        for i in 4..50 {
            let upper_dist = result.upper[i] - result.basis[i];
            let lower_dist = result.basis[i] - result.lower[i];
            assert!(
                approx_eq(upper_dist, lower_dist, EPSILON),
                "bands should be symmetric at index {}",
                i
            );
        }
    }

    #[test]
    fn test_bollinger_length_one() {
        // Basis tracks the input exactly; bands are never defined because
        // the sample denominator is zero
        let values = vec![10.0_f64, 12.0, 11.0];
        let result = bollinger(&values, 1, 2.0, 0).unwrap();

        for i in 0..3 {
            assert!(approx_eq(result.basis[i], values[i], EPSILON));
            assert!(result.upper[i].is_nan());
            assert!(result.lower[i].is_nan());
        }
    }

    #[test]
    fn test_bollinger_undefined_propagates_to_both_bands() {
        let values = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = bollinger(&values, 3, 2.0, 0).unwrap();

        for i in 2..5 {
            assert!(result.basis[i].is_nan());
            assert!(result.upper[i].is_nan());
            assert!(result.lower[i].is_nan());
        }
        assert!(!result.basis[5].is_nan());
        assert!(!result.upper[5].is_nan());
        assert!(!result.lower[5].is_nan());
    }

    #[test]
    fn test_bollinger_offset_matches_unshifted() {
        let values: Vec<f64> = (0..30).map(|x| 100.0 + (x as f64 * 0.7).sin()).collect();
        let plain = bollinger(&values, 5, 2.0, 0).unwrap();
        let shifted = bollinger(&values, 5, 2.0, 3).unwrap();

        for i in 0..30 {
            let expected = if i >= 3 { plain.basis[i - 3] } else { plain.basis[i] };
            assert!(approx_eq(shifted.basis[i], expected, EPSILON));
        }
    }

    #[test]
    fn test_bollinger_invalid_multiplier() {
        let values = vec![1.0_f64, 2.0, 3.0];
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                bollinger(&values, 2, bad, 0),
                Err(Error::InvalidSettings { .. })
            ));
        }
    }

    #[test]
    fn test_bollinger_zero_length() {
        let values = vec![1.0_f64, 2.0, 3.0];
        assert!(matches!(
            bollinger(&values, 0, 2.0, 0),
            Err(Error::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_bollinger_f32() {
        let values = vec![10.0_f32, 12.0, 11.0, 13.0];
        let result = bollinger(&values, 3, 2.0_f32, 0).unwrap();
        assert!(approx_eq(result.basis[2], 11.0_f32, 1e-5));
        assert!(approx_eq(result.upper[2], 13.0_f32, 1e-4));
    }

    // ==================== bollinger_bands (candle level) ====================

    #[test]
    fn test_bands_length_and_timestamps() {
        let candles = candles_from_closes(&[10.0, 12.0, 11.0, 13.0, 12.0]);
        let settings = BollingerSettings::new().length(3);
        let bands = bollinger_bands(&candles, &settings).unwrap();

        assert_eq!(bands.len(), candles.len());
        for (band, candle) in bands.iter().zip(&candles) {
            assert_eq!(band.timestamp, candle.timestamp);
        }
    }

    #[test]
    fn test_bands_undersized_input_is_all_undefined() {
        let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let bands = bollinger_bands(&candles, &BollingerSettings::default()).unwrap();

        assert_eq!(bands.len(), 5);
        for band in &bands {
            assert!(band.basis.is_nan());
            assert!(band.upper.is_nan());
            assert!(band.lower.is_nan());
        }
    }

    #[test]
    fn test_bands_empty_input() {
        let bands = bollinger_bands(&[], &BollingerSettings::default()).unwrap();
        assert!(bands.is_empty());
    }

    #[test]
    fn test_bands_offset_leaves_timestamps_alone() {
        let candles = candles_from_closes(&[10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0]);
        let plain = bollinger_bands(&candles, &BollingerSettings::new().length(3)).unwrap();
        let shifted =
            bollinger_bands(&candles, &BollingerSettings::new().length(3).offset(2)).unwrap();

        for i in 0..candles.len() {
            assert_eq!(shifted[i].timestamp, plain[i].timestamp);
            let expected = if i >= 2 { plain[i - 2].basis } else { plain[i].basis };
            assert!(approx_eq(shifted[i].basis, expected, EPSILON));
        }
    }

    #[test]
    fn test_bands_rejects_invalid_settings_before_computing() {
        let candles = candles_from_closes(&[1.0, 2.0, 3.0]);
        let settings = BollingerSettings::new().length(0);
        assert!(matches!(
            bollinger_bands(&candles, &settings),
            Err(Error::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_band_point_serde_round_trip() {
        let point = BandPoint {
            timestamp: 1_700_000_000_000,
            basis: 11.0,
            upper: 13.0,
            lower: 9.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: BandPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
