//! Indicator settings.
//!
//! [`BollingerSettings`] carries everything a settings editor edits: window
//! length, standard-deviation multiplier, positional offset, price source
//! and moving-average kind. The type is plain data with deep value equality
//! and serde round-tripping, so a host can persist and restore it without
//! surprises.

use serde::{Deserialize, Serialize};

use crate::candle::{Candle, PriceSource};
use crate::error::{Error, Result};
use crate::indicators::bollinger::{bollinger_bands, BandPoint};

/// The moving-average kind used for the basis line.
///
/// Only the simple moving average is implemented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaType {
    /// Simple moving average.
    #[default]
    #[serde(rename = "SMA")]
    Sma,
}

/// Bollinger Bands configuration with fluent builder API.
///
/// Provides the conventional defaults (length 20, multiplier 2.0, offset 0,
/// closing price, SMA) and fluent setters for customization. Immutable per
/// computation call.
///
/// # Example
///
/// ```
/// use bollinger_ta::settings::BollingerSettings;
///
/// // Use defaults (20, 2.0, 0)
/// let settings = BollingerSettings::default();
/// assert_eq!(settings.length, 20);
///
/// // Or customize with the fluent API
/// let settings = BollingerSettings::new()
///     .length(10)
///     .multiplier(2.5)
///     .offset(-3);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerSettings {
    /// Window length for the moving average and standard deviation.
    pub length: usize,
    /// Moving-average kind for the basis line.
    pub ma_type: MaType,
    /// Candle field feeding the computation.
    pub source: PriceSource,
    /// Standard-deviation multiplier for the bands (typically 2.0).
    pub multiplier: f64,
    /// Positional shift applied to all three series; may be negative.
    pub offset: i32,
}

impl Default for BollingerSettings {
    /// Creates settings with the conventional parameters (20, 2.0, 0).
    fn default() -> Self {
        Self {
            length: 20,
            ma_type: MaType::Sma,
            source: PriceSource::Close,
            multiplier: 2.0,
            offset: 0,
        }
    }
}

impl BollingerSettings {
    /// Creates settings with the conventional parameters (20, 2.0, 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    ///
    /// Default: 20
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the standard-deviation multiplier for the bands.
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the positional offset applied to all three series.
    ///
    /// Default: 0
    #[must_use]
    pub const fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Validates the settings.
    ///
    /// Malformed configuration is rejected up front rather than silently
    /// degrading to all-undefined output. The offset is unconstrained:
    /// shifts past the series edges fall back to the unshifted values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSettings` if:
    /// - the window length is zero
    /// - the multiplier is non-finite or not strictly positive
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidSettings {
                reason: "window length must be at least 1",
            });
        }
        if !self.multiplier.is_finite() {
            return Err(Error::InvalidSettings {
                reason: "multiplier must be finite",
            });
        }
        if self.multiplier <= 0.0 {
            return Err(Error::InvalidSettings {
                reason: "multiplier must be greater than zero",
            });
        }
        Ok(())
    }

    /// Computes Bollinger Bands over a candle series with these settings.
    ///
    /// Convenience wrapper around
    /// [`bollinger_bands`](crate::indicators::bollinger::bollinger_bands).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSettings` if [`validate`](Self::validate)
    /// fails.
    pub fn compute(&self, candles: &[Candle]) -> Result<Vec<BandPoint>> {
        bollinger_bands(candles, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BollingerSettings::default();
        assert_eq!(settings.length, 20);
        assert_eq!(settings.ma_type, MaType::Sma);
        assert_eq!(settings.source, PriceSource::Close);
        assert!((settings.multiplier - 2.0).abs() < 1e-10);
        assert_eq!(settings.offset, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_fluent_setters() {
        let settings = BollingerSettings::new()
            .length(14)
            .multiplier(1.5)
            .offset(-2);
        assert_eq!(settings.length, 14);
        assert!((settings.multiplier - 1.5).abs() < 1e-10);
        assert_eq!(settings.offset, -2);
    }

    #[test]
    fn test_validate_zero_length() {
        let settings = BollingerSettings::new().length(0);
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_validate_non_positive_multiplier() {
        for bad in [0.0, -2.0] {
            let settings = BollingerSettings::new().multiplier(bad);
            assert!(matches!(
                settings.validate(),
                Err(Error::InvalidSettings { .. })
            ));
        }
    }

    #[test]
    fn test_validate_non_finite_multiplier() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let settings = BollingerSettings::new().multiplier(bad);
            assert!(matches!(
                settings.validate(),
                Err(Error::InvalidSettings { .. })
            ));
        }
    }

    #[test]
    fn test_validate_length_one_is_accepted() {
        // Length 1 is a valid window; the bands are just never defined
        // because the sample-stddev denominator is zero.
        assert!(BollingerSettings::new().length(1).validate().is_ok());
    }

    #[test]
    fn test_negative_offset_is_accepted() {
        assert!(BollingerSettings::new().offset(-100).validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip_preserves_equality() {
        let settings = BollingerSettings::new()
            .length(30)
            .multiplier(1.75)
            .offset(5);
        let json = serde_json::to_string(&settings).unwrap();
        let back: BollingerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_serde_field_names_match_persisted_shape() {
        let json = serde_json::to_value(BollingerSettings::default()).unwrap();
        assert_eq!(json["length"], 20);
        assert_eq!(json["maType"], "SMA");
        assert_eq!(json["source"], "close");
        assert_eq!(json["offset"], 0);
    }
}
