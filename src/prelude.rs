//! Convenient re-exports for common usage.
//!
//! ```
//! use bollinger_ta::prelude::*;
//!
//! let candles = vec![Candle::new(0, 1.0, 1.0, 1.0, 1.0, 1.0)];
//! let bands = bollinger_bands(&candles, &BollingerSettings::default()).unwrap();
//! assert_eq!(bands.len(), 1);
//! ```

pub use crate::candle::{Candle, PriceSource};
pub use crate::error::{Error, Result};
pub use crate::indicators::bollinger::{
    apply_offset, bollinger, bollinger_bands, BandPoint, BollingerOutput,
};
pub use crate::indicators::sma::sma;
pub use crate::indicators::stddev::rolling_stddev;
pub use crate::settings::{BollingerSettings, MaType};
pub use crate::traits::SeriesElement;
pub use crate::utils::{approx_eq, EPSILON, LOOSE_EPSILON};
