//! Geohash precision: how many characters a hash carries.
//!
//! Each character adds 5 bits, split between the two axes starting with
//! longitude, so a hash of `n` characters holds `ceil(5n / 2)` longitude bits
//! and `floor(5n / 2)` latitude bits.
//!
//! # Precision Table
//!
//! | Length | Latitude error | Longitude error |
//! |--------|----------------|-----------------|
//! | 1      | ±23 °          | ±23 °           |
//! | 3      | ±0.70 °        | ±0.70 °         |
//! | 5      | ±0.022 °       | ±0.022 °        |
//! | 8      | ±0.000086 °    | ±0.00017 °      |
//! | 10     | ±0.0000027 °   | ±0.0000054 °    |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::BITS_PER_CHAR;
use crate::error::{GeohashError, Result};
use crate::types::Coordinate;

/// Hash length used when the caller does not choose one.
pub const DEFAULT_PRECISION: usize = 10;

/// Longest hash `encode` will produce.
///
/// At 18 characters each axis holds 45 bits. Every interval endpoint and
/// midpoint down to that depth is exactly representable as an `f64`.
pub const MAX_PRECISION: usize = 18;

/// Decimal places never exceed this when rounding a decoded value.
const MAX_ROUNDING_PLACES: f64 = 12.0;

/// A validated geohash length in characters (`1..=MAX_PRECISION`).
///
/// # Examples
///
/// ```
/// use geohash_codec::Precision;
///
/// let precision = Precision::new(5).unwrap();
/// assert_eq!(precision.chars(), 5);
/// assert_eq!(precision.bits(), 25);
///
/// assert_eq!(Precision::default().chars(), 10);
/// assert!(Precision::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Precision(usize);

impl Precision {
    /// Creates a precision of `chars` characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrecision` if `chars` is zero or above `MAX_PRECISION`.
    pub fn new(chars: usize) -> Result<Self> {
        if (1..=MAX_PRECISION).contains(&chars) {
            Ok(Self(chars))
        } else {
            Err(GeohashError::InvalidPrecision(chars))
        }
    }

    /// Number of characters.
    #[must_use]
    pub const fn chars(self) -> usize {
        self.0
    }

    /// Total number of bits across both axes.
    #[must_use]
    pub const fn bits(self) -> usize {
        self.0 * BITS_PER_CHAR
    }

    /// Returns `(latitude_error, longitude_error)` of any hash with this
    /// length, without encoding anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_codec::Precision;
    ///
    /// let (lat_err, lon_err) = Precision::new(1).unwrap().error_bounds();
    /// assert_eq!(lat_err, 22.5);
    /// assert_eq!(lon_err, 22.5);
    /// ```
    #[must_use]
    pub fn error_bounds(self) -> (f64, f64) {
        let lon_bits = self.bits().div_ceil(2);
        let lat_bits = self.bits() / 2;
        (halve(90.0, lat_bits), halve(180.0, lon_bits))
    }

    /// Picks the shortest precision that preserves the decimal places given
    /// in `latitude` and `longitude`.
    ///
    /// A value with `d` decimal places is taken to be exact to `10^-d / 2`.
    /// Each axis gets enough bits for its error to drop to that tolerance, the
    /// larger bit count is applied to both axes, and the total is rounded up
    /// to whole characters. The result is capped at `MAX_PRECISION`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` for non-finite or out-of-range input.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_codec::Precision;
    ///
    /// assert_eq!(Precision::infer(42.6, -5.6).unwrap().chars(), 5);
    /// assert_eq!(Precision::infer(49.26, -123.26).unwrap().chars(), 7);
    /// assert_eq!(Precision::infer(-20.0, 50.0).unwrap().chars(), 4);
    /// ```
    pub fn infer(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Coordinate::new(latitude, longitude)?;

        let bits = axis_bits(coordinate.latitude, 45.0)
            .max(axis_bits(coordinate.longitude, 90.0));
        let chars = (2 * bits).div_ceil(BITS_PER_CHAR).min(MAX_PRECISION);

        Self::new(chars)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl TryFrom<usize> for Precision {
    type Error = GeohashError;

    fn try_from(chars: usize) -> Result<Self> {
        Self::new(chars)
    }
}

impl From<Precision> for usize {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `value / 2^times`, exact for the bit counts a `Precision` allows.
fn halve(value: f64, times: usize) -> f64 {
    (0..times).fold(value, |acc, _| acc / 2.0)
}

/// Number of decimal places in the shortest text form of `value`.
fn decimal_places(value: f64) -> i32 {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| i32::try_from(fraction.len()).unwrap_or(i32::MAX))
}

/// Bits one axis needs before its error (starting at `initial_error` with one
/// bit) is within half a unit of the last decimal place of `value`.
fn axis_bits(value: f64, initial_error: f64) -> usize {
    let limit = (MAX_PRECISION * BITS_PER_CHAR).div_ceil(2);
    let tolerance = 10_f64.powi(-decimal_places(value)) / 2.0;

    let mut bits = 1;
    let mut error = initial_error;
    while error > tolerance && bits < limit {
        bits += 1;
        error /= 2.0;
    }
    bits
}

/// Rounds `value` to the decimal places that are still meaningful given
/// `error`: `max(1, -round(log10(error))) - 1`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn round_to_error(value: f64, error: f64) -> f64 {
    let magnitude = -error.log10().round();
    let places = (magnitude.max(1.0) - 1.0).min(MAX_ROUNDING_PLACES);
    let multiplier = 10_f64.powi(places as i32);
    (value * multiplier).round() / multiplier
}
