//! Geohash encoding and decoding.
//!
//! Both directions run the same reduction: two intervals start at the full
//! latitude and longitude ranges and every bit halves one of them. Bits
//! alternate longitude-first under a single counter that is never reset at
//! character boundaries.

use crate::alphabet::{symbol, value_of, BITS_PER_CHAR};
use crate::error::{GeohashError, Result};
use crate::precision::Precision;
use crate::types::{BoundingBox, Coordinate, Decoded, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Closed range on one axis, narrowed in place.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    const fn new((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }

    fn mid(self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Keeps the half containing `value` and returns `true` for the upper one.
    fn narrow_toward(&mut self, value: f64) -> bool {
        let mid = self.mid();
        if value >= mid {
            self.low = mid;
            true
        } else {
            self.high = mid;
            false
        }
    }

    /// Keeps the upper half if `upper`, otherwise the lower half.
    fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.low = mid;
        } else {
            self.high = mid;
        }
    }
}

/// The two intervals of one encode or decode call.
#[derive(Debug)]
struct Cell {
    latitude: Interval,
    longitude: Interval,
}

impl Cell {
    const fn new() -> Self {
        Self {
            latitude: Interval::new(LATITUDE_RANGE),
            longitude: Interval::new(LONGITUDE_RANGE),
        }
    }

    /// Even bits refine longitude, odd bits latitude.
    fn axis(&mut self, bit_index: usize) -> &mut Interval {
        if bit_index % 2 == 0 {
            &mut self.longitude
        } else {
            &mut self.latitude
        }
    }

    const fn into_bounding_box(self) -> BoundingBox {
        BoundingBox {
            min_latitude: self.latitude.low,
            max_latitude: self.latitude.high,
            min_longitude: self.longitude.low,
            max_longitude: self.longitude.high,
        }
    }
}

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// # Errors
///
/// - `InvalidCoordinate` if latitude is not in `[-90, 90]` or longitude is
///   not in `[-180, 180]` (NaN and infinities included)
/// - `InvalidPrecision` if `precision` is zero or above `MAX_PRECISION`
///
/// # Examples
///
/// ```
/// use geohash_codec::encode;
///
/// assert_eq!(encode(42.6, -5.6, 5).unwrap(), "ezs42");
/// assert_eq!(encode(-20.0, 50.0, 4).unwrap(), "mh7w");
///
/// // Shorter hashes are prefixes of longer ones
/// let long = encode(37.7749, -122.4194, 8).unwrap();
/// assert!(long.starts_with(&encode(37.7749, -122.4194, 5).unwrap()));
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    let coordinate = Coordinate::new(latitude, longitude)?;
    let precision = Precision::new(precision).inspect_err(|_| {
        tracing::debug!(precision, "rejected precision");
    })?;

    Ok(encode_coordinate(coordinate, precision))
}

/// Encodes with `DEFAULT_PRECISION` (10 characters).
///
/// # Errors
///
/// Returns `InvalidCoordinate` for out-of-range or non-finite input.
///
/// # Examples
///
/// ```
/// use geohash_codec::encode_default;
///
/// assert_eq!(encode_default(-30.55555, 0.2).unwrap(), "k484ht99h2");
/// ```
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String> {
    let coordinate = Coordinate::new(latitude, longitude)?;
    Ok(encode_coordinate(coordinate, Precision::default()))
}

/// Encodes with the shortest precision that keeps the decimal places the
/// caller supplied (see [`Precision::infer`]).
///
/// # Errors
///
/// Returns `InvalidCoordinate` for out-of-range or non-finite input.
///
/// # Examples
///
/// ```
/// use geohash_codec::{decode, encode_auto};
///
/// let hash = encode_auto(49.26, -123.26).unwrap();
/// assert_eq!(hash, "c2b25ps");
///
/// let rounded = decode(&hash).unwrap().rounded();
/// assert_eq!((rounded.latitude, rounded.longitude), (49.26, -123.26));
/// ```
pub fn encode_auto(latitude: f64, longitude: f64) -> Result<String> {
    let coordinate = Coordinate::new(latitude, longitude)?;
    let precision = Precision::infer(latitude, longitude)?;
    Ok(encode_coordinate(coordinate, precision))
}

fn encode_coordinate(coordinate: Coordinate, precision: Precision) -> String {
    let mut cell = Cell::new();
    let mut hash = String::with_capacity(precision.chars());
    let mut bit_index = 0;

    for _ in 0..precision.chars() {
        let mut bits = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let value = if bit_index % 2 == 0 {
                coordinate.longitude
            } else {
                coordinate.latitude
            };
            let upper = cell.axis(bit_index).narrow_toward(value);
            bits = (bits << 1) | u8::from(upper);
            bit_index += 1;
        }
        hash.push(symbol(bits));
    }

    tracing::trace!(
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        %precision,
        %hash,
        "encoded geohash"
    );
    hash
}

/// Decodes a geohash into the center of its cell and the error bounds.
///
/// # Errors
///
/// - `Empty` if `hash` is empty
/// - `InvalidCharacter` at the first character outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_codec::{decode, GeohashError};
///
/// let decoded = decode("s").unwrap();
/// assert_eq!((decoded.latitude, decoded.longitude), (22.5, 22.5));
/// assert_eq!((decoded.latitude_error, decoded.longitude_error), (22.5, 22.5));
///
/// assert_eq!(
///     decode("a1b2"),
///     Err(GeohashError::InvalidCharacter { character: 'a', position: 0 })
/// );
/// ```
pub fn decode(hash: &str) -> Result<Decoded> {
    decode_bbox(hash).map(Decoded::from)
}

/// Decodes a geohash into the latitude and longitude ranges it covers.
///
/// # Errors
///
/// Same as [`decode`].
///
/// # Examples
///
/// ```
/// use geohash_codec::decode_bbox;
///
/// let bbox = decode_bbox("7").unwrap();
/// assert_eq!((bbox.min_latitude, bbox.max_latitude), (-45.0, 0.0));
/// assert_eq!((bbox.min_longitude, bbox.max_longitude), (-45.0, 0.0));
/// ```
pub fn decode_bbox(hash: &str) -> Result<BoundingBox> {
    if hash.is_empty() {
        tracing::debug!("rejected empty geohash");
        return Err(GeohashError::Empty);
    }

    let mut cell = Cell::new();
    let mut bit_index = 0;

    for (position, character) in hash.chars().enumerate() {
        let Some(bits) = value_of(character) else {
            tracing::debug!(hash, position, %character, "rejected geohash character");
            return Err(GeohashError::InvalidCharacter {
                character,
                position,
            });
        };

        for shift in (0..BITS_PER_CHAR).rev() {
            cell.axis(bit_index).narrow((bits >> shift) & 1 == 1);
            bit_index += 1;
        }
    }

    let bbox = cell.into_bounding_box();
    tracing::trace!(hash, ?bbox, "decoded geohash");
    Ok(bbox)
}
