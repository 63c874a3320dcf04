//! Coordinate and decode result types.

use serde::{Deserialize, Serialize};

use crate::error::{GeohashError, Result};
use crate::precision::round_to_error;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use geohash_codec::Coordinate;
///
/// let coordinate = Coordinate::new(49.26, -123.26).unwrap();
/// assert_eq!(coordinate.encode(7).unwrap(), "c2b25ps");
///
/// assert!(Coordinate::new(90.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in `[-90, 90]`
    pub latitude: f64,

    /// Longitude in `[-180, 180]`
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate after checking both values are finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if either value is NaN, infinite, or
    /// outside its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid_lat =
            latitude.is_finite() && (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude);
        let valid_lon =
            longitude.is_finite() && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude);

        if valid_lat && valid_lon {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            tracing::debug!(latitude, longitude, "rejected coordinate");
            Err(GeohashError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Encodes this coordinate as a geohash of `precision` characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrecision` if `precision` is zero or above
    /// `MAX_PRECISION`, or `InvalidCoordinate` if the fields were set out of
    /// range after construction.
    pub fn encode(&self, precision: usize) -> Result<String> {
        crate::codec::encode(self.latitude, self.longitude, precision)
    }
}

/// Result of decoding a geohash: the center of its cell and the distance from
/// that center to the cell edges.
///
/// # Examples
///
/// ```
/// use geohash_codec::decode;
///
/// let decoded = decode("ezs42").unwrap();
/// assert_eq!(decoded.latitude, 42.60498046875);
/// assert_eq!(decoded.latitude_error, 0.02197265625);
///
/// let rounded = decoded.rounded();
/// assert_eq!((rounded.latitude, rounded.longitude), (42.6, -5.6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoded {
    /// Midpoint of the latitude range
    pub latitude: f64,

    /// Midpoint of the longitude range
    pub longitude: f64,

    /// Half the width of the latitude range
    pub latitude_error: f64,

    /// Half the width of the longitude range
    pub longitude_error: f64,
}

impl Decoded {
    /// The decoded midpoint as a `Coordinate`.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// The midpoint rounded to the decimal places its error bounds can
    /// support.
    ///
    /// Decoding a hash made by `encode_auto` and rounding gives back the
    /// original input.
    #[must_use]
    pub fn rounded(&self) -> Coordinate {
        Coordinate {
            latitude: round_to_error(self.latitude, self.latitude_error),
            longitude: round_to_error(self.longitude, self.longitude_error),
        }
    }

    /// The cell described by the midpoint and error bounds.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min_latitude: self.latitude - self.latitude_error,
            max_latitude: self.latitude + self.latitude_error,
            min_longitude: self.longitude - self.longitude_error,
            max_longitude: self.longitude + self.longitude_error,
        }
    }
}

/// The latitude and longitude ranges a geohash covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    pub min_latitude: f64,
    /// Northern edge
    pub max_latitude: f64,
    /// Western edge
    pub min_longitude: f64,
    /// Eastern edge
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Midpoint of both ranges.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: (self.min_latitude + self.max_latitude) / 2.0,
            longitude: (self.min_longitude + self.max_longitude) / 2.0,
        }
    }

    /// Half the latitude range.
    #[must_use]
    pub fn latitude_error(&self) -> f64 {
        (self.max_latitude - self.min_latitude) / 2.0
    }

    /// Half the longitude range.
    #[must_use]
    pub fn longitude_error(&self) -> f64 {
        (self.max_longitude - self.min_longitude) / 2.0
    }

    /// Whether `coordinate` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&coordinate.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&coordinate.longitude)
    }
}

impl From<BoundingBox> for Decoded {
    fn from(bbox: BoundingBox) -> Self {
        let center = bbox.center();
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_error: bbox.latitude_error(),
            longitude_error: bbox.longitude_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn coordinate_accepts_boundaries() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            let coordinate = Coordinate::new(lat, lon).unwrap();
            assert_eq!(coordinate.latitude, lat);
            assert_eq!(coordinate.longitude, lon);
        }
    }

    #[test]
    fn coordinate_rejects_out_of_range() {
        let err = Coordinate::new(-90.000_1, 0.0).unwrap_err();
        assert_eq!(
            err,
            GeohashError::InvalidCoordinate {
                latitude: -90.000_1,
                longitude: 0.0
            }
        );
        assert!(Coordinate::new(0.0, 180.000_1).is_err());
    }

    #[test]
    fn coordinate_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinate::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn bounding_box_center_and_errors() {
        let bbox = BoundingBox {
            min_latitude: 0.0,
            max_latitude: 45.0,
            min_longitude: 0.0,
            max_longitude: 45.0,
        };
        assert_eq!(
            bbox.center(),
            Coordinate {
                latitude: 22.5,
                longitude: 22.5
            }
        );
        assert_eq!(bbox.latitude_error(), 22.5);
        assert_eq!(bbox.longitude_error(), 22.5);
    }

    #[test]
    fn bounding_box_contains_edges() {
        let bbox = BoundingBox {
            min_latitude: -45.0,
            max_latitude: 0.0,
            min_longitude: -45.0,
            max_longitude: 0.0,
        };
        assert!(bbox.contains(&Coordinate {
            latitude: 0.0,
            longitude: -45.0
        }));
        assert!(!bbox.contains(&Coordinate {
            latitude: 0.1,
            longitude: -10.0
        }));
    }

    #[test]
    fn decoded_from_bounding_box() {
        let bbox = BoundingBox {
            min_latitude: -90.0,
            max_latitude: -45.0,
            min_longitude: -180.0,
            max_longitude: -135.0,
        };
        let decoded = Decoded::from(bbox);
        assert_eq!(decoded.latitude, -67.5);
        assert_eq!(decoded.longitude, -157.5);
        assert_eq!(decoded.latitude_error, 22.5);
        assert_eq!(decoded.longitude_error, 22.5);
        assert_eq!(decoded.bounding_box(), bbox);
        assert_eq!(decoded.coordinate(), bbox.center());
    }

    #[test]
    fn decoded_serializes_all_fields() {
        let decoded = Decoded {
            latitude: 22.5,
            longitude: -22.5,
            latitude_error: 22.5,
            longitude_error: 22.5,
        };
        let json = serde_json::to_string(&decoded).unwrap();
        for field in ["latitude", "longitude", "latitude_error", "longitude_error"] {
            assert!(json.contains(field), "{field} missing from {json}");
        }
        let recovered: Decoded = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, decoded);
    }
}
