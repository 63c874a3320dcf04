//! Error types for geohash encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a geohash.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// The hash contains a character outside the geohash alphabet.
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index within the hash.
        position: usize,
    },

    /// Latitude or longitude is non-finite or out of range.
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Latitude as supplied by the caller.
        latitude: f64,
        /// Longitude as supplied by the caller.
        longitude: f64,
    },

    /// Requested precision is zero or above `MAX_PRECISION`.
    #[error("Invalid precision: {0}")]
    InvalidPrecision(usize),

    /// The hash is empty.
    #[error("Geohash is empty")]
    Empty,
}

/// Result type alias for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;
