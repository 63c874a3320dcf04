//! Geohash Codec
//!
//! Encodes latitude/longitude pairs into base-32 geohash strings and decodes
//! them back into an approximate coordinate with an error bound.
//!
//! Output matches geohash.org bit-for-bit: bits alternate longitude-first,
//! each bit halves the active axis range, and every 5 bits map to one symbol of
//! `0123456789bcdefghjkmnpqrstuvwxyz`.
//!
//! # Example Usage
//!
//! ```
//! use geohash_codec::{decode, encode};
//!
//! let hash = encode(42.6, -5.6, 5).unwrap();
//! assert_eq!(hash, "ezs42");
//!
//! let decoded = decode(&hash).unwrap();
//! assert!((decoded.latitude - 42.6).abs() <= decoded.latitude_error);
//! assert!((decoded.longitude - -5.6).abs() <= decoded.longitude_error);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod precision;
pub mod types;

pub use codec::{decode, decode_bbox, encode, encode_auto, encode_default};
pub use error::{GeohashError, Result};
pub use precision::{Precision, DEFAULT_PRECISION, MAX_PRECISION};
pub use types::{BoundingBox, Coordinate, Decoded};
