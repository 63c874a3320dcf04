//! Known geohash vectors.
//!
//! Every pair below was produced on geohash.org. Encoding must match
//! character for character, and decoding must land within the hash's own
//! error bounds of the input.

// Rounded values are compared bit-exactly against the literals they came from.
#![allow(clippy::float_cmp)]

use geohash_codec::{decode, decode_bbox, encode, encode_auto, Coordinate, GeohashError};

const VECTORS: [(&str, f64, f64); 7] = [
    ("ezs42", 42.6, -5.6),
    ("mh7w", -20.0, 50.0),
    ("t3b9m", 10.1, 57.2),
    ("c2b25ps", 49.26, -123.26),
    ("80021bgm", 0.005, -179.567),
    ("k484ht99h2", -30.555_55, 0.2),
    ("8buh2w4pnt", 5.000_01, -140.6),
];

#[test]
fn encode_matches_known_hashes() {
    for (hash, lat, lon) in VECTORS {
        assert_eq!(
            encode(lat, lon, hash.len()).unwrap(),
            hash,
            "encode({lat}, {lon}, {})",
            hash.len()
        );
    }
}

#[test]
fn decode_lands_within_error_bounds() {
    for (hash, lat, lon) in VECTORS {
        let decoded = decode(hash).unwrap();
        assert!(
            (decoded.latitude - lat).abs() <= decoded.latitude_error,
            "{hash}: latitude {} too far from {lat}",
            decoded.latitude
        );
        assert!(
            (decoded.longitude - lon).abs() <= decoded.longitude_error,
            "{hash}: longitude {} too far from {lon}",
            decoded.longitude
        );
    }
}

#[test]
fn decode_ezs42_midpoint() {
    let decoded = decode("ezs42").unwrap();

    assert_eq!(decoded.latitude, 42.604_980_468_75);
    assert_eq!(decoded.longitude, -5.603_027_343_75);
    assert_eq!(decoded.latitude_error, 0.021_972_656_25);
    assert_eq!(decoded.longitude_error, 0.021_972_656_25);
}

#[test]
fn encode_auto_picks_known_lengths() {
    for (hash, lat, lon) in VECTORS {
        assert_eq!(encode_auto(lat, lon).unwrap(), hash, "encode_auto({lat}, {lon})");
    }
}

#[test]
fn rounded_decode_recovers_input() {
    for (hash, lat, lon) in VECTORS {
        let rounded = decode(hash).unwrap().rounded();
        assert_eq!(
            rounded,
            Coordinate {
                latitude: lat,
                longitude: lon
            },
            "rounded decode of {hash}"
        );
    }
}

#[test]
fn bounding_box_contains_input() {
    for (hash, lat, lon) in VECTORS {
        let bbox = decode_bbox(hash).unwrap();
        assert!(
            bbox.contains(&Coordinate::new(lat, lon).unwrap()),
            "{hash} box {bbox:?} misses ({lat}, {lon})"
        );
    }
}

#[test]
fn decode_rejects_letter_a() {
    assert_eq!(
        decode("a1b2"),
        Err(GeohashError::InvalidCharacter {
            character: 'a',
            position: 0
        })
    );
}

#[test]
fn decode_rejects_each_excluded_letter() {
    for bad in ['a', 'i', 'l', 'o'] {
        let hash = format!("ezs{bad}2");
        assert_eq!(
            decode(&hash),
            Err(GeohashError::InvalidCharacter {
                character: bad,
                position: 3
            })
        );
    }
}
