//! The geohash base-32 alphabet.
//!
//! Both directions are `const` tables, so lookups never allocate and the
//! tables are shared by every caller without synchronization.

/// Symbols in value order. Excludes `a`, `i`, `l` and `o`.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by one symbol.
pub const BITS_PER_CHAR: usize = 5;

const INVALID: u8 = 0xFF;

const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the symbol for a 5-bit value.
///
/// Only the low 5 bits of `value` are used.
///
/// # Examples
///
/// ```
/// use geohash_codec::alphabet::symbol;
///
/// assert_eq!(symbol(0), '0');
/// assert_eq!(symbol(10), 'b');
/// assert_eq!(symbol(31), 'z');
/// ```
#[must_use]
pub const fn symbol(value: u8) -> char {
    ALPHABET[(value & 0x1F) as usize] as char
}

/// Returns the 5-bit value of an alphabet symbol, or `None` for any other
/// character. Upper-case letters are not symbols.
///
/// # Examples
///
/// ```
/// use geohash_codec::alphabet::value_of;
///
/// assert_eq!(value_of('s'), Some(24));
/// assert_eq!(value_of('a'), None);
/// assert_eq!(value_of('S'), None);
/// ```
#[must_use]
pub fn value_of(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    match DECODE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}
