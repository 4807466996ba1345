//! # Base-91 Codec
//!
//! APRS packs integers into printable text using a 91-symbol alphabet running
//! from `!` (value 0) to `{` (value 90). Digits are most-significant first, so
//! `"!!"` is 0 and `"{{"` is 91² − 1.
//!
//! ```rust
//! use aprs_telemetry::base91;
//!
//! assert_eq!(base91::decode("#$").unwrap(), 2 * 91 + 3);
//! assert_eq!(base91::encode(185, 2), "#$");
//! ```

use crate::constants::{BASE91_FIRST, BASE91_LAST, BASE91_RADIX};
use crate::error::FormatError;

/// Returns `true` when `c` belongs to the base-91 alphabet.
pub fn is_base91(c: char) -> bool {
    (BASE91_FIRST..=BASE91_LAST).contains(&c)
}

/// Decode a base-91 string into an integer.
///
/// The empty string decodes to 0.
pub fn decode(text: &str) -> Result<u32, FormatError> {
    text.chars().try_fold(0u32, |acc, c| {
        if !is_base91(c) {
            return Err(FormatError::InvalidBase91(c));
        }
        acc.checked_mul(BASE91_RADIX)
            .and_then(|acc| acc.checked_add(digit_value(c)))
            .ok_or(FormatError::Base91Overflow)
    })
}

/// Decode a group already known to be short and within the alphabet.
pub(crate) fn decode_group(group: &str) -> u32 {
    group
        .chars()
        .fold(0, |acc, c| acc * BASE91_RADIX + digit_value(c))
}

/// Encode `value` as base-91, left-padded with `!` to at least `width` symbols.
pub fn encode(mut value: u32, width: usize) -> String {
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(symbol(value % BASE91_RADIX));
        value /= BASE91_RADIX;
    }
    while digits.len() < width {
        digits.push(BASE91_FIRST);
    }
    digits.iter().rev().collect()
}

fn digit_value(c: char) -> u32 {
    c as u32 - BASE91_FIRST as u32
}

fn symbol(digit: u32) -> char {
    // digit < 91 keeps the result inside the alphabet
    char::from_u32(BASE91_FIRST as u32 + digit).unwrap_or(BASE91_FIRST)
}
