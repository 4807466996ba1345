//! Shared `nom` grammar pieces for the telemetry decoders.

use crate::constants::BITS_LEN;
use nom::{
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Exactly eight `0`/`1` characters.
pub(crate) fn bit_field(input: &str) -> IResult<&str, &str> {
    take_while_m_n(BITS_LEN, BITS_LEN, |c: char| c == '0' || c == '1')(input)
}

/// `\d+(\.\d+)?`, the channel value grammar of plain-text reports.
pub(crate) fn unsigned_decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(input)
}

/// `-?\d*\.?\d+`, the EQNS coefficient grammar.
pub(crate) fn signed_decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        alt((unsigned_decimal, recognize(pair(char('.'), digit1)))),
    )))(input)
}

/// Drops trailing letters, spaces and periods left over from badly padded or
/// truncated EQNS and BITS bodies.
pub(crate) fn strip_residue(body: &str) -> &str {
    body.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == ' ' || c == '.')
}
