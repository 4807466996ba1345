//! # Telemetry Error Handling
//!
//! This module defines the `FormatError` enum. A `FormatError` is only ever
//! returned for input that is recognizably telemetry but violates the encoding
//! rules; input that does not look like telemetry at all is reported as `None`
//! by the decoders instead.

use crate::constants::{MAX_BITS_TITLE_LEN, MAX_PARM_NAME_LEN};
use crate::telemetry::metadata::MetadataKind;
use thiserror::Error;

/// Represents the different error types that can occur while decoding telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A PARM or UNIT field is longer than the accepted maximum.
    #[error(
        "Incorrect format of {kind} (name too long?): field {position} is {length} characters, limit is {}",
        MAX_PARM_NAME_LEN
    )]
    NameTooLong {
        kind: MetadataKind,
        position: usize,
        length: usize,
    },

    /// An EQNS coefficient does not match the numeric grammar.
    #[error("Value {value:?} at {position} is not a number in {kind}")]
    NotANumber {
        kind: MetadataKind,
        position: usize,
        value: String,
    },

    /// A BITS body is not eight binary digits, a comma and a title.
    #[error(
        "Incorrect format of BITS (title too long?): expected 8 binary digits, a comma and at most {} title characters",
        MAX_BITS_TITLE_LEN
    )]
    MalformedBits,

    /// A character outside the base-91 alphabet.
    #[error("Invalid base91 character: {0:?}")]
    InvalidBase91(char),

    /// A base-91 string too long to fit the decoded integer.
    #[error("Base91 value overflows a 32-bit integer")]
    Base91Overflow,
}
