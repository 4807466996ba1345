//! # Telemetry Metadata
//!
//! Stations describe their telemetry channels with four kinds of message
//! bodies:
//!
//! | Tag     | Body                                 | Decoded as                     |
//! |---------|--------------------------------------|--------------------------------|
//! | `PARM.` | up to 13 comma separated names       | [`TelemetryMetadata::ParmNames`] |
//! | `UNIT.` | up to 13 comma separated units       | [`TelemetryMetadata::UnitNames`] |
//! | `EQNS.` | up to 15 coefficients, `a,b,c` × 5   | [`TelemetryMetadata::EqnsCoeffs`] |
//! | `BITS.` | 8 binary digits, `,`, project title  | [`TelemetryMetadata::BitsSpec`]  |
//!
//! Producers in the wild over-pad or truncate EQNS and BITS bodies, so
//! trailing letters, spaces and periods are discarded before those bodies are
//! checked.

use crate::constants::{
    ANALOG_CHANNELS, EQNS_TERMS, MAX_BITS_TITLE_LEN, MAX_EQNS_FIELDS, MAX_PARM_FIELDS,
    MAX_PARM_NAME_LEN,
};
use crate::error::FormatError;
use crate::telemetry::grammar::{bit_field, signed_decimal, strip_residue};
use crate::telemetry::record::{Number, PacketFormat};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{all_consuming, rest, value, verify},
    sequence::{separated_pair, terminated},
    IResult,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which of the four metadata messages a body carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    Parm,
    Unit,
    Eqns,
    Bits,
}

impl MetadataKind {
    /// The tag as it appears on the wire, without the trailing period.
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKind::Parm => "PARM",
            MetadataKind::Unit => "UNIT",
            MetadataKind::Eqns => "EQNS",
            MetadataKind::Bits => "BITS",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scaling equation for one analog channel: `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    pub a: Number,
    pub b: Number,
    pub c: Number,
}

impl Equation {
    pub fn new(a: impl Into<Number>, b: impl Into<Number>, c: impl Into<Number>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// Convert a raw channel value to engineering units.
    pub fn apply(&self, x: f64) -> f64 {
        self.a.as_f64() * x * x + self.b.as_f64() * x + self.c.as_f64()
    }
}

/// The identity equation `0·x² + 1·x + 0`.
impl Default for Equation {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

impl Serialize for Equation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.a, self.b, self.c].serialize(serializer)
    }
}

/// A decoded metadata message. Exactly one shape is populated per message.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryMetadata {
    /// Channel names, padded with empty strings.
    ParmNames([String; MAX_PARM_FIELDS]),
    /// Channel units or labels, padded with empty strings.
    UnitNames([String; MAX_PARM_FIELDS]),
    /// One scaling equation per analog channel.
    EqnsCoeffs([Equation; ANALOG_CHANNELS]),
    /// Active-bit sense for the digital channels and the project title.
    BitsSpec { bits: String, title: String },
}

/// Keys follow the APRS packet dictionary: `tPARM`, `tUNIT`, `tEQNS`, and
/// `tBITS` with `title` as a sibling key.
impl Serialize for TelemetryMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TelemetryMetadata::ParmNames(names) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("tPARM", names)?;
                map.end()
            }
            TelemetryMetadata::UnitNames(names) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("tUNIT", names)?;
                map.end()
            }
            TelemetryMetadata::EqnsCoeffs(eqns) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("tEQNS", eqns)?;
                map.end()
            }
            TelemetryMetadata::BitsSpec { bits, title } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("tBITS", bits)?;
                map.serialize_entry("title", title)?;
                map.end()
            }
        }
    }
}

impl TelemetryMetadata {
    pub fn kind(&self) -> MetadataKind {
        match self {
            TelemetryMetadata::ParmNames(_) => MetadataKind::Parm,
            TelemetryMetadata::UnitNames(_) => MetadataKind::Unit,
            TelemetryMetadata::EqnsCoeffs(_) => MetadataKind::Eqns,
            TelemetryMetadata::BitsSpec { .. } => MetadataKind::Bits,
        }
    }

    pub fn format(&self) -> PacketFormat {
        PacketFormat::TelemetryMessage
    }
}

/// `PARM.`, `UNIT.`, `EQNS.` or `BITS.`
fn metadata_tag(input: &str) -> IResult<&str, MetadataKind> {
    terminated(
        alt((
            value(MetadataKind::Parm, tag("PARM")),
            value(MetadataKind::Unit, tag("UNIT")),
            value(MetadataKind::Eqns, tag("EQNS")),
            value(MetadataKind::Bits, tag("BITS")),
        )),
        char('.'),
    )(input)
}

/// `[01]{8},.{0,183}` spanning the whole input
fn bits_definition(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(
        bit_field,
        char(','),
        verify(rest, |title: &str| {
            title.chars().count() <= MAX_BITS_TITLE_LEN
        }),
    ))(input)
}

/// Decode a PARM/UNIT/EQNS/BITS message body.
///
/// Returns the body after the tag together with the decoded message. A body
/// without one of the four tags is returned unchanged with `None`. A tagged
/// body with invalid content is an error.
///
/// ```rust
/// use aprs_telemetry::{parse_telemetry_config, TelemetryMetadata};
///
/// let (_, metadata) = parse_telemetry_config("BITS.11001100,Project Title").unwrap();
/// assert_eq!(
///     metadata,
///     Some(TelemetryMetadata::BitsSpec {
///         bits: "11001100".to_string(),
///         title: "Project Title".to_string(),
///     })
/// );
/// ```
pub fn parse_telemetry_config(
    body: &str,
) -> Result<(&str, Option<TelemetryMetadata>), FormatError> {
    let Ok((remainder, kind)) = metadata_tag(body) else {
        return Ok((body, None));
    };

    log::debug!("Attempting to parse {} packet", PacketFormat::TelemetryMessage);

    let metadata = match kind {
        MetadataKind::Parm => TelemetryMetadata::ParmNames(parse_names(kind, remainder)?),
        MetadataKind::Unit => TelemetryMetadata::UnitNames(parse_names(kind, remainder)?),
        MetadataKind::Eqns => TelemetryMetadata::EqnsCoeffs(parse_equations(remainder)?),
        MetadataKind::Bits => parse_bits(remainder)?,
    };

    Ok((remainder, Some(metadata)))
}

fn parse_names(
    kind: MetadataKind,
    remainder: &str,
) -> Result<[String; MAX_PARM_FIELDS], FormatError> {
    let fields: Vec<&str> = remainder
        .trim_end()
        .split(',')
        .take(MAX_PARM_FIELDS)
        .collect();

    for (idx, field) in fields.iter().enumerate() {
        let length = field.chars().count();
        if length > MAX_PARM_NAME_LEN {
            return Err(FormatError::NameTooLong {
                kind,
                position: idx + 1,
                length,
            });
        }
    }

    Ok(std::array::from_fn(|idx| {
        fields.get(idx).map(|f| f.to_string()).unwrap_or_default()
    }))
}

fn parse_equations(remainder: &str) -> Result<[Equation; ANALOG_CHANNELS], FormatError> {
    let mut coefficients: Vec<Number> = [Equation::default(); ANALOG_CHANNELS]
        .iter()
        .flat_map(|eqn| [eqn.a, eqn.b, eqn.c])
        .collect();

    let fields = strip_residue(remainder.trim_end())
        .split(',')
        .take(MAX_EQNS_FIELDS);
    for (idx, field) in fields.enumerate() {
        coefficients[idx] = parse_coefficient(field.trim_start(), idx + 1)?;
    }

    Ok(std::array::from_fn(|channel| {
        let terms = &coefficients[channel * EQNS_TERMS..(channel + 1) * EQNS_TERMS];
        Equation {
            a: terms[0],
            b: terms[1],
            c: terms[2],
        }
    }))
}

/// Empty fields count as 0; integers stay integers unless they overflow.
fn parse_coefficient(field: &str, position: usize) -> Result<Number, FormatError> {
    let not_a_number = || FormatError::NotANumber {
        kind: MetadataKind::Eqns,
        position,
        value: field.to_string(),
    };

    if field.is_empty() {
        return Ok(Number::Int(0));
    }
    all_consuming(signed_decimal)(field).map_err(|_| not_a_number())?;

    if let Ok(int) = field.parse::<i64>() {
        return Ok(Number::Int(int));
    }
    field
        .parse::<f64>()
        .map(Number::Float)
        .map_err(|_| not_a_number())
}

fn parse_bits(remainder: &str) -> Result<TelemetryMetadata, FormatError> {
    let body = remainder.trim_end();
    let (bits, title) = [body, strip_residue(body)]
        .into_iter()
        .find_map(|candidate| bits_definition(candidate).ok())
        .map(|(_, parsed)| parsed)
        .ok_or(FormatError::MalformedBits)?;

    Ok(TelemetryMetadata::BitsSpec {
        bits: bits.to_string(),
        title: title.trim_matches(' ').to_string(),
    })
}
