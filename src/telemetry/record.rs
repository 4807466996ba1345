use crate::constants::ANALOG_CHANNELS;
use serde::Serialize;
use std::fmt;

/// A numeric value that keeps track of whether it was decoded as an integer.
///
/// EQNS coefficients and base-91 channel values are integers on the wire and
/// stay that way; plain-text report channels are always floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as a float, regardless of how it was decoded.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One telemetry sample: a sequence number, five analog channels and
/// optionally eight digital channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub seq: u32,
    pub vals: [Number; ANALOG_CHANNELS],
    /// Eight `'0'`/`'1'` characters, present only when the packet carried a digital byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
}

impl TelemetryRecord {
    /// Digital channel `index` (0..8) as a boolean, if the record carries bits.
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits
            .as_deref()
            .and_then(|bits| bits.as_bytes().get(index))
            .map(|b| *b == b'1')
    }
}

/// The `format` label the enclosing packet parser attaches to telemetry packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PacketFormat {
    /// A PARM/UNIT/EQNS/BITS definition message.
    TelemetryMessage,
    /// A `#seq,...` plain-text report.
    TelemetryReport,
}

impl PacketFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PacketFormat::TelemetryMessage => "telemetry-message",
            PacketFormat::TelemetryReport => "telemetry-report",
        }
    }
}

impl fmt::Display for PacketFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
