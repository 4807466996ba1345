//! The telemetry module contains the three decoders for the APRS telemetry
//! sub-language and the record types they produce.

pub mod comment;
pub(crate) mod grammar;
pub mod metadata;
pub mod record;
pub mod report;

pub use comment::parse_comment_telemetry;
pub use metadata::{parse_telemetry_config, Equation, MetadataKind, TelemetryMetadata};
pub use record::{Number, PacketFormat, TelemetryRecord};
pub use report::parse_telemetry_report;
