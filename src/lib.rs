//! # aprs-telemetry - Decoding the APRS Telemetry Sub-Language
//!
//! APRS stations send telemetry in three textual shapes, all decoded by this crate:
//!
//! - a base-91 block embedded in a comment: `|ss112233445566|`
//! - metadata messages describing the channels: `PARM.`, `UNIT.`, `EQNS.`, `BITS.`
//! - plain-text reports: `#seq,v1,v2,v3,v4,v5,bbbbbbbb`
//!
//! Each decoder tells "not telemetry" apart from "broken telemetry". Text that
//! does not match a decoder's grammar comes back unchanged with `None`. Text
//! that matches but carries invalid content is a [`FormatError`].
//!
//! ## Usage
//!
//! ```rust
//! use aprs_telemetry::{
//!     parse_comment_telemetry, parse_telemetry_config, parse_telemetry_report,
//!     TelemetryMetadata,
//! };
//!
//! let (comment, telemetry) = parse_comment_telemetry("Balloon |!!!!!!!!!!!!!!|");
//! assert_eq!(comment, "Balloon ");
//! assert!(telemetry.is_some());
//!
//! let (_, metadata) = parse_telemetry_config("PARM.Vbat,Temp").unwrap();
//! assert!(matches!(metadata, Some(TelemetryMetadata::ParmNames(_))));
//!
//! let (_, report) = parse_telemetry_report("#042,13.8,21,0,0,0,00000000");
//! assert_eq!(report.unwrap().seq, 42);
//! ```
//!
//! Decoders are pure functions with no shared state and may be called from any
//! number of threads.

pub mod base91;
pub mod constants;
pub mod error;
pub mod logging;
pub mod telemetry;

pub use crate::error::FormatError;
pub use crate::logging::init_logger;

pub use telemetry::{
    parse_comment_telemetry, parse_telemetry_config, parse_telemetry_report, Equation,
    MetadataKind, Number, PacketFormat, TelemetryMetadata, TelemetryRecord,
};
