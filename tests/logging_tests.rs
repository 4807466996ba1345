//! Unit tests for the logging functionality in the `aprs-telemetry` crate.

use aprs_telemetry::logging::init_logger;
use aprs_telemetry::{parse_comment_telemetry, parse_telemetry_config, parse_telemetry_report};

/// Tests that the logger can be initialized more than once.
#[test]
fn test_init_logger_twice() {
    init_logger();
    init_logger();
}

/// Tests that decoding with an active logger behaves the same as without.
#[test]
fn test_decoders_with_logger() {
    init_logger();
    let (_, metadata) = parse_telemetry_config("PARM.A").unwrap();
    assert!(metadata.is_some());
    let (_, report) = parse_telemetry_report("#1,1,2,3,4,5,00000000");
    assert!(report.is_some());
    let (_, telemetry) = parse_comment_telemetry("|!!!!|");
    assert!(telemetry.is_some());
}
