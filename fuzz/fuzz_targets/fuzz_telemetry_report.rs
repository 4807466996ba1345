#![no_main]

use aprs_telemetry::parse_telemetry_report;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let (rest, record) = parse_telemetry_report(text);
    match record {
        Some(_) => assert!(rest.is_empty()),
        None => assert_eq!(rest, text),
    }
});
