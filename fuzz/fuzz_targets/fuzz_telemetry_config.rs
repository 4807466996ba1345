#![no_main]

use aprs_telemetry::parse_telemetry_config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &str| {
    let _ = parse_telemetry_config(body);
});
