#![no_main]

use aprs_telemetry::parse_comment_telemetry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let (comment, record) = parse_comment_telemetry(text);
    if let Some(record) = record {
        assert!(comment.len() < text.len());
        assert!(record.bits.map_or(true, |bits| bits.len() == 8));
    } else {
        assert_eq!(comment, text);
    }
});
