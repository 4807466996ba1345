//! # Telemetry Reports
//!
//! The uncompressed telemetry report is a single line:
//! `#SSS,AAA,AAA,AAA,AAA,AAA,BBBBBBBB`, a sequence number of one to three
//! digits, five analog values and eight digital bits. The bits are already in
//! channel order and are kept as sent.

use crate::constants::{ANALOG_CHANNELS, MAX_REPORT_SEQ_DIGITS};
use crate::telemetry::grammar::{bit_field, unsigned_decimal};
use crate::telemetry::record::{Number, PacketFormat, TelemetryRecord};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    multi::count,
    sequence::{delimited, terminated, tuple},
    IResult,
};

/// `#\d{1,3},(\d+(\.\d+)?,){5}[01]{8}` spanning the whole input
fn report(input: &str) -> IResult<&str, (u32, Vec<f64>, &str)> {
    all_consuming(tuple((
        delimited(
            char('#'),
            map_res(
                take_while_m_n(1, MAX_REPORT_SEQ_DIGITS, |c: char| c.is_ascii_digit()),
                str::parse::<u32>,
            ),
            char(','),
        ),
        count(
            terminated(map_res(unsigned_decimal, str::parse::<f64>), char(',')),
            ANALOG_CHANNELS,
        ),
        bit_field,
    )))(input)
}

/// Decode a plain-text `#seq,...` telemetry report.
///
/// On a match the whole text is consumed and the remaining text is empty.
/// Anything else, including reports with the wrong number of channels, is
/// handed back unchanged with `None` so the caller can try another
/// interpretation.
///
/// ```rust
/// use aprs_telemetry::parse_telemetry_report;
///
/// let (rest, report) = parse_telemetry_report("#001,1.0,2.0,3.0,4.0,5.0,10101010");
/// assert_eq!(rest, "");
/// assert_eq!(report.unwrap().bits.as_deref(), Some("10101010"));
/// ```
pub fn parse_telemetry_report(text: &str) -> (&str, Option<TelemetryRecord>) {
    let Ok((rest, (seq, values, bits))) = report(text) else {
        return (text, None);
    };

    let mut vals = [Number::Float(0.0); ANALOG_CHANNELS];
    for (slot, value) in vals.iter_mut().zip(values) {
        *slot = Number::Float(value);
    }

    let record = TelemetryRecord {
        seq,
        vals,
        bits: Some(bits.to_string()),
    };
    log::debug!("decoded {} {record:?}", PacketFormat::TelemetryReport);

    (rest, Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(values: [f64; 5]) -> [Number; 5] {
        values.map(Number::Float)
    }

    #[test]
    fn test_report() {
        let (rest, record) = parse_telemetry_report("#001,1.0,2.0,3.0,4.0,5.0,10101010");
        assert_eq!(rest, "");
        assert_eq!(
            record,
            Some(TelemetryRecord {
                seq: 1,
                vals: floats([1.0, 2.0, 3.0, 4.0, 5.0]),
                bits: Some("10101010".to_string()),
            })
        );
    }

    #[test]
    fn test_integers_become_floats() {
        let (_, record) = parse_telemetry_report("#999,0,255,12,7,100,00000001");
        let record = record.unwrap();
        assert_eq!(record.seq, 999);
        assert_eq!(record.vals, floats([0.0, 255.0, 12.0, 7.0, 100.0]));
    }

    #[test]
    fn test_bits_kept_in_wire_order() {
        let (_, record) = parse_telemetry_report("#1,1,1,1,1,1,11000000");
        let record = record.unwrap();
        assert_eq!(record.bits.as_deref(), Some("11000000"));
        assert_eq!(record.bit(0), Some(true));
        assert_eq!(record.bit(7), Some(false));
    }

    #[test]
    fn test_four_values_not_a_report() {
        let text = "#001,1.0,2.0,3.0,4.0,10101010";
        assert_eq!(parse_telemetry_report(text), (text, None));
    }

    #[test]
    fn test_six_values_not_a_report() {
        let text = "#001,1,2,3,4,5,6,10101010";
        assert_eq!(parse_telemetry_report(text), (text, None));
    }

    #[test]
    fn test_anchored_at_both_ends() {
        for text in [
            " #001,1,2,3,4,5,10101010",
            "#001,1,2,3,4,5,10101010 ",
            "#001,1,2,3,4,5,101010101",
            "#001,1,2,3,4,5,1010101",
        ] {
            assert_eq!(parse_telemetry_report(text), (text, None), "{text:?}");
        }
    }

    #[test]
    fn test_sequence_digits() {
        assert!(parse_telemetry_report("#1234,1,2,3,4,5,10101010").1.is_none());
        assert!(parse_telemetry_report("#,1,2,3,4,5,10101010").1.is_none());
    }

    #[test]
    fn test_value_grammar() {
        assert!(parse_telemetry_report("#1,-1,2,3,4,5,10101010").1.is_none());
        assert!(parse_telemetry_report("#1,1.,2,3,4,5,10101010").1.is_none());
        assert!(parse_telemetry_report("#1,.5,2,3,4,5,10101010").1.is_none());
        assert!(parse_telemetry_report("#1,,2,3,4,5,10101010").1.is_none());
    }

    #[test]
    fn test_no_match_is_idempotent() {
        let (once, _) = parse_telemetry_report("T#005,199,000,255,073,123,01101001");
        let (twice, record) = parse_telemetry_report(once);
        assert_eq!(once, twice);
        assert!(record.is_none());
    }
}
