//! # Comment Telemetry
//!
//! Position and status comments may carry a compressed telemetry sample
//! between two `|` delimiters: `|ss1122334455dd|`. Each pair of base-91
//! symbols is one channel: the sequence number, up to five analog values and
//! the digital byte. Shorter payloads simply stop after fewer channels.
//!
//! Only the first delimited block is considered. Any later `|...|` text is
//! left in the comment untouched. The comment is treated as a single line: a
//! block must start before the first newline, and nothing after it may span
//! another line. A single trailing newline is dropped along with the block.

use crate::base91::{decode_group, is_base91};
use crate::constants::{
    ANALOG_CHANNELS, BITS_LEN, COMMENT_DELIMITER, COMMENT_GROUPS, COMMENT_GROUP_WIDTH,
    MAX_COMMENT_PAYLOAD, MIN_COMMENT_PAYLOAD,
};
use crate::telemetry::record::{Number, TelemetryRecord};
use nom::{
    bytes::complete::take_while_m_n, character::complete::char, sequence::delimited, IResult,
};
use std::borrow::Cow;

/// `|` + 4 to 14 base-91 symbols + `|`
fn telemetry_block(input: &str) -> IResult<&str, &str> {
    delimited(
        char(COMMENT_DELIMITER),
        take_while_m_n(MIN_COMMENT_PAYLOAD, MAX_COMMENT_PAYLOAD, is_base91),
        char(COMMENT_DELIMITER),
    )(input)
}

/// Extract base-91 telemetry embedded in a comment.
///
/// Returns the comment with the telemetry block removed together with the
/// decoded record. When the comment carries no telemetry, or the first block
/// has an odd number of symbols, the comment is returned unchanged with `None`.
///
/// ```rust
/// use aprs_telemetry::parse_comment_telemetry;
///
/// let (comment, telemetry) = parse_comment_telemetry("hello |!!!!!!!!!!!!!!|world");
/// assert_eq!(comment, "hello world");
/// assert_eq!(telemetry.unwrap().seq, 0);
/// ```
pub fn parse_comment_telemetry(text: &str) -> (Cow<'_, str>, Option<TelemetryRecord>) {
    let Some((start, payload, suffix)) = find_block(text) else {
        return (Cow::Borrowed(text), None);
    };

    if payload.len() % COMMENT_GROUP_WIDTH != 0 {
        log::trace!("odd-length comment telemetry {payload:?} ignored");
        return (Cow::Borrowed(text), None);
    }

    let record = decode_payload(payload);
    log::debug!("decoded comment telemetry {record:?}");

    let mut comment = String::with_capacity(start + suffix.len());
    comment.push_str(&text[..start]);
    comment.push_str(suffix);
    (Cow::Owned(comment), Some(record))
}

/// Locate the leftmost delimiter that opens a well-formed block on the first line.
fn find_block(text: &str) -> Option<(usize, &str, &str)> {
    let first_line = text.find('\n').unwrap_or(text.len());
    let (start, payload, suffix) = text[..first_line]
        .match_indices(COMMENT_DELIMITER)
        .find_map(|(start, _)| {
            telemetry_block(&text[start..])
                .ok()
                .map(|(suffix, payload)| (start, payload, suffix))
        })?;

    let suffix = suffix.strip_suffix('\n').unwrap_or(suffix);
    if suffix.contains('\n') {
        return None;
    }
    Some((start, payload, suffix))
}

/// Decode an even-length payload of base-91 symbol pairs.
fn decode_payload(payload: &str) -> TelemetryRecord {
    // The payload is ASCII, so byte offsets are symbol offsets.
    let groups: Vec<u32> = payload
        .as_bytes()
        .chunks(COMMENT_GROUP_WIDTH)
        .take(COMMENT_GROUPS)
        .map(|pair| {
            std::str::from_utf8(pair)
                .map(decode_group)
                .unwrap_or_default()
        })
        .collect();

    let mut vals = [Number::Int(0); ANALOG_CHANNELS];
    for (slot, value) in vals.iter_mut().zip(groups.iter().skip(1)) {
        *slot = Number::Int(i64::from(*value));
    }

    TelemetryRecord {
        seq: groups.first().copied().unwrap_or_default(),
        vals,
        bits: groups.get(COMMENT_GROUPS - 1).map(|digital| lsb_first(*digital)),
    }
}

/// Render the low byte of `value` least-significant bit first.
fn lsb_first(value: u32) -> String {
    (0..BITS_LEN)
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}
