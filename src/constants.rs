//! APRS Telemetry Constants
//!
//! Field counts and length limits used by the telemetry decoders, following
//! the APRS 1.01 telemetry chapter and the relaxed limits accepted in the wild.

/// First symbol of the base-91 alphabet (`!`, value 0)
pub const BASE91_FIRST: char = '!';

/// Last symbol of the base-91 alphabet (`{`, value 90)
pub const BASE91_LAST: char = '{';

/// Number of symbols in the base-91 alphabet
pub const BASE91_RADIX: u32 = 91;

/// Delimiter around base-91 telemetry embedded in a comment
pub const COMMENT_DELIMITER: char = '|';

/// Shortest embedded telemetry payload (sequence + one channel)
pub const MIN_COMMENT_PAYLOAD: usize = 4;

/// Longest embedded telemetry payload (sequence + five analog + digital)
pub const MAX_COMMENT_PAYLOAD: usize = 14;

/// Width of one base-91 group in comment telemetry
pub const COMMENT_GROUP_WIDTH: usize = 2;

/// Number of groups in a full comment telemetry payload
pub const COMMENT_GROUPS: usize = 7;

/// Number of analog channels in a telemetry record
pub const ANALOG_CHANNELS: usize = 5;

/// Number of digital channels (bits) in a telemetry record
pub const BITS_LEN: usize = 8;

/// Highest number of digits in a plain-text report sequence number
pub const MAX_REPORT_SEQ_DIGITS: usize = 3;

/// Number of PARM/UNIT fields (5 analog + 8 digital)
pub const MAX_PARM_FIELDS: usize = 13;

/// Longest PARM/UNIT name accepted; APRS 1.01 asks for less but clients send up to 30
pub const MAX_PARM_NAME_LEN: usize = 30;

/// Number of EQNS coefficients (3 per analog channel)
pub const MAX_EQNS_FIELDS: usize = 15;

/// Coefficients per EQNS equation
pub const EQNS_TERMS: usize = 3;

/// Longest BITS project title; APRS 1.01 recommends 23
pub const MAX_BITS_TITLE_LEN: usize = 183;
