//! Wire timestamp codec.
//!
//! The server speaks UTC timestamps as fixed-width digit strings:
//!
//! - `YYYYMMDDhhmmss` (14 digits) for request parameters and bar rows
//! - `YYYYMMDDhhmmssSSS` (17 digits) for tick rows, with a millisecond suffix
//!
//! Requests cannot carry milliseconds, so any sub-second part is dropped when
//! formatting a request time.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::WireTimeError;

/// chrono format string for the 14-digit wire time.
pub const WIRE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Length of a wire time without milliseconds.
pub const WIRE_TIME_LEN: usize = 14;

/// Length of a wire time with the millisecond suffix.
pub const WIRE_TIME_MILLIS_LEN: usize = WIRE_TIME_LEN + 3;

/// Formats a timestamp as `YYYYMMDDhhmmss`, dropping any sub-second part.
///
/// # Example
///
/// ```
/// use activetick_types::format_wire_time;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 5).unwrap();
/// assert_eq!(format_wire_time(t), "20161004143005");
/// ```
#[must_use]
pub fn format_wire_time(time: DateTime<Utc>) -> String {
    time.format(WIRE_TIME_FORMAT).to_string()
}

/// Formats a timestamp as `YYYYMMDDhhmmssSSS`.
#[must_use]
pub fn format_wire_time_millis(time: DateTime<Utc>) -> String {
    format!(
        "{}{:03}",
        format_wire_time(time),
        time.timestamp_subsec_millis()
    )
}

/// Parses a `YYYYMMDDhhmmss` timestamp as UTC.
///
/// # Errors
///
/// Returns an error if the input is not exactly 14 ASCII digits or does not
/// name a valid date and time.
pub fn parse_wire_time(value: &str) -> Result<DateTime<Utc>, WireTimeError> {
    if !is_digits(value, WIRE_TIME_LEN) {
        return Err(WireTimeError::Malformed {
            value: value.to_string(),
            expected_len: WIRE_TIME_LEN,
        });
    }

    NaiveDateTime::parse_from_str(value, WIRE_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|source| WireTimeError::OutOfRange {
            value: value.to_string(),
            source,
        })
}

/// Parses a `YYYYMMDDhhmmssSSS` tick timestamp as UTC.
///
/// The trailing three digits are the millisecond offset added to the
/// whole-second time in front of them.
///
/// # Example
///
/// ```
/// use activetick_types::parse_wire_time_millis;
/// use chrono::{TimeZone, Utc};
///
/// let t = parse_wire_time_millis("20161004143005123").unwrap();
/// let expected = Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 5).unwrap()
///     + chrono::TimeDelta::milliseconds(123);
/// assert_eq!(t, expected);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not exactly 17 ASCII digits or the
/// leading 14 digits do not name a valid date and time.
pub fn parse_wire_time_millis(value: &str) -> Result<DateTime<Utc>, WireTimeError> {
    if !is_digits(value, WIRE_TIME_MILLIS_LEN) {
        return Err(WireTimeError::Malformed {
            value: value.to_string(),
            expected_len: WIRE_TIME_MILLIS_LEN,
        });
    }

    let (seconds, millis) = value.split_at(WIRE_TIME_LEN);
    let millis = millis
        .bytes()
        .fold(0i64, |acc, digit| acc * 10 + i64::from(digit - b'0'));

    Ok(parse_wire_time(seconds)? + TimeDelta::milliseconds(millis))
}

/// Truncates a timestamp down to whole-second resolution.
#[must_use]
pub fn truncate_to_second(time: DateTime<Utc>) -> DateTime<Utc> {
    time - TimeDelta::nanoseconds(i64::from(time.timestamp_subsec_nanos()))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
