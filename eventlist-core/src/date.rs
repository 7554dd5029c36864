//! `DD.MM.YYYY` date tokens.

use chrono::NaiveDate;

use crate::error::{EventError, EventResult};

/// Byte length of a `DD.MM.YYYY` token.
pub const DATE_TOKEN_LEN: usize = 10;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a whole string as a `DD.MM.YYYY` date.
///
/// The shape is fixed: two-digit day, two-digit month, four-digit year,
/// separated by dots. Anything else is an [`EventError::Format`]. A token
/// with the right shape that names no real day (31.02.2023, 10.13.2024)
/// is an [`EventError::InvalidDate`].
pub fn parse_date(s: &str) -> EventResult<NaiveDate> {
    if !has_date_shape(s) {
        return Err(EventError::Format(s.to_string()));
    }

    let day: u32 = digits(&s[0..2]);
    let month: u32 = digits(&s[3..5]);
    let year: u32 = digits(&s[6..10]);

    // year is at most 9999, always fits
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| EventError::InvalidDate(s.to_string()))
}

/// Render a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == DATE_TOKEN_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

// Callers have already checked the slice is ASCII digits.
fn digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
