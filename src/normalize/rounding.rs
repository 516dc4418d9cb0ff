//! Clock-time rounding to the fixed half-hour grid.
//!
//! Raw punches land on arbitrary minutes; payroll recognizes only :00 and
//! :30. Start and end times round with different windows so that neither
//! side systematically favors the clock.

use chrono::{NaiveDateTime, Timelike};

/// Puts the datetime on the grid at the given minute, zeroing seconds.
fn at_minute(dt: NaiveDateTime, minute: u32) -> NaiveDateTime {
    dt.date()
        .and_hms_opt(dt.time().hour(), minute, 0)
        .unwrap_or(dt)
}

/// Moves the datetime to the top of the next hour.
fn next_hour(dt: NaiveDateTime) -> NaiveDateTime {
    at_minute(dt + chrono::Duration::hours(1), 0)
}

/// Rounds a shift start to the grid.
///
/// Minute 0–5 rounds down to :00, 6–35 to :30, anything later to the next
/// hour's :00.
///
/// # Example
///
/// ```
/// use payroll_engine::normalize::round_start;
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(round_start(parse("2025-08-04 07:05:00")), parse("2025-08-04 07:00:00"));
/// assert_eq!(round_start(parse("2025-08-04 07:06:00")), parse("2025-08-04 07:30:00"));
/// assert_eq!(round_start(parse("2025-08-04 07:36:00")), parse("2025-08-04 08:00:00"));
/// ```
pub fn round_start(dt: NaiveDateTime) -> NaiveDateTime {
    match dt.time().minute() {
        0..=5 => at_minute(dt, 0),
        6..=35 => at_minute(dt, 30),
        _ => next_hour(dt),
    }
}

/// Rounds a shift end to the grid.
///
/// Minute 0–24 rounds down to :00, 25–54 to :30, anything later to the next
/// hour's :00.
///
/// # Example
///
/// ```
/// use payroll_engine::normalize::round_end;
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(round_end(parse("2025-08-04 15:24:00")), parse("2025-08-04 15:00:00"));
/// assert_eq!(round_end(parse("2025-08-04 15:25:00")), parse("2025-08-04 15:30:00"));
/// assert_eq!(round_end(parse("2025-08-04 15:55:00")), parse("2025-08-04 16:00:00"));
/// ```
pub fn round_end(dt: NaiveDateTime) -> NaiveDateTime {
    match dt.time().minute() {
        0..=24 => at_minute(dt, 0),
        25..=54 => at_minute(dt, 30),
        _ => next_hour(dt),
    }
}
