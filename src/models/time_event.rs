//! Time event model and punch parsing.
//!
//! This module defines the [`TimeEvent`] struct and [`TimeEventType`] enum
//! for representing single clock punches, plus the parser that turns a
//! `"<date> <hour>"` string into one.

use serde::{Deserialize, Serialize};

/// Distinguishes clock-in punches from clock-out punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeEventType {
    /// The employee clocked in.
    TimeIn,
    /// The employee clocked out.
    TimeOut,
}

/// Represents a single punch.
///
/// The `date` is an opaque join key compared by exact string equality, it
/// is never parsed into a calendar type. The `hour` encodes clock time as
/// `HHMM` (930 is 9:30, 1415 is 14:15); `None` marks a token that did not
/// parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    /// Whether this is a time-in or time-out punch.
    #[serde(rename = "type")]
    pub event_type: TimeEventType,
    /// The date the punch belongs to (e.g. "2024-01-15").
    pub date: String,
    /// The clock time as `HHMM`, or `None` if the token was not numeric.
    pub hour: Option<i64>,
}

impl TimeEvent {
    /// Builds a punch from a `"<date> <hour>"` string.
    ///
    /// The string is split on the first space. A string with no space is
    /// taken whole as the date, and its hour is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_payroll::models::{TimeEvent, TimeEventType};
    ///
    /// let event = TimeEvent::parse(TimeEventType::TimeIn, "2024-01-15 930");
    /// assert_eq!(event.date, "2024-01-15");
    /// assert_eq!(event.hour, Some(930));
    /// ```
    pub fn parse(event_type: TimeEventType, date_time: &str) -> Self {
        let (date, hour) = match date_time.split_once(' ') {
            Some((date, hour)) => (date, parse_hour_token(hour)),
            None => (date_time, None),
        };

        Self {
            event_type,
            date: date.to_string(),
            hour,
        }
    }
}

/// Parses the leading base-10 integer of an hour token.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is read. Anything after the digits is ignored. Returns
/// `None` when there are no digits or the value overflows `i64`.
///
/// # Examples
///
/// ```
/// use timecard_payroll::models::parse_hour_token;
///
/// assert_eq!(parse_hour_token("1730"), Some(1730));
/// assert_eq!(parse_hour_token("930am"), Some(930));
/// assert_eq!(parse_hour_token("noon"), None);
/// ```
pub fn parse_hour_token(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
