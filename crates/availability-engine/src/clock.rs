//! Clock-time tokens — `"9AM"`, `"4:30 PM"`, `"12am"` — in 24-hour form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Minutes in a day; every valid minute-of-day is below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time in 24-hour form.
///
/// Values produced by [`parse_time_token`] are not range-checked: `"13PM"`
/// yields hour 25. Range validation happens when a rule is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Minutes since midnight. Saturates instead of overflowing on absurd input.
    pub fn minute_of_day(&self) -> u32 {
        self.hour.saturating_mul(60).saturating_add(self.minute)
    }

    /// Inverse of [`minute_of_day`](Self::minute_of_day) for in-range values.
    pub fn from_minute_of_day(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }
}

/// Formats back into the 12-hour form schedule strings use (`9AM`, `4:30PM`).
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour % 24;
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        if self.minute == 0 {
            write!(f, "{}{}", hour12, meridiem)
        } else {
            write!(f, "{}:{:02}{}", hour12, self.minute, meridiem)
        }
    }
}

/// Parse a clock-time token into 24-hour `(hour, minute)` form.
///
/// The token must end with `AM` or `PM` (any case); whitespace around the
/// token, before the marker, and around `:` is ignored. The minute component
/// is optional and defaults to 0.
///
/// - PM with hour ≠ 12 adds 12 (`"4:30PM"` → 16:30)
/// - AM with hour = 12 becomes 0 (`"12AM"` → 00:00)
///
/// # Errors
/// Returns [`ParseError::MissingMeridiem`] when the marker is absent,
/// [`ParseError::NonNumericTime`] when the hour or minute is not a plain run of
/// digits, and [`ParseError::TimeOutOfRange`] when it does not fit in a `u32`.
pub fn parse_time_token(token: &str) -> Result<ClockTime> {
    let trimmed = token.trim();
    let upper = trimmed.to_ascii_uppercase();

    let (digits, is_pm) = if let Some(rest) = upper.strip_suffix("PM") {
        (rest, true)
    } else if let Some(rest) = upper.strip_suffix("AM") {
        (rest, false)
    } else {
        return Err(ParseError::MissingMeridiem(trimmed.to_string()));
    };

    let (hour_str, minute_str) = match digits.split_once(':') {
        Some((h, m)) => (h.trim(), Some(m.trim())),
        None => (digits.trim(), None),
    };

    let mut hour = parse_component(hour_str, trimmed)?;
    let minute = match minute_str {
        Some(m) => parse_component(m, trimmed)?,
        None => 0,
    };

    if is_pm && hour != 12 {
        hour = hour.saturating_add(12);
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    tracing::trace!(token = trimmed, hour, minute, "parsed clock token");
    Ok(ClockTime { hour, minute })
}

/// Digits only: signs and other characters `u32::from_str` tolerates are
/// rejected. An all-digit value too large for `u32` is out of range, not
/// non-numeric.
fn parse_component(digits: &str, token: &str) -> Result<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumericTime(token.to_string()));
    }
    digits
        .parse()
        .map_err(|_| ParseError::TimeOutOfRange(token.to_string()))
}
