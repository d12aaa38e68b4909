//! Schedule strings → [`ScheduleRule`].
//!
//! A schedule string has the form `"<days>, <start>-<end>"`:
//!
//! - `<days>` is a range (`"Mon-Fri"`, `"Fri-Mon"`) or a comma-separated list
//!   (`"Mon, Wed, Fri"`) of three-letter abbreviations.
//! - `<start>`/`<end>` are clock tokens (`"9AM"`, `"4:30PM"`).
//!
//! The string is split at its **last** comma, so day lists may themselves
//! contain commas: `"Mon, Wed, Fri, 9AM-11AM"`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::clock::{self, ClockTime, MINUTES_PER_DAY};
use crate::error::{ParseError, Result};
use crate::policy::WeekdayPolicy;
use crate::weekday::{self, WeekdaySet};

/// One parsed weekly recurrence: a set of weekdays and a half-open
/// `[start_minute, end_minute)` window of minutes since midnight.
///
/// When `end_minute < start_minute` the window spans midnight. The part before
/// midnight belongs to the listed weekdays; the part after midnight belongs to
/// the day that follows each of them.
///
/// Deserializing goes through [`ScheduleRule::new`], so a rule read from JSON
/// holds the same invariants as a parsed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRuleRepr")]
pub struct ScheduleRule {
    pub weekdays: WeekdaySet,
    pub start_minute: u16,
    pub end_minute: u16,
}

#[derive(Deserialize)]
struct ScheduleRuleRepr {
    weekdays: WeekdaySet,
    start_minute: u16,
    end_minute: u16,
}

impl TryFrom<ScheduleRuleRepr> for ScheduleRule {
    type Error = ParseError;

    fn try_from(repr: ScheduleRuleRepr) -> Result<Self> {
        ScheduleRule::new(repr.weekdays, repr.start_minute, repr.end_minute)
    }
}

impl ScheduleRule {
    /// Build a rule from already-structured parts.
    ///
    /// # Errors
    /// - [`ParseError::NoWeekdays`] — `weekdays` is empty
    /// - [`ParseError::TimeOutOfRange`] — a minute is 1440 or more
    /// - [`ParseError::EmptyWindow`] — start and end are the same minute
    pub fn new(weekdays: WeekdaySet, start_minute: u16, end_minute: u16) -> Result<Self> {
        if weekdays.is_empty() {
            return Err(ParseError::NoWeekdays("[]".to_string()));
        }
        for minute in [start_minute, end_minute] {
            if u32::from(minute) >= MINUTES_PER_DAY {
                return Err(ParseError::TimeOutOfRange(format!("minute {}", minute)));
            }
        }
        if start_minute == end_minute {
            return Err(ParseError::EmptyWindow(format!("{}-{}", start_minute, end_minute)));
        }
        Ok(Self {
            weekdays,
            start_minute,
            end_minute,
        })
    }

    pub fn start(&self) -> ClockTime {
        ClockTime::from_minute_of_day(u32::from(self.start_minute))
    }

    pub fn end(&self) -> ClockTime {
        ClockTime::from_minute_of_day(u32::from(self.end_minute))
    }

    /// True when the window crosses midnight (`"10PM-2AM"`, `"8PM-12AM"`).
    pub fn is_overnight(&self) -> bool {
        self.end_minute < self.start_minute
    }

    /// Test a weekday index (Sun=0) and minute-of-day against this rule.
    pub fn matches_at(&self, day: u8, minute: u16) -> bool {
        if self.is_overnight() {
            (self.weekdays.contains(day) && minute >= self.start_minute)
                || (self.weekdays.next_days().contains(day) && minute < self.end_minute)
        } else {
            self.weekdays.contains(day) && self.start_minute <= minute && minute < self.end_minute
        }
    }

    /// Test a candidate date-time (local wall-clock time) against this rule.
    ///
    /// Seconds and sub-second precision are ignored.
    pub fn matches<T: Datelike + Timelike>(&self, candidate: &T) -> bool {
        let day = weekday::index_of(candidate.weekday());
        let minute = (candidate.hour() * 60 + candidate.minute()) as u16;
        self.matches_at(day, minute)
    }
}

impl FromStr for ScheduleRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_schedule(s)
    }
}

/// Canonical schedule-string form, e.g. `Mon-Fri, 9AM-12PM`.
impl fmt::Display for ScheduleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}-{}", self.weekdays, self.start(), self.end())
    }
}

/// Parse one schedule string with the default [`WeekdayPolicy`].
///
/// # Errors
/// See [`parse_schedule_with`].
pub fn parse_schedule(input: &str) -> Result<ScheduleRule> {
    parse_schedule_with(input, WeekdayPolicy::default())
}

/// Parse one schedule string into a [`ScheduleRule`].
///
/// # Errors
/// - [`ParseError::MissingSeparator`] — no comma separates days from times
/// - [`ParseError::UnknownWeekday`] — a range endpoint (or, under
///   [`WeekdayPolicy::Strict`], a list entry) is not a weekday abbreviation
/// - [`ParseError::NoWeekdays`] — the day clause yields no weekdays
/// - [`ParseError::MissingTimeRange`] — the time clause is not `start-end`
/// - [`ParseError::MissingMeridiem`] / [`ParseError::NonNumericTime`] — a
///   clock token is malformed
/// - [`ParseError::TimeOutOfRange`] — a clock token falls outside 0:00–23:59
/// - [`ParseError::EmptyWindow`] — start and end are the same minute
pub fn parse_schedule_with(input: &str, policy: WeekdayPolicy) -> Result<ScheduleRule> {
    let (days_clause, time_clause) = input
        .rsplit_once(',')
        .ok_or_else(|| ParseError::MissingSeparator(input.trim().to_string()))?;

    let weekdays = parse_days(days_clause, policy)?;
    let (start_minute, end_minute) = parse_time_range(time_clause)?;

    let rule = ScheduleRule {
        weekdays,
        start_minute,
        end_minute,
    };
    tracing::debug!(input, %rule, overnight = rule.is_overnight(), "parsed schedule");
    Ok(rule)
}

fn parse_days(clause: &str, policy: WeekdayPolicy) -> Result<WeekdaySet> {
    let clause = clause.trim();

    let set = if let Some((start, end)) = clause.split_once('-') {
        let start = lookup_endpoint(start)?;
        let end = lookup_endpoint(end)?;
        WeekdaySet::range(start, end)
    } else {
        let mut set = WeekdaySet::EMPTY;
        for token in clause.split(',') {
            match weekday::weekday_index(token) {
                Some(day) => set.insert(day),
                None if policy == WeekdayPolicy::Strict => {
                    return Err(ParseError::UnknownWeekday(token.trim().to_string()));
                }
                None => tracing::debug!(token = token.trim(), "dropping unknown weekday"),
            }
        }
        set
    };

    if set.is_empty() {
        return Err(ParseError::NoWeekdays(clause.to_string()));
    }
    Ok(set)
}

fn lookup_endpoint(token: &str) -> Result<u8> {
    weekday::weekday_index(token)
        .ok_or_else(|| ParseError::UnknownWeekday(token.trim().to_string()))
}

fn parse_time_range(clause: &str) -> Result<(u16, u16)> {
    let clause = clause.trim();
    let mut parts = clause.split('-');
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => return Err(ParseError::MissingTimeRange(clause.to_string())),
    };

    let start_minute = minute_of_day(start)?;
    let end_minute = minute_of_day(end)?;
    if start_minute == end_minute {
        return Err(ParseError::EmptyWindow(clause.to_string()));
    }
    Ok((start_minute, end_minute))
}

fn minute_of_day(token: &str) -> Result<u16> {
    let minutes = clock::parse_time_token(token)?.minute_of_day();
    if minutes >= MINUTES_PER_DAY {
        return Err(ParseError::TimeOutOfRange(token.trim().to_string()));
    }
    Ok(minutes as u16)
}
