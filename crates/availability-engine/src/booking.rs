//! Classified booking checks.
//!
//! A booking screen blocks submission both when a provider's availability is
//! malformed and when the requested time is merely outside it, but the two
//! deserve different messages. [`check_booking`] keeps them apart.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::policy::WeekdayPolicy;
use crate::rule::parse_schedule_with;

/// Outcome of checking a requested appointment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingVerdict {
    /// The candidate falls inside `rule`, the first matching schedule string.
    Available { rule: String },
    /// Every rule parsed and none matched. `rules` lists them for the message.
    OutsideHours { rules: Vec<String> },
    /// `rule` could not be parsed; `reason` is the parse error.
    Malformed { rule: String, reason: String },
}

impl BookingVerdict {
    pub fn is_bookable(&self) -> bool {
        matches!(self, BookingVerdict::Available { .. })
    }

    /// User-facing text for this verdict.
    pub fn message(&self) -> String {
        match self {
            BookingVerdict::Available { rule } => format!("Available ({})", rule),
            BookingVerdict::OutsideHours { rules } if rules.is_empty() => {
                "No availability has been set for this provider".to_string()
            }
            BookingVerdict::OutsideHours { rules } => {
                format!("Outside available hours: {}", rules.join("; "))
            }
            BookingVerdict::Malformed { rule, reason } => {
                format!("Invalid availability '{}': {}", rule, reason)
            }
        }
    }
}

/// Check a candidate against schedule strings with the default policy.
pub fn check_booking<T, I>(candidate: &T, rules: I) -> BookingVerdict
where
    T: Datelike + Timelike,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    check_booking_with(candidate, rules, WeekdayPolicy::default())
}

/// Check a candidate against schedule strings.
///
/// Follows the same order and short-circuiting as
/// [`is_within_availability`](crate::is_within_availability), but reports a
/// parse failure as [`BookingVerdict::Malformed`] instead of an error.
pub fn check_booking_with<T, I>(candidate: &T, rules: I, policy: WeekdayPolicy) -> BookingVerdict
where
    T: Datelike + Timelike,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = Vec::new();
    for raw in rules {
        let raw = raw.as_ref();
        match parse_schedule_with(raw, policy) {
            Ok(rule) if rule.matches(candidate) => {
                return BookingVerdict::Available {
                    rule: raw.to_string(),
                };
            }
            Ok(_) => seen.push(raw.to_string()),
            Err(e) => {
                tracing::warn!(rule = raw, error = %e, "malformed availability rule");
                return BookingVerdict::Malformed {
                    rule: raw.to_string(),
                    reason: e.to_string(),
                };
            }
        }
    }
    BookingVerdict::OutsideHours { rules: seen }
}
