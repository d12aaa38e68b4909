//! Match a candidate date-time against a provider's schedule strings.

use chrono::{Datelike, Timelike};

use crate::error::Result;
use crate::policy::WeekdayPolicy;
use crate::rule::parse_schedule_with;

/// Return `true` if `candidate` falls within **any** of `rules`.
///
/// Rules are parsed in order, each one fresh. The first matching rule
/// short-circuits; rules after it are neither parsed nor evaluated. An empty
/// sequence yields `false`.
///
/// `candidate` is interpreted as local wall-clock time; seconds are ignored.
/// The matcher never consults the current time.
///
/// # Errors
/// A malformed rule reached before any match fails the whole call with its
/// [`ParseError`](crate::ParseError). Malformed data is not treated as a
/// non-match.
pub fn is_within_availability<T, I>(candidate: &T, rules: I) -> Result<bool>
where
    T: Datelike + Timelike,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    is_within_availability_with(candidate, rules, WeekdayPolicy::default())
}

/// [`is_within_availability`] with an explicit [`WeekdayPolicy`].
pub fn is_within_availability_with<T, I>(
    candidate: &T,
    rules: I,
    policy: WeekdayPolicy,
) -> Result<bool>
where
    T: Datelike + Timelike,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for raw in rules {
        let raw = raw.as_ref();
        let rule = parse_schedule_with(raw, policy)?;
        if rule.matches(candidate) {
            tracing::debug!(rule = raw, "candidate within availability");
            return Ok(true);
        }
    }
    tracing::debug!("candidate outside every availability rule");
    Ok(false)
}
