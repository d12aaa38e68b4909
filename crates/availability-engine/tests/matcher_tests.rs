//! Tests for matching candidates against schedule strings.
//!
//! Candidates fall in the week of 2026-03-15 (Sun) .. 2026-03-21 (Sat).

use availability_engine::{
    is_within_availability, is_within_availability_with, ParseError, WeekdayPolicy,
};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

// ── Helpers ─────────────────────────────────────────────────────────────────

/// A local date-time on day `day` of March 2026.
fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

const SUN: u32 = 15;
const MON: u32 = 16;
const TUE: u32 = 17;
const WED: u32 = 18;
const FRI: u32 = 20;
const SAT: u32 = 21;

fn check(candidate: NaiveDateTime, rules: &[&str]) -> bool {
    is_within_availability(&candidate, rules).expect("rules should parse")
}

// ── Weekday range ───────────────────────────────────────────────────────────

#[test]
fn weekday_range_inside_window() {
    assert!(check(at(WED, 10, 0), &["Mon-Fri, 9AM-12PM"]));
}

#[test]
fn end_boundary_is_excluded() {
    assert!(!check(at(WED, 12, 0), &["Mon-Fri, 9AM-12PM"]));
    assert!(check(at(WED, 11, 59), &["Mon-Fri, 9AM-12PM"]));
}

#[test]
fn start_boundary_is_included() {
    assert!(check(at(WED, 9, 0), &["Mon-Fri, 9AM-12PM"]));
    assert!(!check(at(WED, 8, 59), &["Mon-Fri, 9AM-12PM"]));
}

#[test]
fn weekend_is_outside_weekday_range() {
    assert!(!check(at(SAT, 10, 0), &["Mon-Fri, 9AM-12PM"]));
    assert!(!check(at(SUN, 10, 0), &["Mon-Fri, 9AM-12PM"]));
}

#[test]
fn seconds_are_ignored() {
    let candidate = NaiveDate::from_ymd_opt(2026, 3, WED)
        .unwrap()
        .and_hms_opt(11, 59, 59)
        .unwrap();
    assert!(check(candidate, &["Mon-Fri, 9AM-12PM"]));
}

// ── Day lists ───────────────────────────────────────────────────────────────

#[test]
fn day_list_excludes_unlisted_days() {
    assert!(!check(at(TUE, 10, 0), &["Mon, Wed, Fri, 9AM-11AM"]));
}

#[test]
fn day_list_includes_listed_days() {
    assert!(check(at(FRI, 9, 0), &["Mon, Wed, Fri, 9AM-11AM"]));
    assert!(check(at(MON, 10, 30), &["Mon, Wed, Fri, 9AM-11AM"]));
}

// ── Wrapping day ranges ─────────────────────────────────────────────────────

#[test]
fn wrapping_range_covers_sunday() {
    assert!(check(at(SUN, 21, 0), &["Fri-Mon, 8PM-11PM"]));
    assert!(check(at(SAT, 20, 0), &["Fri-Mon, 8PM-11PM"]));
    assert!(check(at(MON, 22, 59), &["Fri-Mon, 8PM-11PM"]));
}

#[test]
fn wrapping_range_excludes_midweek() {
    assert!(!check(at(WED, 21, 0), &["Fri-Mon, 8PM-11PM"]));
    assert!(!check(at(TUE, 21, 0), &["Fri-Mon, 8PM-11PM"]));
}

// ── Overnight windows ───────────────────────────────────────────────────────

#[test]
fn overnight_window_before_midnight() {
    assert!(check(at(FRI, 23, 0), &["Fri, 10PM-2AM"]));
    assert!(check(at(FRI, 22, 0), &["Fri, 10PM-2AM"]));
}

#[test]
fn overnight_window_tail_belongs_to_next_day() {
    assert!(check(at(SAT, 1, 0), &["Fri, 10PM-2AM"]));
    assert!(!check(at(SAT, 2, 0), &["Fri, 10PM-2AM"]));
    assert!(!check(at(FRI, 1, 0), &["Fri, 10PM-2AM"]));
}

#[test]
fn overnight_tail_wraps_saturday_into_sunday() {
    assert!(check(at(SUN, 0, 30), &["Sat, 11PM-1AM"]));
}

#[test]
fn window_ending_at_midnight() {
    assert!(check(at(FRI, 23, 59), &["Mon-Fri, 8PM-12AM"]));
    assert!(check(at(MON, 20, 0), &["Mon-Fri, 8PM-12AM"]));
    assert!(!check(at(SAT, 0, 0), &["Mon-Fri, 8PM-12AM"]));
    assert!(!check(at(SAT, 21, 0), &["Mon-Fri, 8PM-12AM"]));
}

// ── Multiple rules ──────────────────────────────────────────────────────────

#[test]
fn any_rule_may_match() {
    let rules = ["Mon-Fri, 9AM-12PM", "Sat, 10AM-2PM"];
    assert!(check(at(SAT, 11, 0), &rules));
    assert!(check(at(WED, 9, 30), &rules));
    assert!(!check(at(SAT, 14, 0), &rules));
}

#[test]
fn empty_rules_never_match() {
    let none: &[&str] = &[];
    assert!(!check(at(WED, 10, 0), none));
    assert!(!check(at(SUN, 0, 0), none));
}

#[test]
fn accepts_owned_strings() {
    let rules = vec!["Mon-Fri, 9AM-12PM".to_string()];
    assert_eq!(is_within_availability(&at(WED, 10, 0), &rules), Ok(true));
}

#[test]
fn accepts_timezone_aware_candidates() {
    // Wall-clock fields are read directly; Wed 10:00 UTC.
    let candidate = Utc.with_ymd_and_hms(2026, 3, 18, 10, 0, 0).unwrap();
    assert_eq!(is_within_availability(&candidate, ["Mon-Fri, 9AM-12PM"]), Ok(true));
}

#[test]
fn repeated_calls_agree() {
    let rules = ["Mon-Fri, 9AM-12PM", "Sat, 10AM-2PM"];
    let first = check(at(SAT, 11, 0), &rules);
    for _ in 0..5 {
        assert_eq!(check(at(SAT, 11, 0), &rules), first);
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn malformed_rule_is_an_error_not_a_miss() {
    let result = is_within_availability(&at(WED, 10, 0), ["ThisIsBroken"]);
    assert_eq!(
        result,
        Err(ParseError::MissingSeparator("ThisIsBroken".to_string()))
    );
}

#[test]
fn malformed_rule_after_a_miss_is_an_error() {
    let result = is_within_availability(&at(SAT, 10, 0), ["Mon-Fri, 9AM-12PM", "Sat 10AM"]);
    assert!(result.is_err());
}

#[test]
fn signed_times_are_malformed() {
    let result = is_within_availability(&at(WED, 9, 30), ["Wed, +9AM-+10AM"]);
    assert_eq!(result, Err(ParseError::NonNumericTime("+9AM".to_string())));
}

#[test]
fn rules_after_a_match_are_not_parsed() {
    let result = is_within_availability(&at(WED, 10, 0), ["Mon-Fri, 9AM-12PM", "ThisIsBroken"]);
    assert_eq!(result, Ok(true));
}

#[test]
fn strict_policy_applies_to_every_rule() {
    let rules = ["Sat, 10AM-2PM", "Mon, Funday, 9AM-11AM"];
    assert_eq!(is_within_availability(&at(MON, 10, 0), rules), Ok(true));
    assert_eq!(
        is_within_availability_with(&at(MON, 10, 0), rules, WeekdayPolicy::Strict),
        Err(ParseError::UnknownWeekday("Funday".to_string()))
    );
}
