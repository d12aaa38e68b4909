//! WASM bindings for availability-engine.
//!
//! Exposes schedule parsing, availability checks and booking verdicts to a
//! JavaScript booking screen via `wasm-bindgen`. Rule lists and results cross
//! the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target bundler --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use availability_engine::{BookingVerdict, ScheduleRule, Shift, WeekdayPolicy};
use chrono::{DateTime, NaiveDateTime};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers (plain `Result<_, String>` so they can be tested off-wasm)
// ---------------------------------------------------------------------------

/// Parse a candidate date-time as local wall-clock time.
///
/// Accepts RFC 3339 (e.g., "2026-03-18T10:00:00-05:00", whose local time of
/// 10:00 is used as-is) and naive "YYYY-MM-DDTHH:MM[:SS]".
fn parse_candidate(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

fn parse_rules_json(json: &str) -> Result<Vec<String>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid rules JSON: {}", e))
}

fn policy(strict: Option<bool>) -> WeekdayPolicy {
    if strict.unwrap_or(false) {
        WeekdayPolicy::Strict
    } else {
        WeekdayPolicy::Lenient
    }
}

fn within(candidate: &str, rules_json: &str, strict: Option<bool>) -> Result<bool, String> {
    let candidate = parse_candidate(candidate)?;
    let rules = parse_rules_json(rules_json)?;
    availability_engine::is_within_availability_with(&candidate, &rules, policy(strict))
        .map_err(|e| e.to_string())
}

fn verdict(
    candidate: &str,
    rules_json: &str,
    strict: Option<bool>,
) -> Result<BookingVerdict, String> {
    let candidate = parse_candidate(candidate)?;
    let rules = parse_rules_json(rules_json)?;
    Ok(availability_engine::check_booking_with(&candidate, &rules, policy(strict)))
}

fn rule(input: &str, strict: Option<bool>) -> Result<ScheduleRule, String> {
    availability_engine::parse_schedule_with(input, policy(strict)).map_err(|e| e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Check whether `candidate` falls within any of the schedule strings.
///
/// # Arguments
/// - `candidate` -- ISO 8601 datetime (e.g., "2026-03-18T10:00")
/// - `rules_json` -- JSON array of schedule strings (e.g., `["Mon-Fri, 9AM-12PM"]`)
/// - `strict` -- reject unknown weekday abbreviations instead of dropping them
///
/// Throws the parse error message when a rule is malformed.
#[wasm_bindgen(js_name = "isWithinAvailability")]
pub fn is_within_availability(
    candidate: &str,
    rules_json: &str,
    strict: Option<bool>,
) -> Result<bool, JsValue> {
    within(candidate, rules_json, strict).map_err(|e| JsValue::from_str(&e))
}

/// Classify a booking request. Returns the verdict as JSON, e.g.
/// `{"status":"outside_hours","rules":["Mon-Fri, 9AM-12PM"]}`.
#[wasm_bindgen(js_name = "checkBooking")]
pub fn check_booking(
    candidate: &str,
    rules_json: &str,
    strict: Option<bool>,
) -> Result<String, JsValue> {
    let verdict = verdict(candidate, rules_json, strict).map_err(|e| JsValue::from_str(&e))?;
    to_json(&verdict)
}

/// Parse one schedule string. Returns `{weekdays, start_minute, end_minute}`
/// as JSON.
#[wasm_bindgen(js_name = "parseSchedule")]
pub fn parse_schedule(input: &str, strict: Option<bool>) -> Result<String, JsValue> {
    let rule = rule(input, strict).map_err(|e| JsValue::from_str(&e))?;
    to_json(&rule)
}

/// Availability presets for a shift name ("Morning", "Afternoon", "Evening",
/// "Night"), as a JSON array of strings.
#[wasm_bindgen(js_name = "shiftPresets")]
pub fn shift_presets(shift: &str) -> Result<String, JsValue> {
    let shift: Shift = shift.parse().map_err(|e: String| JsValue::from_str(&e))?;
    to_json(&shift.presets())
}
