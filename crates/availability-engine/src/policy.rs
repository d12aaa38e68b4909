//! Parsing strictness options.

use serde::{Deserialize, Serialize};

/// How unrecognized weekday abbreviations in a comma-separated day list are
/// treated.
///
/// Range endpoints (`"Mon-Xyz"`) are rejected under either policy, since no
/// range can be formed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayPolicy {
    /// Drop unknown abbreviations and keep the rest (`"Mon, Xyz"` → Mon).
    #[default]
    Lenient,
    /// Fail with [`ParseError::UnknownWeekday`](crate::ParseError::UnknownWeekday).
    Strict,
}
