//! Error types for availability parsing.

use thiserror::Error;

/// A schedule string (or one of its tokens) could not be parsed.
///
/// The matcher never reports a non-matching candidate as an error; every
/// variant here describes malformed schedule data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing meridiem marker in time '{0}'")]
    MissingMeridiem(String),

    #[error("non-numeric time component in '{0}'")]
    NonNumericTime(String),

    #[error("missing day/time separator in '{0}'")]
    MissingSeparator(String),

    #[error("expected a 'start-end' time range, got '{0}'")]
    MissingTimeRange(String),

    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("no recognized weekdays in '{0}'")]
    NoWeekdays(String),

    #[error("time '{0}' is outside the 24-hour day")]
    TimeOutOfRange(String),

    #[error("empty time window '{0}'")]
    EmptyWindow(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
