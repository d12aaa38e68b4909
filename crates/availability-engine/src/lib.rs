//! # availability-engine
//!
//! Weekly availability windows for appointment booking.
//!
//! Providers describe when they can be booked with short human-authored
//! strings such as `"Mon-Fri, 9AM-12PM"` or `"Mon, Wed, Fri, 9AM-11AM"`. This
//! crate parses those strings into [`ScheduleRule`]s and tests a candidate
//! date-time against them. Everything is synchronous and pure: rules are
//! re-parsed on every check and nothing is cached.
//!
//! ## Modules
//!
//! - [`clock`] — `"4:30PM"` → 24-hour `(hour, minute)`
//! - [`weekday`] — Sun=0..Sat=6 weekday sets, abbreviations, wrapping ranges
//! - [`rule`] — schedule string → [`ScheduleRule`]
//! - [`matcher`] — candidate date-time × schedule strings → `bool`
//! - [`booking`] — classified booking verdict for user-facing messages
//! - [`shift`] — stored availability presets per staff shift
//! - [`policy`] — parsing strictness options
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use availability_engine::is_within_availability;
//!
//! // Wednesday 2026-03-18, 10:00
//! let candidate = NaiveDate::from_ymd_opt(2026, 3, 18)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! assert!(is_within_availability(&candidate, &["Mon-Fri, 9AM-12PM"]).unwrap());
//! ```

pub mod booking;
pub mod clock;
pub mod error;
pub mod matcher;
pub mod policy;
pub mod rule;
pub mod shift;
pub mod weekday;

pub use booking::{check_booking, check_booking_with, BookingVerdict};
pub use clock::{parse_time_token, ClockTime};
pub use error::{ParseError, Result};
pub use matcher::{is_within_availability, is_within_availability_with};
pub use policy::WeekdayPolicy;
pub use rule::{parse_schedule, parse_schedule_with, ScheduleRule};
pub use shift::Shift;
pub use weekday::WeekdaySet;
