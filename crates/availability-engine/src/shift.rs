//! Availability presets offered per staff shift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A staff shift. Each shift offers a fixed list of availability strings that
/// a provider record can be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 4] = [Shift::Morning, Shift::Afternoon, Shift::Evening, Shift::Night];

    /// The schedule strings selectable for this shift.
    pub fn presets(&self) -> &'static [&'static str] {
        match self {
            Shift::Morning => &["Mon-Fri, 9AM-12PM", "Mon, Wed, Fri, 9AM-11AM"],
            Shift::Afternoon => &["Mon-Fri, 12PM-4PM", "Tue, Thu, 1PM-5PM"],
            Shift::Evening => &["Mon-Fri, 4PM-8PM"],
            Shift::Night => &["Mon-Fri, 8PM-12AM"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Shift::ALL
            .into_iter()
            .find(|shift| shift.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown shift: '{}'. Available shifts: Morning, Afternoon, Evening, Night",
                    s
                )
            })
    }
}
