//! Weekday sets using the fixed order Sun=0 .. Sat=6.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Three-letter abbreviations, indexed Sun=0 .. Sat=6.
pub const ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Look up a three-letter weekday abbreviation (case-insensitive, trimmed).
pub fn weekday_index(abbrev: &str) -> Option<u8> {
    let abbrev = abbrev.trim();
    ABBREVIATIONS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(abbrev))
        .map(|i| i as u8)
}

/// Index of a chrono weekday in the Sun=0 order.
pub fn index_of(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// A set of weekdays stored as a 7-bit mask.
///
/// Serializes as an ascending list of indices (`[1, 2, 3, 4, 5]` for Mon-Fri).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Every day from `start` to `end` inclusive.
    ///
    /// When `start > end` the range wraps across the week boundary:
    /// `range(5, 1)` (Fri-Mon) is `{Fri, Sat, Sun, Mon}`. Out-of-range
    /// indices yield an empty set.
    pub fn range(start: u8, end: u8) -> Self {
        let mut set = Self::EMPTY;
        if start > 6 || end > 6 {
            return set;
        }
        let mut day = start;
        loop {
            set.insert(day);
            if day == end {
                break;
            }
            day = (day + 1) % 7;
        }
        set
    }

    /// Insert a day index. Indices outside 0..7 are ignored.
    pub fn insert(&mut self, day: u8) {
        if day < 7 {
            self.0 |= 1 << day;
        }
    }

    pub fn contains(&self, day: u8) -> bool {
        day < 7 && self.0 & (1 << day) != 0
    }

    pub fn contains_weekday(&self, weekday: Weekday) -> bool {
        self.contains(index_of(weekday))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Day indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..7).filter(move |d| self.contains(*d))
    }

    /// The set shifted forward by one day (Sat wraps to Sun).
    pub fn next_days(&self) -> Self {
        let mut set = Self::EMPTY;
        for day in self.iter() {
            set.insert((day + 1) % 7);
        }
        set
    }

    /// `Some((first, last))` when the days form one non-wrapping run.
    fn contiguous_bounds(&self) -> Option<(u8, u8)> {
        let first = self.iter().next()?;
        let last = self.iter().last()?;
        (self.len() == usize::from(last - first + 1)).then_some((first, last))
    }
}

impl FromIterator<u8> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = String;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        if let Some(bad) = days.iter().find(|d| **d > 6) {
            return Err(format!("weekday index {} is out of range 0-6", bad));
        }
        Ok(days.into_iter().collect())
    }
}

/// Formats as a day clause: `Mon-Fri` for a run, `Mon, Wed, Fri` otherwise.
impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((first, last)) = self.contiguous_bounds() {
            if first != last {
                return write!(
                    f,
                    "{}-{}",
                    ABBREVIATIONS[first as usize], ABBREVIATIONS[last as usize]
                );
            }
        }
        let names: Vec<&str> = self.iter().map(|d| ABBREVIATIONS[d as usize]).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(weekday_index("mon"), Some(1));
        assert_eq!(weekday_index(" SAT "), Some(6));
        assert_eq!(weekday_index("Monday"), None);
    }

    #[test]
    fn single_day_range() {
        let set = WeekdaySet::range(3, 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn next_days_wraps_saturday() {
        let set: WeekdaySet = [5, 6].into_iter().collect();
        assert_eq!(set.next_days().iter().collect::<Vec<_>>(), vec![0, 6]);
    }

    #[test]
    fn display_forms() {
        assert_eq!(WeekdaySet::range(1, 5).to_string(), "Mon-Fri");
        assert_eq!(
            [1u8, 3, 5].into_iter().collect::<WeekdaySet>().to_string(),
            "Mon, Wed, Fri"
        );
        assert_eq!(WeekdaySet::range(5, 1).to_string(), "Sun, Mon, Fri, Sat");
        assert_eq!(WeekdaySet::range(2, 2).to_string(), "Tue");
    }
}
