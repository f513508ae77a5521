//! Day-of-week tag for weekly slots.
//!
//! Days are fixed configuration: seven values with stable ordinals
//! `Mon = 0 .. Sun = 6`. The serialized form is the three-letter tag
//! used on the wire by timetable stores ("Mon", "Tue", ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Error returned when parsing an unrecognized day string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized day: {0}")]
pub struct ParseDayError(pub String);

impl Day {
    /// All days in ordinal order, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Fixed ordinal, 0 (Monday) through 6 (Sunday).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Day::Mon => 0,
            Day::Tue => 1,
            Day::Wed => 2,
            Day::Thu => 3,
            Day::Fri => 4,
            Day::Sat => 5,
            Day::Sun => 6,
        }
    }

    /// Absolute ordinal distance between two days.
    ///
    /// Not circular: Monday and Sunday are 6 apart, not 1.
    #[inline]
    pub fn distance(self, other: Day) -> u32 {
        (self.index() as i32 - other.index() as i32).unsigned_abs()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        };
        f.write_str(tag)
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    /// Accepts both the three-letter tag and the full English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mon" | "Monday" => Ok(Day::Mon),
            "Tue" | "Tuesday" => Ok(Day::Tue),
            "Wed" | "Wednesday" => Ok(Day::Wed),
            "Thu" | "Thursday" => Ok(Day::Thu),
            "Fri" | "Friday" => Ok(Day::Fri),
            "Sat" | "Saturday" => Ok(Day::Sat),
            "Sun" | "Sunday" => Ok(Day::Sun),
            other => Err(ParseDayError(other.to_string())),
        }
    }
}
