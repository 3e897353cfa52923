//! `Weekday` — day of the week.

use yc_core::errors::{Error, Result};

/// Day of the week, with Monday = 1 through Sunday = 7 (ISO-8601 ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Monday
    Monday = 1,
    /// Tuesday
    Tuesday = 2,
    /// Wednesday
    Wednesday = 3,
    /// Thursday
    Thursday = 4,
    /// Friday
    Friday = 5,
    /// Saturday
    Saturday = 6,
    /// Sunday
    Sunday = 7,
}

impl Weekday {
    /// Create a weekday from its ISO ordinal (1 = Monday .. 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            7 => Ok(Weekday::Sunday),
            _ => Err(Error::InvalidArgument(format!(
                "weekday ordinal {n} out of range [1, 7]"
            ))),
        }
    }

    /// Return the ISO ordinal (1 = Monday .. 7 = Sunday).
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(s)
    }
}
