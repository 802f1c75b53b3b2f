//! `Weekday` — day of the week, numbered 1 (Monday) to 7 (Sunday).

use cc_core::errors::{Error, Result};
use cc_core::utilities::data_parsers::parse_weekday_ordinal;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Return `true` for Sunday.
    pub fn is_sunday(self) -> bool {
        self == Weekday::Sunday
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_weekday_ordinal(s)
            .and_then(Weekday::from_ordinal)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert_eq!("Thu".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert!("Caturday".parse::<Weekday>().is_err());
    }

    #[test]
    fn ordinals() {
        assert_eq!(Weekday::from_ordinal(7), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::Wednesday.ordinal(), 3);
    }
}
