//! Lectionary cycles and the reading lookup a calendar date is keyed into.
//!
//! The calendar only decides *which* readings a day takes: the key (a
//! commemoration or a numbered proper), the cycle year and the service.  The
//! readings themselves live behind the [`Lectionary`] trait.

use std::collections::HashMap;

use cc_core::Year;

// ── Cycle years ──────────────────────────────────────────────────────────────

/// Three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassYear {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

impl MassYear {
    /// The cycle year of the liturgical year beginning in Advent of
    /// `advent_year`.
    pub fn for_advent_year(advent_year: Year) -> Self {
        match advent_year % 3 {
            0 => MassYear::A,
            1 => MassYear::B,
            _ => MassYear::C,
        }
    }
}

impl std::fmt::Display for MassYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MassYear::A => "A",
            MassYear::B => "B",
            MassYear::C => "C",
        };
        f.write_str(s)
    }
}

/// Two-year weekday eucharistic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyMassYear {
    /// Year 1, used when the liturgical year ends in an odd year.
    One,
    /// Year 2.
    Two,
}

impl DailyMassYear {
    /// The cycle year of a liturgical year ending in `end_year`.
    pub fn for_end_year(end_year: Year) -> Self {
        if end_year % 2 != 0 {
            DailyMassYear::One
        } else {
            DailyMassYear::Two
        }
    }

    /// `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            DailyMassYear::One => 1,
            DailyMassYear::Two => 2,
        }
    }
}

/// Two-year Daily Office cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficeYear {
    /// Year I, used when Advent falls in an even year.
    I,
    /// Year II.
    II,
}

impl OfficeYear {
    /// The cycle year of the liturgical year beginning in Advent of
    /// `advent_year`.
    pub fn for_advent_year(advent_year: Year) -> Self {
        if advent_year % 2 == 0 {
            OfficeYear::I
        } else {
            OfficeYear::II
        }
    }
}

impl std::fmt::Display for OfficeYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OfficeYear::I => "I",
            OfficeYear::II => "II",
        })
    }
}

// ── Lookup ───────────────────────────────────────────────────────────────────

/// What a set of readings is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReadingKey {
    /// A commemoration, by catalog name.
    Commemoration(String),
    /// A numbered proper of the Season after Pentecost.
    Proper(u8),
}

/// The service a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTime {
    /// The principal service of the day.
    Morning,
    /// An evening or vigil service.
    Evening,
}

/// One scripture citation, e.g. `"Isaiah 11:1-10"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Citation(pub String);

impl std::fmt::Display for Citation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source of readings.
pub trait Lectionary {
    /// Readings filed under `key` for `year` and `time`, in reading order.
    /// Empty when nothing is filed there.
    fn readings(&self, key: &ReadingKey, year: MassYear, time: ServiceTime) -> Vec<Citation>;
}

/// A [`Lectionary`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLectionary {
    entries: HashMap<(ReadingKey, MassYear, ServiceTime), Vec<Citation>>,
}

impl InMemoryLectionary {
    /// An empty lectionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `citations` under `key`, replacing anything filed there.
    pub fn insert<I, S>(&mut self, key: ReadingKey, year: MassYear, time: ServiceTime, citations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let citations = citations.into_iter().map(|c| Citation(c.into())).collect();
        self.entries.insert((key, year, time), citations);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<I, S>(mut self, key: ReadingKey, year: MassYear, time: ServiceTime, citations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, year, time, citations);
        self
    }

    /// Number of filed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is filed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lectionary for InMemoryLectionary {
    fn readings(&self, key: &ReadingKey, year: MassYear, time: ServiceTime) -> Vec<Citation> {
        self.entries
            .get(&(key.clone(), year, time))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_years() {
        assert_eq!(MassYear::for_advent_year(2019), MassYear::A);
        assert_eq!(MassYear::for_advent_year(2020), MassYear::B);
        assert_eq!(MassYear::for_advent_year(2021), MassYear::C);
        assert_eq!(DailyMassYear::for_end_year(2020).number(), 2);
        assert_eq!(DailyMassYear::for_end_year(2021).number(), 1);
        assert_eq!(OfficeYear::for_advent_year(2019), OfficeYear::II);
        assert_eq!(OfficeYear::for_advent_year(2020).to_string(), "I");
    }

    #[test]
    fn in_memory_lookup() {
        let lectionary = InMemoryLectionary::new().with(
            ReadingKey::Proper(7),
            MassYear::A,
            ServiceTime::Morning,
            ["Genesis 21:8-21", "Romans 6:1b-11", "Matthew 10:24-39"],
        );
        let found = lectionary.readings(&ReadingKey::Proper(7), MassYear::A, ServiceTime::Morning);
        assert_eq!(found.len(), 3);
        assert_eq!(found[2].to_string(), "Matthew 10:24-39");
        assert!(lectionary
            .readings(&ReadingKey::Proper(7), MassYear::B, ServiceTime::Morning)
            .is_empty());
    }
}
