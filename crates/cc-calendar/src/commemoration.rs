//! Commemorations and how each kind finds its date in a given year.
//!
//! A liturgical year runs from the First Sunday of Advent in its *Advent
//! year* `Y` up to the day before Advent Sunday in `Y + 1`, so it spans two
//! civil years.  Every [`CommemorationKind`] resolves to a concrete date (or,
//! for a fixed date near the Advent boundary, two dates) from nothing but
//! `Y`.

use std::sync::Arc;

use cc_core::errors::{Error, Result};
use cc_core::Year;
use cc_time::{advent, easter, weekday_after, Date, Month, Weekday};

use crate::collects::{Collects, PrayerCollects};
use crate::color::{Color, Colors};
use crate::rank::Rank;
use crate::saints::Saint;
use crate::season::Season;

// ── Kinds ────────────────────────────────────────────────────────────────────

/// How a commemoration is placed in the calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum CommemorationKind {
    /// A fixed month and day.
    Sanctorale {
        /// Month of the feast.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The `number_after`-th `weekday` relative to a fixed month and day,
    /// moved by `days_offset` days.
    SanctoraleBased {
        /// Weekday searched for.
        weekday: Weekday,
        /// Positive counts forward from the anchor, negative backward.
        number_after: i32,
        /// Month of the anchor.
        month_after: Month,
        /// Day of the anchor.
        day_after: u8,
        /// Days added to the weekday found.
        days_offset: i32,
    },
    /// A fixed offset from Easter Day in the second civil year of the
    /// liturgical year.
    Temporale {
        /// Signed number of days from Easter Day.
        days_after_easter: i32,
    },
    /// A weekday of the season, created on demand for one date.
    Ferial {
        /// The date it was made for.
        date: Date,
    },
}

/// The date or dates a commemoration falls on in one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialDate {
    /// The usual case.
    Single(Date),
    /// A fixed date that falls in the liturgical year twice, once in each
    /// civil year.  Both dates are kept.
    Both([Date; 2]),
}

impl InitialDate {
    /// Every date, earliest first.
    pub fn dates(&self) -> &[Date] {
        match self {
            InitialDate::Single(d) => std::slice::from_ref(d),
            InitialDate::Both(ds) => ds,
        }
    }

    /// The earliest date.
    pub fn first(&self) -> Date {
        self.dates()[0]
    }
}

/// Decide which civil year(s) of liturgical year `advent_year` contain
/// `month`/`day`.
///
/// When the year runs from an early Advent Sunday to a late one, a few days
/// at the turn of November and December occur in both civil years; both
/// dates are then returned.
pub fn year_from_advent_year(advent_year: Year, month: Month, day: u8) -> Result<InitialDate> {
    let start = advent(advent_year)?;
    let end = advent(advent_year + 1)?;
    let candidates: Vec<Date> = [advent_year, advent_year + 1]
        .iter()
        .filter_map(|&y| Date::from_month_day(y, month, day).ok())
        .collect();
    let inside: Vec<Date> = candidates
        .iter()
        .copied()
        .filter(|d| start <= *d && *d < end)
        .collect();
    match (inside.as_slice(), candidates.last()) {
        ([first, second], _) => Ok(InitialDate::Both([*first, *second])),
        ([only], _) => Ok(InitialDate::Single(*only)),
        // Falls in the gap between the two Advent Sundays; the placement
        // pass drops it.
        ([], Some(last)) => Ok(InitialDate::Single(*last)),
        _ => Err(Error::Date(format!(
            "{month} {day} does not occur in liturgical year {advent_year}"
        ))),
    }
}

// ── Commemoration ────────────────────────────────────────────────────────────

/// A nameable liturgical observance.
///
/// Catalog entries are shared behind `Arc`; each calendar date holds its own
/// clone so renames, transfers and eves never touch the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Commemoration {
    /// Display name; the collect pass may rename it.
    pub name: String,
    key: Arc<str>,
    /// Precedence tier.
    pub rank: Rank,
    /// How the date is computed.
    pub kind: CommemorationKind,
    /// Liturgical colors.
    pub colors: Colors,
    /// Collects provided by the catalog.
    pub collects: Collects,
    /// A commemoration that makes this one moot when it falls on or before it.
    pub cannot_occur_after: Option<Arc<Commemoration>>,
    /// The saint commemorated, for lesser feasts drawn from a common.
    pub saint: Option<Saint>,
    /// Set when the commemoration was moved off its own date.
    pub transferred: bool,
    /// Name before the first rename.
    pub original_name: Option<String>,
    /// Collects resolved for Morning and Evening Prayer.
    pub prayer_collects: Option<PrayerCollects>,
}

impl Commemoration {
    fn with_kind(name: impl Into<String>, rank: Rank, kind: CommemorationKind) -> Self {
        let name = name.into();
        Self {
            key: Arc::from(name.as_str()),
            name,
            rank,
            kind,
            colors: Colors::default(),
            collects: Collects::default(),
            cannot_occur_after: None,
            saint: None,
            transferred: false,
            original_name: None,
            prayer_collects: None,
        }
    }

    /// A fixed-date commemoration.
    pub fn sanctorale(name: impl Into<String>, rank: Rank, month: Month, day: u8) -> Self {
        Self::with_kind(name, rank, CommemorationKind::Sanctorale { month, day })
    }

    /// The `number_after`-th `weekday` relative to `month`/`day`.
    pub fn sanctorale_based(
        name: impl Into<String>,
        rank: Rank,
        weekday: Weekday,
        number_after: i32,
        month: Month,
        day: u8,
    ) -> Self {
        Self::with_kind(
            name,
            rank,
            CommemorationKind::SanctoraleBased {
                weekday,
                number_after,
                month_after: month,
                day_after: day,
                days_offset: 0,
            },
        )
    }

    /// A commemoration `days_after_easter` days from Easter Day.
    pub fn temporale(name: impl Into<String>, rank: Rank, days_after_easter: i32) -> Self {
        Self::with_kind(name, rank, CommemorationKind::Temporale { days_after_easter })
    }

    /// The ferial commemoration of `season` for `date`, named after the
    /// season's rank and kept in the season's colors.
    pub fn ferial(date: Date, season: &Season) -> Self {
        let mut feria = Self::with_kind(
            season.rank.formatted_name(),
            season.rank,
            CommemorationKind::Ferial { date },
        );
        feria.colors = Colors {
            color: Some(season.color),
            alternate_color: season.alternate_color,
            ..Colors::default()
        };
        feria
    }

    // ── Builder ──────────────────────────────────────────────────────────────

    /// Set the principal color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.color = Some(color);
        self
    }

    /// Replace all colors.
    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the collects.
    pub fn with_collects(mut self, collects: Collects) -> Self {
        self.collects = collects;
        self
    }

    /// Set the saint.
    pub fn with_saint(mut self, saint: Saint) -> Self {
        self.saint = Some(saint);
        self
    }

    /// Shift a weekday-relative commemoration by `days` days.
    ///
    /// Fails with [`Error::InvalidArgument`] for any other kind.
    pub fn set_days_offset(&mut self, days: i32) -> Result<()> {
        match &mut self.kind {
            CommemorationKind::SanctoraleBased { days_offset, .. } => {
                *days_offset = days;
                Ok(())
            }
            _ => Err(Error::InvalidArgument(format!(
                "{:?} is not weekday-relative and cannot be shifted by {days} days",
                self.key()
            ))),
        }
    }

    /// Declare the commemoration that makes this one moot.
    pub fn with_cannot_occur_after(mut self, blocker: Arc<Commemoration>) -> Self {
        self.cannot_occur_after = Some(blocker);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The catalog name, unchanged by renames.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rename, remembering the first name.
    pub fn rename(&mut self, name: impl Into<String>) {
        if self.original_name.is_none() {
            self.original_name = Some(self.name.clone());
        }
        self.name = name.into();
    }

    // ── Dates ────────────────────────────────────────────────────────────────

    /// The date(s) this commemoration falls on in liturgical year
    /// `advent_year`.
    pub fn initial_date(&self, advent_year: Year) -> Result<InitialDate> {
        match self.kind {
            CommemorationKind::Sanctorale { month, day } => {
                year_from_advent_year(advent_year, month, day)
            }
            CommemorationKind::SanctoraleBased {
                weekday,
                number_after,
                month_after,
                day_after,
                days_offset,
            } => {
                let early = weekday_after(weekday, month_after, day_after, advent_year, number_after)?
                    .add_days(days_offset)?;
                if early >= advent(advent_year)? {
                    return Ok(InitialDate::Single(early));
                }
                let late =
                    weekday_after(weekday, month_after, day_after, advent_year + 1, number_after)?
                        .add_days(days_offset)?;
                Ok(InitialDate::Single(late))
            }
            CommemorationKind::Temporale { days_after_easter } => Ok(InitialDate::Single(
                easter(advent_year + 1)?.add_days(days_after_easter)?,
            )),
            CommemorationKind::Ferial { date } => Ok(InitialDate::Single(date)),
        }
    }

    /// `false` when the blocking commemoration falls on or before this one
    /// in liturgical year `advent_year`.
    pub fn can_occur_in_year(&self, advent_year: Year) -> Result<bool> {
        match &self.cannot_occur_after {
            None => Ok(true),
            Some(blocker) => Ok(self.initial_date(advent_year)?.first()
                < blocker.initial_date(advent_year)?.first()),
        }
    }
}

impl std::fmt::Display for Commemoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::SeasonKind;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn sanctorale_picks_the_civil_year() {
        let andrew = Commemoration::sanctorale("Saint Andrew", Rank::HolyDay, Month::November, 30);
        // Advent 2020 is 29 November, so 30 November 2020 opens the year.
        assert_eq!(
            andrew.initial_date(2020).unwrap(),
            InitialDate::Single(date(2020, 11, 30))
        );
        let christmas =
            Commemoration::sanctorale("Christmas Day", Rank::PrincipalFeast, Month::December, 25);
        assert_eq!(
            christmas.initial_date(2019).unwrap(),
            InitialDate::Single(date(2019, 12, 25))
        );
    }

    #[test]
    fn boundary_dates_register_twice() {
        // Advent 2022 is 27 November and Advent 2023 is 3 December.
        let andrew = Commemoration::sanctorale("Saint Andrew", Rank::HolyDay, Month::November, 30);
        assert_eq!(
            andrew.initial_date(2022).unwrap(),
            InitialDate::Both([date(2022, 11, 30), date(2023, 11, 30)])
        );
    }

    #[test]
    fn dates_missing_from_the_year() {
        // 1 December 2019 to 28 November 2020 has no 30 November at all.
        let d = year_from_advent_year(2019, Month::November, 30).unwrap();
        assert_eq!(d, InitialDate::Single(date(2020, 11, 30)));
        let d = year_from_advent_year(2023, Month::February, 29).unwrap();
        assert_eq!(d, InitialDate::Single(date(2024, 2, 29)));
        assert!(year_from_advent_year(2022, Month::February, 29).is_err());
    }

    #[test]
    fn sanctorale_based_searches_second_year() {
        let mut ember = Commemoration::sanctorale_based(
            "Ember Saturday",
            Rank::EmberDay,
            Weekday::Wednesday,
            1,
            Month::September,
            14,
        );
        ember.set_days_offset(3).unwrap();
        assert_eq!(
            ember.initial_date(2019).unwrap(),
            InitialDate::Single(date(2020, 9, 19))
        );
        let advent_3 = Commemoration::sanctorale_based(
            "The Third Sunday of Advent",
            Rank::Sunday,
            Weekday::Sunday,
            -2,
            Month::December,
            25,
        );
        assert_eq!(
            advent_3.initial_date(2019).unwrap(),
            InitialDate::Single(date(2019, 12, 15))
        );
    }

    #[test]
    fn temporale_counts_from_following_easter() {
        let ash = Commemoration::temporale("Ash Wednesday", Rank::PrivilegedObservance, -46);
        assert_eq!(
            ash.initial_date(2019).unwrap(),
            InitialDate::Single(date(2020, 2, 26))
        );
    }

    #[test]
    fn blocked_when_not_strictly_before() {
        let epiphany = Arc::new(Commemoration::sanctorale(
            "The Epiphany",
            Rank::PrincipalFeast,
            Month::January,
            6,
        ));
        let second = Commemoration::sanctorale_based(
            "The Second Sunday of Christmas",
            Rank::Sunday,
            Weekday::Sunday,
            2,
            Month::December,
            25,
        )
        .with_cannot_occur_after(epiphany);
        // 2019: Sundays after Christmas are 29 Dec and 5 Jan.
        assert!(second.can_occur_in_year(2019).unwrap());
        // 2020: 27 Dec and 3 Jan.
        assert!(second.can_occur_in_year(2020).unwrap());
        // 2021: 26 Dec and 2 Jan.
        assert!(second.can_occur_in_year(2021).unwrap());
        // 2024: 29 Dec and 5 Jan.
        assert!(second.can_occur_in_year(2024).unwrap());
        // 2022: Christmas is a Sunday, so the second Sunday is 8 Jan.
        assert!(!second.can_occur_in_year(2022).unwrap());
    }

    #[test]
    fn ferial_takes_season_colors() {
        let season = Season::new(SeasonKind::Advent, "The First Sunday of Advent", Color::Purple)
            .with_alternate_color(Color::Blue);
        let feria = Commemoration::ferial(date(2019, 12, 2), &season);
        assert_eq!(feria.name, "Feria");
        assert_eq!(feria.rank, Rank::Feria);
        assert_eq!(feria.colors.color, Some(Color::Purple));
        assert_eq!(feria.colors.alternate_color, Some(Color::Blue));
    }

    #[test]
    fn rename_keeps_first_name() {
        let mut c = Commemoration::temporale("Easter Day", Rank::PrincipalFeast, 0);
        c.rename("Eve of Easter Day");
        c.rename("Something else");
        assert_eq!(c.original_name.as_deref(), Some("Easter Day"));
        assert_eq!(c.key(), "Easter Day");
    }
}
