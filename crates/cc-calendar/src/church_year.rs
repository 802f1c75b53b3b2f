//! A fully resolved liturgical year.
//!
//! [`ChurchYear::new`] builds every day from the First Sunday of Advent to
//! the day before the next Advent Sunday in three passes, each finished
//! across the whole year before the next begins:
//!
//! 1. **Placement**: every commemoration the catalog allows this year is
//!    added to the day(s) it falls on.
//! 2. **Resolution**: in date order, each day takes the current season,
//!    settles its commemorations, and hands what it displaced on to the
//!    next day.
//! 3. **Names and collects**: Septuagesima, collects, weekday names, eves
//!    and the O Antiphons.
//!
//! A built year has no mutating API, so it can be shared freely.

use std::sync::{Arc, OnceLock};

use cc_core::errors::{Error, Result};
use cc_core::{ensure_post, Year};
use cc_time::{advent, easter, Date};

use crate::calendar_date::CalendarDate;
use crate::catalog::{names, Catalog};
use crate::commemoration::Commemoration;
use crate::cursor::YearCursor;
use crate::lectionary::{DailyMassYear, MassYear, OfficeYear};
use crate::names_and_collects::set_names_and_collects;
use crate::proper::find_proper;
use crate::rank::Rank;
use crate::season::{Season, SeasonKind};

/// Days from Septuagesima to Easter Day.
const SEPTUAGESIMA_BEFORE_EASTER: i32 = 63;

/// One liturgical year of a calendar.
#[derive(Debug)]
pub struct ChurchYear {
    calendar: String,
    start_year: Year,
    end_year: Year,
    start_date: Date,
    end_date: Date,
    dates: Vec<CalendarDate>,
    mass_year: OnceLock<MassYear>,
    daily_mass_year: OnceLock<DailyMassYear>,
    office_year: OnceLock<OfficeYear>,
}

impl ChurchYear {
    /// Build the liturgical year of `catalog` that begins in Advent of
    /// `advent_year`.
    ///
    /// Fails when the year is outside the supported date range, or when a
    /// day is left without a season or without any commemoration.
    #[tracing::instrument(skip(catalog), fields(calendar = catalog.abbreviation()))]
    pub fn new(catalog: &Catalog, advent_year: Year) -> Result<Self> {
        let start_date = advent(advent_year)?;
        let end_date = advent(advent_year + 1)?.add_days(-1)?;
        let easter_day = easter(advent_year + 1)?;

        let mut dates = (0..=start_date.days_between(end_date))
            .map(|offset| Ok(CalendarDate::new(start_date.add_days(offset)?, advent_year)))
            .collect::<Result<Vec<_>>>()?;

        place_commemorations(catalog, advent_year, &mut dates);
        resolve_dates(catalog, &mut dates)?;
        set_names_and_collects(
            &mut dates,
            easter_day.add_days(-SEPTUAGESIMA_BEFORE_EASTER)?,
        );
        check_built(&dates)?;

        tracing::debug!(dates = dates.len(), "church year built");
        Ok(Self {
            calendar: catalog.abbreviation().to_string(),
            start_year: advent_year,
            end_year: advent_year + 1,
            start_date,
            end_date,
            dates,
            mass_year: OnceLock::new(),
            daily_mass_year: OnceLock::new(),
            office_year: OnceLock::new(),
        })
    }

    // ── Inspectors ───────────────────────────────────────────────────────────

    /// Abbreviation of the calendar the year was built from.
    pub fn calendar(&self) -> &str {
        &self.calendar
    }

    /// The civil year of the first Sunday of Advent.
    pub fn start_year(&self) -> Year {
        self.start_year
    }

    /// The civil year the liturgical year ends in.
    pub fn end_year(&self) -> Year {
        self.end_year
    }

    /// The First Sunday of Advent.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// The Saturday before the next First Sunday of Advent.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Every day, in date order.
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Number of days, 364 or 371.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false` for a built year.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Position of `date` in [`dates`](Self::dates).
    pub fn index_of(&self, date: Date) -> Option<usize> {
        day_index(self.start_date, self.dates.len(), date)
    }

    /// The day for `date`, or `None` outside the year.
    pub fn get(&self, date: Date) -> Option<&CalendarDate> {
        self.index_of(date).map(|i| &self.dates[i])
    }

    /// The day for an ISO `YYYY-MM-DD` key, or `None` when the key does not
    /// parse or falls outside the year.
    pub fn get_date(&self, key: &str) -> Option<&CalendarDate> {
        self.get(key.parse().ok()?)
    }

    /// Days in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    /// A cursor before the first day.
    pub fn cursor(&self) -> YearCursor<'_> {
        YearCursor::new(self)
    }

    // ── Cycle years ──────────────────────────────────────────────────────────

    /// Sunday lectionary year.
    pub fn mass_year(&self) -> MassYear {
        *self
            .mass_year
            .get_or_init(|| MassYear::for_advent_year(self.start_year))
    }

    /// Weekday eucharistic lectionary year.
    pub fn daily_mass_year(&self) -> DailyMassYear {
        *self
            .daily_mass_year
            .get_or_init(|| DailyMassYear::for_end_year(self.end_year))
    }

    /// Daily Office lectionary year.
    pub fn office_year(&self) -> OfficeYear {
        *self
            .office_year
            .get_or_init(|| OfficeYear::for_advent_year(self.start_year))
    }
}

impl<'a> IntoIterator for &'a ChurchYear {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The Advent year of the liturgical year containing `date`.
pub fn liturgical_year_of(date: Date) -> Result<Year> {
    let year = date.year();
    if date >= advent(year)? {
        Ok(year)
    } else {
        Ok(year - 1)
    }
}

/// Advent to Advent is a whole number of weeks, and every day has settled
/// on a primary observance and a season.
fn check_built(dates: &[CalendarDate]) -> Result<()> {
    ensure_post!(
        dates.len() % 7 == 0,
        "church year spans {} days, not whole weeks",
        dates.len()
    );
    if let Some(day) = dates
        .iter()
        .find(|d| d.primary().is_none() || d.season.is_none())
    {
        return Err(Error::Postcondition(format!(
            "{} was left unresolved",
            day.date
        )));
    }
    Ok(())
}

fn day_index(start: Date, len: usize, date: Date) -> Option<usize> {
    let index = usize::try_from(start.days_between(date)).ok()?;
    (index < len).then_some(index)
}

// ── Pass 1: placement ────────────────────────────────────────────────────────

fn place_commemorations(catalog: &Catalog, advent_year: Year, dates: &mut [CalendarDate]) {
    let Some(start) = dates.first().map(|d| d.date) else {
        return;
    };
    let len = dates.len();
    for commemoration in catalog.commemorations() {
        match commemoration.can_occur_in_year(advent_year) {
            Ok(true) => {}
            Ok(false) => {
                tracing::trace!(commemoration = commemoration.key(), "does not occur this year");
                continue;
            }
            Err(err) => {
                tracing::trace!(commemoration = commemoration.key(), %err, "no date this year");
                continue;
            }
        }
        let initial = match commemoration.initial_date(advent_year) {
            Ok(initial) => initial,
            Err(err) => {
                tracing::trace!(commemoration = commemoration.key(), %err, "no date this year");
                continue;
            }
        };
        for &date in initial.dates() {
            match day_index(start, len, date) {
                Some(i) => dates[i].add_commemoration(Commemoration::clone(commemoration)),
                None => tracing::trace!(
                    commemoration = commemoration.key(),
                    %date,
                    "outside the year"
                ),
            }
        }
    }
}

// ── Pass 2: resolution ───────────────────────────────────────────────────────

fn resolve_dates(catalog: &Catalog, dates: &mut [CalendarDate]) -> Result<()> {
    let mut current: Option<Arc<Season>> = None;
    let mut carried: Vec<Commemoration> = Vec::new();
    let Some(mut carried_from) = dates.first().map(|d| d.date) else {
        return Ok(());
    };

    for day in dates.iter_mut() {
        if !carried.is_empty() {
            for c in &carried {
                tracing::debug!(
                    commemoration = %c.name,
                    from = %carried_from,
                    to = %day.date,
                    "transferred"
                );
            }
            carried.append(&mut day.required);
            day.required = std::mem::take(&mut carried);
        }

        let (today, next) = next_season(catalog, day, current.take());
        current = next;
        let season = today.ok_or_else(|| {
            Error::Construction(format!("no season has begun by {}", day.date))
        })?;
        day.season = Some(Arc::clone(&season));
        day.evening_season = Some(Arc::clone(&season));

        carried = day.apply_rules()?;
        carried_from = day.date;

        if takes_proper(day, &season) {
            day.proper = find_proper(catalog.propers(), day.date);
        }
    }

    for c in &carried {
        tracing::debug!(commemoration = %c.name, "transfer past the end of the year dropped");
    }
    Ok(())
}

/// The season for `day` and the season carried to the day after.
///
/// A season starts on the day of its opening observance, except that the
/// Day of Pentecost still belongs to Eastertide.
fn next_season(
    catalog: &Catalog,
    day: &CalendarDate,
    current: Option<Arc<Season>>,
) -> (Option<Arc<Season>>, Option<Arc<Season>>) {
    let mut next = current.clone();
    let mut pentecost = false;
    for c in &day.required {
        if c.key() == names::PENTECOST {
            pentecost = true;
        }
        if let Some(season) = catalog.season_for_start(c.key()) {
            next = Some(Arc::clone(season));
        }
    }
    if pentecost {
        (current, next)
    } else {
        (next.clone(), next)
    }
}

fn takes_proper(day: &CalendarDate, season: &Season) -> bool {
    (season.kind == SeasonKind::AfterPentecost && day.all().any(|c| c.rank == Rank::Sunday))
        || day
            .required
            .iter()
            .any(|c| c.key() == names::PENTECOST || c.key() == names::TRINITY_SUNDAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_bounds() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let year = ChurchYear::new(&catalog, 2019).unwrap();
        assert_eq!(year.start_date(), date(2019, 12, 1));
        assert_eq!(year.end_date(), date(2020, 11, 28));
        assert_eq!(year.len(), 364);
        assert_eq!(year.index_of(date(2019, 12, 1)), Some(0));
        assert_eq!(year.index_of(date(2019, 11, 30)), None);
        assert_eq!(year.index_of(date(2020, 11, 29)), None);
        assert!(year.get_date("2020-11-28").is_some());
        assert!(year.get_date("2020-11-29").is_none());
        assert!(year.get_date("not a date").is_none());
    }

    #[test]
    fn cycle_years_follow_the_advent_year() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let year = ChurchYear::new(&catalog, 2019).unwrap();
        assert_eq!(year.mass_year(), MassYear::A);
        assert_eq!(year.daily_mass_year(), DailyMassYear::Two);
        assert_eq!(year.office_year(), OfficeYear::II);
        assert_eq!(year.calendar(), crate::catalog::ACNA_BCP2019);
    }

    #[test]
    fn pentecost_stays_in_eastertide() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let year = ChurchYear::new(&catalog, 2019).unwrap();
        // Pentecost 2020 is 31 May.
        let pentecost = year.get(date(2020, 5, 31)).unwrap();
        assert_eq!(pentecost.season().map(|s| s.kind), Some(SeasonKind::Eastertide));
        let monday = year.get(date(2020, 6, 1)).unwrap();
        assert_eq!(monday.season().map(|s| s.kind), Some(SeasonKind::AfterPentecost));
    }

    #[test]
    fn liturgical_year_boundaries() {
        assert_eq!(liturgical_year_of(date(2019, 11, 30)).unwrap(), 2018);
        assert_eq!(liturgical_year_of(date(2019, 12, 1)).unwrap(), 2019);
        assert_eq!(liturgical_year_of(date(2020, 6, 1)).unwrap(), 2019);
    }

    #[test]
    fn unresolved_days_fail_the_final_check() {
        let start = date(2019, 12, 1);
        let days: Vec<CalendarDate> = (0..7)
            .map(|i| CalendarDate::new(start.add_days(i).unwrap(), 2019))
            .collect();
        assert!(matches!(check_built(&days), Err(Error::Postcondition(_))));
        assert!(matches!(check_built(&days[..6]), Err(Error::Postcondition(_))));

        let catalog = Catalog::acna_bcp2019().unwrap();
        let year = ChurchYear::new(&catalog, 2019).unwrap();
        assert!(check_built(year.dates()).is_ok());
    }

    #[test]
    fn out_of_range_years_fail() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        assert!(ChurchYear::new(&catalog, 1800).is_err());
    }
}
