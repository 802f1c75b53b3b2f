//! A civil year's days drawn from the two church years it overlaps.

use std::sync::Arc;

use cc_core::errors::{Error, Result};
use cc_core::Year;
use cc_time::Date;

use crate::cache::YearCache;
use crate::calendar_date::CalendarDate;
use crate::catalog::Catalog;
use crate::church_year::ChurchYear;

/// 1 January to 31 December of one civil year.
///
/// Days before Advent Sunday come from the church year that began in the
/// previous December; the rest from the one beginning that Advent.
#[derive(Debug, Clone)]
pub struct CalendarYear {
    year: Year,
    earlier: Arc<ChurchYear>,
    later: Arc<ChurchYear>,
}

impl CalendarYear {
    /// Build both church years overlapping `year`.
    pub fn new(catalog: &Catalog, year: Year) -> Result<Self> {
        Self::from_years(
            year,
            Arc::new(ChurchYear::new(catalog, previous_year(year)?)?),
            Arc::new(ChurchYear::new(catalog, year)?),
        )
    }

    /// As [`new`](Self::new), taking the church years from `cache`.
    pub fn cached(cache: &YearCache, catalog: &Catalog, year: Year) -> Result<Self> {
        Self::from_years(
            year,
            cache.get_or_build(catalog, previous_year(year)?)?,
            cache.get_or_build(catalog, year)?,
        )
    }

    fn from_years(year: Year, earlier: Arc<ChurchYear>, later: Arc<ChurchYear>) -> Result<Self> {
        cc_core::ensure!(
            earlier.end_date().add_days(1)? == later.start_date(),
            "church years {} and {} are not consecutive",
            earlier.start_year(),
            later.start_year()
        );
        Ok(Self {
            year,
            earlier,
            later,
        })
    }

    /// The civil year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The day for `date`, or `None` outside the civil year.
    pub fn get(&self, date: Date) -> Option<&CalendarDate> {
        if date.year() != self.year {
            return None;
        }
        self.earlier.get(date).or_else(|| self.later.get(date))
    }

    /// Every day from 1 January to 31 December.
    pub fn dates(&self) -> impl Iterator<Item = &CalendarDate> {
        let year = self.year;
        self.earlier
            .iter()
            .chain(self.later.iter())
            .filter(move |d| d.date.year() == year)
    }

    /// 365 or 366.
    pub fn len(&self) -> usize {
        self.dates().count()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn previous_year(year: Year) -> Result<Year> {
    year.checked_sub(1)
        .ok_or_else(|| Error::Date(format!("no civil year before {year}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_civil_year() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let year = CalendarYear::new(&catalog, 2020).unwrap();
        assert_eq!(year.len(), 366);
        let first = year.dates().next().unwrap();
        assert_eq!(first.date, Date::from_ymd(2020, 1, 1).unwrap());
        assert_eq!(first.advent_year, 2019);
        assert_eq!(year.dates().last().unwrap().advent_year, 2020);
        let advent = year.get(Date::from_ymd(2020, 11, 29).unwrap()).unwrap();
        assert_eq!(advent.advent_year, 2020);
        assert!(year.get(Date::from_ymd(2021, 1, 1).unwrap()).is_none());
    }

    #[test]
    fn years_outside_the_date_range_fail() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        assert!(matches!(CalendarYear::new(&catalog, 0), Err(Error::Date(_))));
        assert!(CalendarYear::new(&catalog, 1900).is_err());
        assert!(CalendarYear::new(&catalog, u16::MAX).is_err());
        let cache = YearCache::new();
        assert!(matches!(
            CalendarYear::cached(&cache, &catalog, 0),
            Err(Error::Date(_))
        ));
        assert!(cache.is_empty());
    }
}
