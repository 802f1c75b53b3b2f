//! # churchcal
//!
//! Liturgical calendar resolution for the 2019 Book of Common Prayer.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates and adds lookups by date that go through the global
//! [`Settings`](core::Settings) and the process-wide [`YearCache`].
//!
//! ## Quick start
//!
//! ```rust
//! use churchcal::{calendar_date, FastDay};
//!
//! let christmas = calendar_date("2019-12-25").unwrap().unwrap();
//! assert_eq!(christmas.primary().unwrap().name, "Christmas Day");
//! assert_eq!(christmas.fast_day(), FastDay::None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::Arc;

/// Core types, settings, and error definitions.
pub use cc_core as core;

/// Dates and the Easter/Advent arithmetic.
pub use cc_time as time;

/// Commemorations, catalogs, and church years.
pub use cc_calendar as calendar;

pub use cc_calendar::{
    liturgical_year_of, o_antiphon, CalendarDate, CalendarYear, Catalog, ChurchYear, Color,
    Commemoration, FastDay, Lectionary, MassYear, Rank, SeasonKind, YearCache,
};
pub use cc_core::{Error, Result, Settings};
pub use cc_time::Date;

/// The configured calendar.
pub fn catalog() -> Result<Arc<Catalog>> {
    Catalog::by_abbreviation(&Settings::instance().calendar())
}

/// The church year of the configured calendar beginning in Advent of
/// `advent_year`, shared through the cache when it is enabled.
pub fn church_year(advent_year: cc_core::Year) -> Result<Arc<ChurchYear>> {
    let catalog = catalog()?;
    if Settings::instance().cache_enabled() {
        YearCache::global().get_or_build(&catalog, advent_year)
    } else {
        Ok(Arc::new(ChurchYear::new(&catalog, advent_year)?))
    }
}

/// The church year containing `date`.
pub fn church_year_for(date: Date) -> Result<Arc<ChurchYear>> {
    church_year(liturgical_year_of(date)?)
}

/// The resolved day for an ISO `YYYY-MM-DD` string.
///
/// Returns `Ok(None)` when the string is not a date.
pub fn calendar_date(key: &str) -> Result<Option<CalendarDate>> {
    let Ok(date) = key.parse::<Date>() else {
        tracing::trace!(key, "not a date");
        return Ok(None);
    };
    let year = church_year_for(date)?;
    Ok(year.get(date).cloned())
}
