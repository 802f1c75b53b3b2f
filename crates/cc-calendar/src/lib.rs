//! # cc-calendar
//!
//! Commemorations, seasons, and the resolution of a full church year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The O Antiphons of 16–23 December.
pub mod antiphons;

/// Process-wide cache of built years.
pub mod cache;

/// One day of a church year.
pub mod calendar_date;

/// A civil year stitched from two church years.
pub mod calendar_year;

/// Commemoration catalogs and the built-in ACNA 2019 calendar.
pub mod catalog;

/// `ChurchYear` — a fully resolved liturgical year.
pub mod church_year;

/// Collect texts and the collects resolved for each office.
pub mod collects;

/// Liturgical colors.
pub mod color;

/// `Commemoration` and its date rules.
pub mod commemoration;

/// Bidirectional cursors over a year's days.
pub mod cursor;

/// Lectionary cycle years and the readings lookup.
pub mod lectionary;

mod names_and_collects;

/// Numbered propers of the Season after Pentecost.
pub mod proper;

/// Precedence ranks.
pub mod rank;

/// Saints and the commons their collects are drawn from.
pub mod saints;

/// Liturgical seasons.
pub mod season;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use antiphons::{o_antiphon, OAntiphon};
pub use cache::YearCache;
pub use calendar_date::{CalendarDate, FastDay};
pub use calendar_year::CalendarYear;
pub use catalog::{Catalog, CatalogBuilder, ACNA_BCP2019};
pub use church_year::{liturgical_year_of, ChurchYear};
pub use collects::{Collect, Collects, PrayerCollects};
pub use color::{Color, Colors};
pub use commemoration::{Commemoration, CommemorationKind, InitialDate};
pub use cursor::{Cursor, YearCursor};
pub use lectionary::{
    Citation, DailyMassYear, InMemoryLectionary, Lectionary, MassYear, OfficeYear, ReadingKey,
    ServiceTime,
};
pub use proper::Proper;
pub use rank::Rank;
pub use saints::{Saint, SaintGender, SaintType};
pub use season::{Season, SeasonKind};
