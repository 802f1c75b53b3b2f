//! # cc-time
//!
//! Date, weekday, and month types, plus the Easter and Advent arithmetic that
//! anchors every moveable observance.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `easter`, `advent` and `weekday_after`.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{advent, easter, weekday_after};
pub use month::Month;
pub use weekday::Weekday;
