//! Easter, Advent and weekday-relative date arithmetic.
//!
//! Every moveable observance in the calendar is placed by one of these three
//! functions: the temporale counts days from [`easter`], the liturgical year
//! opens on [`advent`], and observances such as "the Sunday before
//! Christmas" or "the Wednesday after Holy Cross Day" go through
//! [`weekday_after`].

use cc_core::ensure;
use cc_core::errors::Result;
use cc_core::Year;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// Gregorian Easter Day for `year` (Meeus/Jones/Butcher).
///
/// # Example
/// ```
/// use cc_time::{easter, Date};
/// assert_eq!(easter(2019).unwrap(), Date::from_ymd(2019, 4, 21).unwrap());
/// ```
pub fn easter(year: Year) -> Result<Date> {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = (19 * a + b - b / 4 - ((b - (b + 8) / 25 + 1) / 3) + 15) % 30;
    let e = (32 + 2 * (b % 4) + 2 * (c / 4) - d - (c % 4)) % 7;
    let f = d + e - 7 * ((a + 11 * d + 22 * e) / 451) + 114;
    let month = (f / 31) as u8;
    let day = (f % 31 + 1) as u8;
    Date::from_ymd(year, month, day)
}

/// The First Sunday of Advent in `year`: the fourth Sunday before
/// Christmas Day.
///
/// Always falls between November 27 and December 3 inclusive.
pub fn advent(year: Year) -> Result<Date> {
    weekday_after(Weekday::Sunday, Month::December, 25, year, -4)
}

/// The `number_after`-th `weekday` relative to `month`/`day` of `year`.
///
/// A positive count searches forward from the day after the anchor, a
/// negative count searches backward from the day before it, so an anchor
/// that already falls on `weekday` is never itself returned.  Each further
/// step adds (or subtracts) a week.
///
/// # Errors
/// [`Error::Precondition`](cc_core::Error::Precondition) when
/// `number_after` is zero; [`Error::Date`](cc_core::Error::Date) when the
/// anchor or the result is not a valid date.
pub fn weekday_after(
    weekday: Weekday,
    month: Month,
    day: u8,
    year: Year,
    number_after: i32,
) -> Result<Date> {
    ensure!(
        number_after != 0,
        "weekday_after: number_after must be non-zero"
    );
    let anchor = Date::from_month_day(year, month, day)?;
    let target = i32::from(weekday.ordinal());
    let current = i32::from(anchor.weekday().ordinal());
    let weeks = number_after.abs() - 1;
    if number_after > 0 {
        let step = match (target - current).rem_euclid(7) {
            0 => 7,
            n => n,
        };
        anchor.add_days(step + 7 * weeks)
    } else {
        let step = match (current - target).rem_euclid(7) {
            0 => 7,
            n => n,
        };
        anchor.add_days(-(step + 7 * weeks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easters() {
        assert_eq!(easter(2019).unwrap(), date(2019, 4, 21));
        assert_eq!(easter(2020).unwrap(), date(2020, 4, 12));
        assert_eq!(easter(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter(2038).unwrap(), date(2038, 4, 25));
        assert_eq!(easter(2008).unwrap(), date(2008, 3, 23));
    }

    #[test]
    fn known_advents() {
        assert_eq!(advent(2019).unwrap(), date(2019, 12, 1));
        assert_eq!(advent(2020).unwrap(), date(2020, 11, 29));
        // Christmas on a Sunday pushes Advent back to its earliest date.
        assert_eq!(advent(2022).unwrap(), date(2022, 11, 27));
        assert_eq!(advent(2023).unwrap(), date(2023, 12, 3));
    }

    #[test]
    fn forward_search_skips_anchor() {
        // 2019-09-14 is a Saturday.
        assert_eq!(
            weekday_after(Weekday::Wednesday, Month::September, 14, 2019, 1).unwrap(),
            date(2019, 9, 18)
        );
        // 2019-01-06 is a Sunday, so the first Sunday after is the 13th.
        assert_eq!(
            weekday_after(Weekday::Sunday, Month::January, 6, 2019, 1).unwrap(),
            date(2019, 1, 13)
        );
        assert_eq!(
            weekday_after(Weekday::Sunday, Month::January, 6, 2019, 3).unwrap(),
            date(2019, 1, 27)
        );
    }

    #[test]
    fn backward_search_skips_anchor() {
        // 2022-12-25 is a Sunday.
        assert_eq!(
            weekday_after(Weekday::Sunday, Month::December, 25, 2022, -1).unwrap(),
            date(2022, 12, 18)
        );
        assert_eq!(
            weekday_after(Weekday::Sunday, Month::December, 25, 2019, -1).unwrap(),
            date(2019, 12, 22)
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(matches!(
            weekday_after(Weekday::Sunday, Month::December, 25, 2019, 0),
            Err(Error::Precondition(_))
        ));
    }
}
