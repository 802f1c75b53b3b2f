//! Date arithmetic properties that every liturgical year relies on.

use cc_time::{advent, easter, weekday_after, Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn serial_walk_is_consistent() {
    // Walk a full leap year one day at a time and check the components roll
    // over correctly.
    let mut d = date(2019, 12, 31);
    let end = date(2020, 12, 31);
    let mut count = 0;
    while d < end {
        let next = d + 1;
        assert_eq!(next - d, 1);
        if d.day_of_month() == d.month().length(d.year()) {
            assert_eq!(next.day_of_month(), 1, "{next} should start a month");
        } else {
            assert_eq!(next.day_of_month(), d.day_of_month() + 1);
        }
        d = next;
        count += 1;
    }
    assert_eq!(count, 366);
}

#[test]
fn ember_wednesday_anchors() {
    // Holy Cross Day 2020 is a Monday; the Ember Wednesday follows two days later.
    assert_eq!(
        weekday_after(Weekday::Wednesday, Month::September, 14, 2020, 1).unwrap(),
        date(2020, 9, 16)
    );
    // Saint Lucy 2019 is a Friday.
    assert_eq!(
        weekday_after(Weekday::Wednesday, Month::December, 13, 2019, 1).unwrap(),
        date(2019, 12, 18)
    );
}

#[test]
fn thanksgiving_is_fourth_thursday_of_november() {
    for (year, day) in [(2019, 28), (2020, 26), (2021, 25), (2022, 24), (2023, 23)] {
        assert_eq!(
            weekday_after(Weekday::Thursday, Month::November, 21, year, 1).unwrap(),
            date(year, 11, day)
        );
    }
}

proptest! {
    #[test]
    fn easter_is_a_sunday_in_window(year in 1900u16..=2199) {
        let e = easter(year).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= date(year, 3, 22), "{} too early", e);
        prop_assert!(e <= date(year, 4, 25), "{} too late", e);
    }

    #[test]
    fn advent_is_a_sunday_in_window(year in 1900u16..=2199) {
        let a = advent(year).unwrap();
        prop_assert_eq!(a.weekday(), Weekday::Sunday);
        prop_assert!(a >= date(year, 11, 27), "{} too early", a);
        prop_assert!(a <= date(year, 12, 3), "{} too late", a);
        prop_assert!(date(year, 12, 25) - a >= 22);
    }

    #[test]
    fn weekday_after_lands_on_weekday(
        year in 1901u16..=2198,
        month in 1u8..=12,
        day in 1u8..=28,
        wd in 1u8..=7,
        n in prop_oneof![-5i32..=-1, 1i32..=5],
    ) {
        let weekday = Weekday::from_ordinal(wd).unwrap();
        let m = Month::from_number(month).unwrap();
        let anchor = Date::from_month_day(year, m, day).unwrap();
        let found = weekday_after(weekday, m, day, year, n).unwrap();
        prop_assert_eq!(found.weekday(), weekday);
        let distance = anchor.days_between(found);
        prop_assert!(distance != 0);
        prop_assert_eq!(distance.signum(), n.signum());
        prop_assert!(distance.abs() > 7 * (n.abs() - 1));
        prop_assert!(distance.abs() <= 7 * n.abs());
    }

    #[test]
    fn iso_keys_parse_back(serial_offset in 0i32..109_000) {
        let d = Date::MIN + serial_offset;
        let parsed: Date = d.iso_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }
}
