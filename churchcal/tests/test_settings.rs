//! Lookups under changed global settings.
//!
//! Kept apart from the other lookup tests: settings are process-wide and
//! each test file runs in its own process.

use std::sync::Arc;

use churchcal::core::ScopedCalendar;
use churchcal::{calendar_date, church_year, church_year_for, Date, Error, Settings};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn lookups_follow_settings() {
    let settings = Settings::instance();
    settings.reset();

    let easter = calendar_date("2020-04-12").unwrap().unwrap();
    assert_eq!(easter.primary().unwrap().name, "Easter Day");
    assert_eq!(easter.advent_year, 2019);
    assert!(calendar_date("Easter").unwrap().is_none());
    assert!(calendar_date("2020-02-30").unwrap().is_none());

    let a = church_year(2019).unwrap();
    let b = church_year_for(date(2020, 4, 12)).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    settings.set_cache_enabled(false);
    let c = church_year(2019).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(c.len(), a.len());
    settings.set_cache_enabled(true);

    {
        let _guard = ScopedCalendar::new("TEC_BCP1979");
        assert!(matches!(
            calendar_date("2020-04-12"),
            Err(Error::Lookup { kind: "calendar", .. })
        ));
    }
    assert!(calendar_date("2020-04-12").unwrap().is_some());
    settings.reset();
}
