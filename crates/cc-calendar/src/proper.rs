//! Numbered propers of the Season after Pentecost.

use std::sync::Arc;

use cc_time::Date;

use crate::collects::Collect;

/// One of the numbered Sunday propers, valid for the Sundays that fall in a
/// fixed month/day range of any year.
#[derive(Debug, Clone, PartialEq)]
pub struct Proper {
    /// Proper number, 1–28.
    pub number: u8,
    /// First (month, day) the proper covers.
    pub start: (u8, u8),
    /// Last (month, day) the proper covers, inclusive.
    pub end: (u8, u8),
    /// Collect for the Sunday.
    pub collect: Option<Collect>,
}

impl Proper {
    /// Return `true` if `date`'s month and day fall inside the range.
    pub fn covers(&self, date: Date) -> bool {
        let md = date.month_day();
        self.start <= md && md <= self.end
    }

    /// The suffix appended to a Sunday that takes this proper.
    pub fn label(&self) -> String {
        format!("(Proper {})", self.number)
    }
}

/// Find the proper covering `date`, if any.
pub fn find_proper(propers: &[Arc<Proper>], date: Date) -> Option<Arc<Proper>> {
    propers.iter().find(|p| p.covers(date)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_ranges_ignore_the_year() {
        let proper = Proper {
            number: 3,
            start: (5, 22),
            end: (5, 28),
            collect: None,
        };
        assert!(proper.covers(Date::from_ymd(2020, 5, 24).unwrap()));
        assert!(proper.covers(Date::from_ymd(2037, 5, 28).unwrap()));
        assert!(!proper.covers(Date::from_ymd(2020, 5, 29).unwrap()));
        assert_eq!(proper.label(), "(Proper 3)");
    }
}
