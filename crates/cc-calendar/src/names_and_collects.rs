//! Names and collects for a resolved year.
//!
//! Runs after every date has been settled, in three sweeps that each cover
//! the whole year before the next begins:
//!
//! 1. Septuagesima: the Sunday nine weeks before Easter is also named
//!    Septuagesima and may be kept in purple.
//! 2. Collects: every commemoration gets its Morning and Evening Prayer
//!    collects, weekdays are named after the observance they follow, and
//!    the evening before a major observance takes on that observance.
//! 3. O Antiphons: Sundays of 16–23 December carry the day's antiphon.

use cc_core::utilities::data_formatters::lowercase_article;
use cc_time::Date;

use crate::antiphons::with_o_antiphon;
use crate::calendar_date::CalendarDate;
use crate::catalog::names;
use crate::collects::PrayerCollects;
use crate::color::Color;
use crate::commemoration::Commemoration;
use crate::cursor::Cursor;
use crate::proper::Proper;
use crate::rank::Rank;

const SEPTUAGESIMA: &str = ", or Septuagesima";

/// Run the three sweeps over `dates`, which must be consecutive days.
/// `septuagesima` is the Sunday 63 days before Easter.
pub(crate) fn set_names_and_collects(dates: &mut [CalendarDate], septuagesima: Date) {
    septuagesima_sweep(dates, septuagesima);
    collect_sweep(dates, septuagesima);
    o_antiphon_sweep(dates);
}

// ── Sweep A ──────────────────────────────────────────────────────────────────

fn septuagesima_sweep(dates: &mut [CalendarDate], septuagesima: Date) {
    let mut cursor = Cursor::new(dates.len());
    while let Some(i) = cursor.next() {
        let day = &mut dates[i];
        if day.date != septuagesima {
            continue;
        }
        for c in day.required.iter_mut().chain(day.optional.iter_mut()) {
            if c.rank.is_sunday_like() {
                mark_septuagesima(c, day.date, septuagesima);
            }
        }
    }
}

fn mark_septuagesima(c: &mut Commemoration, date: Date, septuagesima: Date) {
    if date == septuagesima && !c.name.ends_with(SEPTUAGESIMA) {
        let name = format!("{}{SEPTUAGESIMA}", c.name);
        c.rename(name);
    }
    if c.name.contains("gesima") {
        c.colors.alternate_color = Some(Color::Purple);
    }
}

// ── Sweep B ──────────────────────────────────────────────────────────────────

fn collect_sweep(dates: &mut [CalendarDate], septuagesima: Date) {
    let mut cursor = Cursor::new(dates.len());
    while let Some(i) = cursor.next() {
        let (before, rest) = dates.split_at_mut(i);
        let today = &mut rest[0];
        {
            let CalendarDate {
                date,
                proper,
                required,
                optional,
                ..
            } = today;
            for c in required.iter_mut() {
                assign_collect(c, true, *date, proper.as_deref(), before, &cursor, septuagesima);
            }
            for c in optional.iter_mut() {
                assign_collect(c, false, *date, proper.as_deref(), before, &cursor, septuagesima);
            }
        }
        if let Some(yesterday) = before.last_mut() {
            check_previous_evening(yesterday, today);
        }
    }
}

/// Try each way of finding a collect in turn; the first that applies wins.
fn assign_collect(
    c: &mut Commemoration,
    required: bool,
    date: Date,
    proper: Option<&Proper>,
    before: &[CalendarDate],
    cursor: &Cursor,
    septuagesima: Date,
) {
    if own_collect(c)
        || proper_collect(c, required, proper)
        || feria_collect(c, date, before, cursor, septuagesima)
        || saint_collect(c)
    {
        return;
    }
    c.prayer_collects = Some(PrayerCollects::default());
}

fn own_collect(c: &mut Commemoration) -> bool {
    if c.rank == Rank::Feria {
        return false;
    }
    let Some(collect) = c.collects.collect_1.clone() else {
        return false;
    };
    let evening = c.collects.collect_2.clone().unwrap_or_else(|| collect.clone());
    c.prayer_collects = Some(PrayerCollects {
        morning: Some(collect),
        evening: Some(evening),
    });
    true
}

fn proper_collect(c: &mut Commemoration, required: bool, proper: Option<&Proper>) -> bool {
    if !required {
        return false;
    }
    let Some(proper) = proper else {
        return false;
    };
    let Some(collect) = proper.collect.clone() else {
        return false;
    };
    c.prayer_collects = Some(PrayerCollects::both(Some(collect)));
    let named_for_proper = c.rank == Rank::Sunday
        || c.key() == names::PENTECOST
        || c.key() == names::TRINITY_SUNDAY;
    let label = proper.label();
    if named_for_proper && !c.name.ends_with(&label) {
        let name = format!("{} {label}", c.name);
        c.rename(name);
    }
    true
}

/// A weekday takes the collect of the nearest earlier day whose observance
/// the weekdays follow, and is named after it.
fn feria_collect(
    c: &mut Commemoration,
    date: Date,
    before: &[CalendarDate],
    cursor: &Cursor,
    septuagesima: Date,
) -> bool {
    if c.rank != Rank::Feria {
        return false;
    }
    let mut index = cursor.peek_previous();
    let source = loop {
        let Some(i) = index else {
            return false;
        };
        if let Some(source) = before.get(i).and_then(CalendarDate::feria_collect_source) {
            break source;
        }
        index = i.checked_sub(1);
    };

    c.collects = source.collects.clone();
    c.prayer_collects = Some(match source.prayer_collects {
        Some(found) => found,
        None => PrayerCollects {
            morning: source.collects.collect_1.clone(),
            evening: source
                .collects
                .collect_2
                .clone()
                .or_else(|| source.collects.collect_1.clone()),
        },
    });
    c.rename(format!(
        "{} after {}",
        date.weekday(),
        lowercase_article(&source.name)
    ));
    mark_septuagesima(c, date, septuagesima);
    if let Some(name) = with_o_antiphon(&c.name, date) {
        c.rename(name);
    }
    true
}

fn saint_collect(c: &mut Commemoration) -> bool {
    let Some(saint) = &c.saint else {
        return false;
    };
    c.prayer_collects = Some(PrayerCollects::both(Some(saint.common_collect())));
    true
}

/// When today is a major observance, its eve is kept at Evening Prayer the
/// day before.
///
/// Yesterday's evening lists start as a copy of yesterday's own required and
/// optional lists, not today's; the "Eve of" copy is added to them.
fn check_previous_evening(yesterday: &mut CalendarDate, today: &CalendarDate) {
    let Some(primary) = today.primary() else {
        return;
    };
    if primary.rank.precedence_rank() > Rank::HolyDay.precedence_rank()
        || primary.rank == Rank::PrivilegedObservance
    {
        return;
    }

    let mut evening_required = yesterday.required.clone();
    let mut evening_optional = yesterday.optional.clone();

    let eve_name = format!("Eve of {}", primary.name);
    let already_kept = yesterday
        .all()
        .any(|c| c.name == primary.name || c.name == eve_name);
    if !already_kept {
        let mut eve = primary.clone();
        eve.rename(eve_name);
        let evening = primary.collects.collect_eve.clone().or_else(|| {
            primary
                .prayer_collects
                .as_ref()
                .and_then(|p| p.evening.clone())
        });
        eve.prayer_collects = Some(PrayerCollects {
            morning: None,
            evening,
        });
        evening_required.push(eve);
    }

    evening_required.retain(|c| c.rank != Rank::PrivilegedObservance);
    evening_required.sort_by_key(|c| c.rank.precedence_rank());
    if primary.rank == Rank::Sunday {
        evening_optional.retain(|c| c.rank != Rank::Feria);
    }

    yesterday.evening_required = Some(evening_required);
    yesterday.evening_optional = Some(evening_optional);
    yesterday.evening_season = today.season.clone();
    if today.proper.is_some() {
        yesterday.proper = today.proper.clone();
    }
}

// ── Sweep C ──────────────────────────────────────────────────────────────────

fn o_antiphon_sweep(dates: &mut [CalendarDate]) {
    let mut cursor = Cursor::new(dates.len());
    while let Some(i) = cursor.next() {
        let day = &mut dates[i];
        for c in day.required.iter_mut().chain(day.optional.iter_mut()) {
            if !c.rank.is_sunday_like() {
                continue;
            }
            if let Some(name) = with_o_antiphon(&c.name, day.date) {
                c.rename(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::collects::Collects;
    use crate::season::{Season, SeasonKind};
    use cc_time::Month;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Consecutive finalized days starting on `start`, each holding the
    /// given commemorations.
    fn days(start: Date, kind: SeasonKind, plan: Vec<Vec<Commemoration>>) -> Vec<CalendarDate> {
        let season = Arc::new(Season::new(kind, "start", Color::Green));
        plan.into_iter()
            .enumerate()
            .map(|(i, commemorations)| {
                let mut day = CalendarDate::new(start.add_days(i as i32).unwrap(), 2019);
                day.season = Some(Arc::clone(&season));
                for c in commemorations {
                    day.add_commemoration(c);
                }
                day.apply_rules().unwrap();
                day
            })
            .collect()
    }

    fn sunday(name: &str, collect: &str) -> Commemoration {
        Commemoration::sanctorale(name, Rank::Sunday, Month::January, 1)
            .with_collects(Collects::one(collect))
    }

    #[test]
    fn weekdays_follow_the_sunday() {
        // 2020-06-21 is a Sunday.
        let mut dates = days(
            date(2020, 6, 21),
            SeasonKind::AfterPentecost,
            vec![vec![sunday("The Third Sunday after Trinity", "Keep us")], vec![], vec![]],
        );
        set_names_and_collects(&mut dates, date(2020, 2, 9));
        let tuesday = &dates[2].optional[0];
        assert_eq!(tuesday.name, "Tuesday after the Third Sunday after Trinity");
        assert_eq!(tuesday.original_name.as_deref(), Some("Feria"));
        let collects = tuesday.prayer_collects.as_ref().unwrap();
        assert_eq!(collects.morning.as_ref().map(|c| c.text()), Some("Keep us"));
    }

    #[test]
    fn weekdays_after_septuagesima_may_be_purple() {
        let mut dates = days(
            date(2020, 2, 9),
            SeasonKind::Epiphanytide,
            vec![vec![sunday("The Fifth Sunday after the Epiphany", "Set us free")], vec![]],
        );
        set_names_and_collects(&mut dates, date(2020, 2, 9));
        let sunday = &dates[0].required[0];
        assert_eq!(sunday.name, "The Fifth Sunday after the Epiphany, or Septuagesima");
        assert_eq!(sunday.colors.alternate_color, Some(Color::Purple));
        let monday = &dates[1].optional[0];
        assert_eq!(
            monday.name,
            "Monday after the Fifth Sunday after the Epiphany, or Septuagesima"
        );
        assert_eq!(monday.colors.alternate_color, Some(Color::Purple));
    }

    #[test]
    fn weekday_with_nothing_to_follow_has_no_collect() {
        let mut dates = days(date(2020, 6, 23), SeasonKind::AfterPentecost, vec![vec![]]);
        set_names_and_collects(&mut dates, date(2020, 2, 9));
        let feria = &dates[0].optional[0];
        assert_eq!(feria.name, "Feria");
        assert_eq!(feria.prayer_collects, Some(PrayerCollects::default()));
    }

    #[test]
    fn eve_of_a_sunday() {
        // 2020-06-27 is a Saturday.
        let lesser = Commemoration::sanctorale("Irenaeus", Rank::LesserFeast, Month::June, 28);
        let mut dates = days(
            date(2020, 6, 27),
            SeasonKind::AfterPentecost,
            vec![vec![lesser], vec![sunday("The Fourth Sunday after Trinity", "Protector")]],
        );
        set_names_and_collects(&mut dates, date(2020, 2, 9));
        let saturday = &dates[0];
        let required = saturday.evening_required.as_ref().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].name, "Eve of The Fourth Sunday after Trinity");
        let optional = saturday.evening_optional.as_ref().unwrap();
        assert!(optional.iter().all(|c| c.rank != Rank::Feria));
        assert!(optional.iter().any(|c| c.name == "Irenaeus"));
        // Morning Prayer is untouched.
        assert!(saturday.required.is_empty());
        assert_eq!(saturday.all_evening().count(), 2);
    }

    #[test]
    fn sundays_in_late_advent_carry_the_antiphon() {
        // 2019-12-22 is the Fourth Sunday of Advent.
        let mut dates = days(
            date(2019, 12, 22),
            SeasonKind::Advent,
            vec![vec![sunday("The Fourth Sunday of Advent", "Stir up")], vec![]],
        );
        set_names_and_collects(&mut dates, date(2020, 2, 9));
        assert_eq!(
            dates[0].required[0].name,
            "The Fourth Sunday of Advent (O Emmanuel / O God With Us)"
        );
        assert_eq!(
            dates[1].optional[0].name,
            "Monday after the Fourth Sunday of Advent (O Virgo Virginum / O Virgin of Virgins)"
        );
    }
}
