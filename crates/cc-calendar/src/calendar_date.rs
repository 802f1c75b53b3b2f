//! One day of a church year and the rules that settle it.
//!
//! During construction a [`CalendarDate`] collects every commemoration that
//! lands on it, sorted by precedence.  [`CalendarDate::apply_rules`] then
//! moves displaced observances on to the following day and picks the
//! primary observance.  Once the year is built the date is read-only.

use std::sync::Arc;

use cc_core::errors::{Error, Result};
use cc_core::Year;
use cc_time::{Date, Weekday};

use crate::catalog::names;
use crate::commemoration::Commemoration;
use crate::lectionary::{Citation, Lectionary, MassYear, ReadingKey, ServiceTime};
use crate::proper::Proper;
use crate::rank::Rank;
use crate::season::{Season, SeasonKind};

/// How strictly a day is kept as a fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FastDay {
    /// Not a fast day.
    None,
    /// A day of abstinence or special devotion.
    Partial,
    /// A full fast.
    Full,
}

/// The resolution state of one calendar day.
#[derive(Debug, Clone)]
pub struct CalendarDate {
    /// The civil date.
    pub date: Date,
    /// Advent year of the church year that owns the date.
    pub advent_year: Year,
    /// Season, assigned while the year is built.
    pub season: Option<Arc<Season>>,
    /// Required commemorations, highest precedence first.
    pub required: Vec<Commemoration>,
    /// Optional commemorations, highest precedence first.
    pub optional: Vec<Commemoration>,
    /// Set once the primary observance is fixed.
    pub finalized: bool,
    /// Required observances at Evening Prayer, when the evening differs.
    pub evening_required: Option<Vec<Commemoration>>,
    /// Optional observances at Evening Prayer, when the evening differs.
    pub evening_optional: Option<Vec<Commemoration>>,
    /// Season at Evening Prayer.
    pub evening_season: Option<Arc<Season>>,
    /// Numbered proper, for Sundays after Pentecost and their eves.
    pub proper: Option<Arc<Proper>>,
}

impl CalendarDate {
    /// An empty day of the church year beginning in Advent of `advent_year`.
    pub fn new(date: Date, advent_year: Year) -> Self {
        Self {
            date,
            advent_year,
            season: None,
            required: Vec::new(),
            optional: Vec::new(),
            finalized: false,
            evening_required: None,
            evening_optional: None,
            evening_season: None,
            proper: None,
        }
    }

    // ── Construction ─────────────────────────────────────────────────────────

    /// Add a commemoration to the required or optional list according to its
    /// rank.  Both lists stay sorted; equal ranks keep insertion order.
    pub fn add_commemoration(&mut self, commemoration: Commemoration) {
        if commemoration.rank.required() {
            self.required.push(commemoration);
        } else {
            self.optional.push(commemoration);
        }
        self.sort_commemorations();
    }

    fn sort_commemorations(&mut self) {
        self.required.sort_by_key(|c| c.rank.precedence_rank());
        self.optional.sort_by_key(|c| c.rank.precedence_rank());
    }

    /// Settle the day: resolve conflicts between required commemorations and
    /// pick the primary.  Returns the commemorations to move to the next day.
    pub fn apply_rules(&mut self) -> Result<Vec<Commemoration>> {
        self.sort_commemorations();
        let transfers = self.process_transfers();
        self.finalize_day()?;
        Ok(transfers)
    }

    /// Resolve conflicts between required commemorations.
    ///
    /// The first required commemoration always stays.  A second may stay as
    /// an alternate Sunday; anything else is returned, marked transferred,
    /// except Sundays, which are never transferred.
    pub fn process_transfers(&mut self) -> Vec<Commemoration> {
        if self.required.first().map(|c| c.rank) == Some(Rank::PrivilegedLesserFeast)
            && !self.optional.is_empty()
        {
            let mut displaced = std::mem::take(&mut self.required);
            for c in &mut displaced {
                c.transferred = true;
            }
            return displaced;
        }

        if self.required.len() < 2 {
            return Vec::new();
        }

        let mut rest = self.required.split_off(1);
        let second = rest.remove(0);
        let keeps_alternate = self
            .season
            .as_ref()
            .map_or(true, |s| !s.kind.suppresses_alternate_sunday());
        if keeps_alternate && second.rank.precedence_rank() < 4 {
            let mut alternate = second;
            if alternate.rank != Rank::Sunday {
                alternate.rank = Rank::AlternateSunday;
            }
            self.required.push(alternate);
        } else {
            rest.insert(0, second);
        }

        let mut transfers = Vec::with_capacity(rest.len());
        for mut c in rest {
            if c.rank == Rank::Sunday {
                tracing::debug!(date = %self.date, commemoration = %c.name, "sunday displaced");
                continue;
            }
            c.transferred = true;
            transfers.push(c);
        }
        transfers
    }

    /// Append the season's feria unless the day already has an observance
    /// whose collect the weekdays follow.
    pub fn append_feria_if_needed(&mut self) -> Result<()> {
        if self.date.weekday().is_sunday()
            || self
                .required
                .iter()
                .any(|c| c.rank == Rank::PrivilegedObservance)
            || self.feria_collect_source().is_some()
        {
            return Ok(());
        }
        let season = self.season.as_ref().ok_or_else(|| {
            Error::Construction(format!("no season assigned to {}", self.date))
        })?;
        self.optional.push(Commemoration::ferial(self.date, season));
        Ok(())
    }

    /// Add the feria if needed and fix the primary observance.
    pub fn finalize_day(&mut self) -> Result<()> {
        self.append_feria_if_needed()?;
        self.optional.sort_by_key(|c| c.rank.precedence_rank());
        if self.required.is_empty() && self.optional.is_empty() {
            return Err(Error::Construction(format!(
                "{} has no commemoration",
                self.date
            )));
        }
        self.finalized = true;
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// The observance of the day: the first required commemoration, or the
    /// first optional one when none is required.  `None` before the day is
    /// finalized.
    pub fn primary(&self) -> Option<&Commemoration> {
        if !self.finalized {
            return None;
        }
        self.required.first().or_else(|| self.optional.first())
    }

    /// Required then optional commemorations.
    pub fn all(&self) -> impl Iterator<Item = &Commemoration> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Commemorations at Evening Prayer.
    pub fn all_evening(&self) -> impl Iterator<Item = &Commemoration> {
        self.evening_required
            .as_ref()
            .unwrap_or(&self.required)
            .iter()
            .chain(
                self.evening_optional
                    .as_ref()
                    .unwrap_or(&self.optional)
                    .iter(),
            )
    }

    /// The season.
    pub fn season(&self) -> Option<&Season> {
        self.season.as_deref()
    }

    /// The season at Evening Prayer.
    pub fn evening_season(&self) -> Option<&Season> {
        self.evening_season.as_deref().or(self.season())
    }

    fn season_kind(&self) -> Option<SeasonKind> {
        self.season().map(|s| s.kind)
    }

    /// The observance whose collect the following weekdays take, if this day
    /// has one.
    ///
    /// Christmas Day, the Epiphany, Ash Wednesday and Ascension Day qualify
    /// when they lead the day.  On a Sunday, Easter Day, Pentecost and
    /// Trinity Sunday qualify, then any Sunday; Pentecost and Trinity
    /// Sunday carry their proper in the name.
    pub fn feria_collect_source(&self) -> Option<Commemoration> {
        if let Some(first) = self.required.first() {
            let leads = [
                names::EPIPHANY,
                names::CHRISTMAS_DAY,
                names::ASH_WEDNESDAY,
                names::ASCENSION_DAY,
            ];
            if first.rank.required() && leads.contains(&first.key()) {
                return Some(first.clone());
            }
        }
        if !self.date.weekday().is_sunday() {
            return None;
        }
        for c in self.all() {
            if c.rank != Rank::PrincipalFeast {
                continue;
            }
            let key = c.key();
            if key.contains("Pentecost") || key.contains("Trinity") {
                let mut c = c.clone();
                if let Some(proper) = &self.proper {
                    c.name = format!("{} {}", c.name, proper.label());
                }
                return Some(c);
            }
            if key.contains("Easter") {
                return Some(c.clone());
            }
        }
        self.all().find(|c| c.rank == Rank::Sunday).cloned()
    }

    /// How the day is kept as a fast; the first matching rule wins.
    pub fn fast_day(&self) -> FastDay {
        if self.date.weekday().is_sunday() {
            return FastDay::None;
        }
        if self.is_full_fast() {
            return FastDay::Full;
        }
        if self.ember_or_rogation().is_some() {
            return FastDay::Partial;
        }
        match self.season_kind() {
            Some(SeasonKind::Christmastide | SeasonKind::Eastertide) => return FastDay::None,
            _ => {}
        }
        if self.primary().map(|c| c.rank) == Some(Rank::PrincipalFeast) {
            return FastDay::None;
        }
        if matches!(
            self.season_kind(),
            Some(SeasonKind::Lent | SeasonKind::HolyWeek)
        ) {
            return FastDay::Partial;
        }
        if self.date.weekday() == Weekday::Friday {
            return FastDay::Partial;
        }
        FastDay::None
    }

    /// Every reason the day is a fast; empty when it is not one.
    pub fn fast_day_reasons(&self) -> Vec<String> {
        if self.fast_day() == FastDay::None {
            return Vec::new();
        }
        let mut reasons = Vec::new();
        if self.is_full_fast() {
            if let Some(primary) = self.primary() {
                reasons.push(format!("{} is a day of fasting", primary.name));
            }
        }
        if let Some(c) = self.ember_or_rogation() {
            reasons.push(format!("{} ({})", c.name, c.rank.formatted_name()));
        }
        if let Some(season) = self
            .season()
            .filter(|s| matches!(s.kind, SeasonKind::Lent | SeasonKind::HolyWeek))
        {
            reasons.push(format!("Weekday of {}", season.name()));
        }
        if self.date.weekday() == Weekday::Friday {
            reasons.push("Friday, in commemoration of the Crucifixion".to_string());
        }
        reasons
    }

    fn is_full_fast(&self) -> bool {
        self.primary()
            .map_or(false, |c| c.key() == names::ASH_WEDNESDAY || c.key() == names::GOOD_FRIDAY)
    }

    /// An Ember or Rogation Day kept among the optional observances while no
    /// principal feast is required.
    fn ember_or_rogation(&self) -> Option<&Commemoration> {
        if self.required.iter().any(|c| c.rank == Rank::PrincipalFeast) {
            return None;
        }
        self.optional
            .iter()
            .find(|c| matches!(c.rank, Rank::EmberDay | Rank::RogationDay))
    }

    /// Readings for the day from `lectionary`.
    ///
    /// A Sunday that carries a proper reads the proper; otherwise, or when
    /// nothing is filed under the proper, the primary observance's readings
    /// are used.
    pub fn mass_readings(&self, lectionary: &impl Lectionary, time: ServiceTime) -> Vec<Citation> {
        let year = MassYear::for_advent_year(self.advent_year);
        if self.date.weekday().is_sunday() {
            if let Some(proper) = &self.proper {
                let found = lectionary.readings(&ReadingKey::Proper(proper.number), year, time);
                if !found.is_empty() {
                    return found;
                }
            }
        }
        match self.primary() {
            Some(primary) => lectionary.readings(
                &ReadingKey::Commemoration(primary.key().to_string()),
                year,
                time,
            ),
            None => Vec::new(),
        }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -", self.date.weekday(), self.date)?;
        for (i, c) in self.all().enumerate() {
            let sep = if i == 0 { " " } else { " | " };
            write!(f, "{sep}{}", c.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use cc_time::Month;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn season(kind: SeasonKind) -> Arc<Season> {
        Arc::new(Season::new(kind, "start", Color::Green))
    }

    fn day(d: Date, kind: SeasonKind) -> CalendarDate {
        let mut day = CalendarDate::new(d, 2019);
        day.season = Some(season(kind));
        day
    }

    fn feast(name: &str, rank: Rank) -> Commemoration {
        Commemoration::sanctorale(name, rank, Month::January, 1)
    }

    #[test]
    fn commemorations_sort_by_precedence_stably() {
        let mut d = day(date(2020, 6, 3), SeasonKind::AfterPentecost);
        d.add_commemoration(feast("Lesser", Rank::LesserFeast));
        d.add_commemoration(feast("Holy day A", Rank::HolyDay));
        d.add_commemoration(feast("Ember", Rank::EmberDay));
        d.add_commemoration(feast("Holy day B", Rank::HolyDay));
        d.add_commemoration(feast("Principal", Rank::PrincipalFeast));
        let required: Vec<&str> = d.required.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(required, ["Principal", "Holy day A", "Holy day B"]);
        let optional: Vec<&str> = d.optional.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(optional, ["Ember", "Lesser"]);
    }

    #[test]
    fn holy_day_on_a_sunday_is_transferred() {
        // 2020-08-09 is a Sunday.
        let mut d = day(date(2020, 8, 9), SeasonKind::AfterPentecost);
        d.add_commemoration(feast("The Ninth Sunday after Trinity", Rank::Sunday));
        d.add_commemoration(feast("Holy Day", Rank::HolyDay));
        let moved = d.process_transfers();
        assert_eq!(d.required.len(), 1);
        assert_eq!(moved.len(), 1);
        assert!(moved[0].transferred);
        assert_eq!(moved[0].name, "Holy Day");
    }

    #[test]
    fn high_ranking_second_becomes_alternate_sunday() {
        let mut d = day(date(2020, 11, 1), SeasonKind::AfterPentecost);
        d.add_commemoration(feast("All Saints' Day", Rank::PrincipalFeast));
        d.add_commemoration(feast("The Twenty-First Sunday after Trinity", Rank::Sunday));
        d.add_commemoration(feast("Observance", Rank::PrivilegedObservance));
        let moved = d.process_transfers();
        assert_eq!(d.required.len(), 2);
        assert_eq!(d.required[1].rank, Rank::AlternateSunday);
        assert_eq!(d.required[1].name, "Observance");
        // The Sunday is neither kept nor transferred.
        assert!(moved.is_empty());
    }

    #[test]
    fn sunday_second_keeps_its_rank() {
        let mut d = day(date(2020, 11, 1), SeasonKind::AfterPentecost);
        d.add_commemoration(feast("All Saints' Day", Rank::PrincipalFeast));
        d.add_commemoration(feast("The Twenty-First Sunday after Trinity", Rank::Sunday));
        assert!(d.process_transfers().is_empty());
        assert_eq!(d.required[1].rank, Rank::Sunday);
    }

    #[test]
    fn penitential_seasons_keep_no_alternate() {
        let mut d = day(date(2020, 3, 22), SeasonKind::Lent);
        d.add_commemoration(feast("Observance", Rank::PrivilegedObservance));
        d.add_commemoration(feast("The Fourth Sunday in Lent", Rank::Sunday));
        d.add_commemoration(feast("Holy Day", Rank::HolyDay));
        let moved = d.process_transfers();
        assert_eq!(d.required.len(), 1);
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].name, "Holy Day");
    }

    #[test]
    fn privileged_lesser_feast_yields_to_options() {
        let mut d = day(date(2020, 6, 3), SeasonKind::AfterPentecost);
        d.add_commemoration(feast("Privileged", Rank::PrivilegedLesserFeast));
        d.add_commemoration(feast("Lesser", Rank::LesserFeast));
        let moved = d.process_transfers();
        assert!(d.required.is_empty());
        assert_eq!(moved.len(), 1);
        assert!(moved[0].transferred);
    }

    #[test]
    fn weekdays_get_a_feria_and_sundays_do_not() {
        let mut weekday = day(date(2020, 6, 3), SeasonKind::AfterPentecost);
        weekday.add_commemoration(feast("Lesser", Rank::LesserFeast));
        weekday.apply_rules().unwrap();
        assert_eq!(weekday.optional.len(), 2);
        assert_eq!(weekday.primary().unwrap().name, "Lesser");
        assert_eq!(weekday.optional[1].rank, Rank::Feria);

        let mut sunday = day(date(2020, 6, 7), SeasonKind::AfterPentecost);
        sunday.add_commemoration(feast("Sunday", Rank::Sunday));
        sunday.apply_rules().unwrap();
        assert!(sunday.optional.is_empty());
        assert_eq!(sunday.primary().unwrap().name, "Sunday");
    }

    #[test]
    fn feria_needs_a_season() {
        let mut d = CalendarDate::new(date(2020, 6, 3), 2019);
        assert!(matches!(d.apply_rules(), Err(Error::Construction(_))));
    }

    #[test]
    fn feria_collect_sources() {
        let mut christmas = day(date(2019, 12, 25), SeasonKind::Christmastide);
        christmas.add_commemoration(feast(names::CHRISTMAS_DAY, Rank::PrincipalFeast));
        assert_eq!(
            christmas.feria_collect_source().map(|c| c.name),
            Some(names::CHRISTMAS_DAY.to_string())
        );

        let mut pentecost = day(date(2020, 5, 31), SeasonKind::Eastertide);
        pentecost.add_commemoration(feast(names::PENTECOST, Rank::PrincipalFeast));
        pentecost.proper = Some(Arc::new(Proper {
            number: 3,
            start: (5, 29),
            end: (6, 4),
            collect: None,
        }));
        assert_eq!(
            pentecost.feria_collect_source().map(|c| c.name),
            Some("The Day of Pentecost (Proper 3)".to_string())
        );
        assert_eq!(pentecost.required[0].name, names::PENTECOST);

        let mut holy_day = day(date(2020, 6, 11), SeasonKind::AfterPentecost);
        holy_day.add_commemoration(feast("Saint Barnabas", Rank::HolyDay));
        assert!(holy_day.feria_collect_source().is_none());
    }

    #[test]
    fn fast_rules() {
        let mut friday = day(date(2020, 6, 5), SeasonKind::AfterPentecost);
        friday.apply_rules().unwrap();
        assert_eq!(friday.fast_day(), FastDay::Partial);
        assert_eq!(friday.fast_day_reasons().len(), 1);

        let mut christmas_friday = day(date(2020, 12, 25), SeasonKind::Christmastide);
        christmas_friday.add_commemoration(feast(names::CHRISTMAS_DAY, Rank::PrincipalFeast));
        christmas_friday.apply_rules().unwrap();
        assert_eq!(christmas_friday.fast_day(), FastDay::None);
        assert!(christmas_friday.fast_day_reasons().is_empty());

        let mut ash = day(date(2020, 2, 26), SeasonKind::Lent);
        ash.add_commemoration(feast(names::ASH_WEDNESDAY, Rank::PrivilegedObservance));
        ash.apply_rules().unwrap();
        assert_eq!(ash.fast_day(), FastDay::Full);

        let mut ember = day(date(2020, 9, 16), SeasonKind::AfterPentecost);
        ember.add_commemoration(feast("Ember Wednesday in September", Rank::EmberDay));
        ember.apply_rules().unwrap();
        assert_eq!(ember.fast_day(), FastDay::Partial);

        let mut lent_sunday = day(date(2020, 3, 1), SeasonKind::Lent);
        lent_sunday.add_commemoration(feast("The First Sunday in Lent", Rank::Sunday));
        lent_sunday.apply_rules().unwrap();
        assert_eq!(lent_sunday.fast_day(), FastDay::None);
    }

    #[test]
    fn evening_falls_back_to_the_day() {
        let mut d = day(date(2020, 6, 3), SeasonKind::AfterPentecost);
        d.apply_rules().unwrap();
        assert_eq!(d.all_evening().count(), d.all().count());
        assert_eq!(d.evening_season().map(|s| s.kind), Some(SeasonKind::AfterPentecost));
    }
}
