//! Commemoration catalogs.
//!
//! A [`Catalog`] is everything one calendar knows before any year is built:
//! its commemorations, the seasons they open, and the numbered propers.
//! Catalogs are assembled with a [`CatalogBuilder`], which resolves the
//! `cannot_occur_after` links declared by name.

mod acna_bcp2019;
mod texts;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use cc_core::errors::{Error, Result};

use crate::commemoration::{Commemoration, CommemorationKind};
use crate::proper::Proper;
use crate::season::Season;

/// Abbreviation of the built-in ACNA 2019 calendar.
pub const ACNA_BCP2019: &str = "ACNA_BCP2019";

/// Catalog names the resolution rules look for.
pub mod names {
    /// Christmas Day.
    pub const CHRISTMAS_DAY: &str = "Christmas Day";
    /// The Epiphany.
    pub const EPIPHANY: &str = "The Epiphany";
    /// Ash Wednesday.
    pub const ASH_WEDNESDAY: &str = "Ash Wednesday";
    /// Good Friday.
    pub const GOOD_FRIDAY: &str = "Good Friday";
    /// Easter Day.
    pub const EASTER_DAY: &str = "Easter Day";
    /// Ascension Day.
    pub const ASCENSION_DAY: &str = "Ascension Day";
    /// The Day of Pentecost.
    pub const PENTECOST: &str = "The Day of Pentecost";
    /// Trinity Sunday.
    pub const TRINITY_SUNDAY: &str = "Trinity Sunday";
}

/// The commemorations, seasons and propers of one calendar.
#[derive(Debug)]
pub struct Catalog {
    abbreviation: String,
    name: String,
    commemorations: Vec<Arc<Commemoration>>,
    seasons: Vec<Arc<Season>>,
    season_starts: HashMap<String, Arc<Season>>,
    propers: Vec<Arc<Proper>>,
}

impl Catalog {
    /// Start a catalog.
    pub fn builder(abbreviation: impl Into<String>, name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(abbreviation, name)
    }

    /// The built-in calendar of the 2019 Book of Common Prayer.
    pub fn acna_bcp2019() -> Result<Arc<Catalog>> {
        static ACNA: OnceLock<Arc<Catalog>> = OnceLock::new();
        if let Some(catalog) = ACNA.get() {
            return Ok(Arc::clone(catalog));
        }
        let catalog = Arc::new(acna_bcp2019::build()?);
        Ok(Arc::clone(ACNA.get_or_init(|| catalog)))
    }

    /// Look up a built-in catalog by abbreviation.
    pub fn by_abbreviation(abbreviation: &str) -> Result<Arc<Catalog>> {
        match abbreviation {
            ACNA_BCP2019 => Self::acna_bcp2019(),
            other => Err(Error::Lookup {
                kind: "calendar",
                name: other.to_string(),
            }),
        }
    }

    /// Short identifier, e.g. `"ACNA_BCP2019"`.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Full name of the calendar.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every commemoration, sanctorale first, then weekday-relative, then
    /// temporale; insertion order within each group.
    pub fn commemorations(&self) -> &[Arc<Commemoration>] {
        &self.commemorations
    }

    /// Look up a commemoration by its catalog name.
    pub fn commemoration(&self, name: &str) -> Option<&Arc<Commemoration>> {
        self.commemorations.iter().find(|c| c.key() == name)
    }

    /// Seasons in calendar order.
    pub fn seasons(&self) -> &[Arc<Season>] {
        &self.seasons
    }

    /// The season that `commemoration_name` opens, if any.
    pub fn season_for_start(&self, commemoration_name: &str) -> Option<&Arc<Season>> {
        self.season_starts.get(commemoration_name)
    }

    /// The numbered propers.
    pub fn propers(&self) -> &[Arc<Proper>] {
        &self.propers
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Assembles a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    abbreviation: String,
    name: String,
    entries: Vec<(Commemoration, Option<String>)>,
    offsets: Vec<(String, i32)>,
    seasons: Vec<Season>,
    propers: Vec<Proper>,
}

impl CatalogBuilder {
    /// An empty catalog.
    pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a commemoration.
    pub fn add(mut self, commemoration: Commemoration) -> Self {
        self.entries.push((commemoration, None));
        self
    }

    /// Add a commemoration that cannot occur on or after the catalog entry
    /// named `blocker`.
    pub fn add_blocked(mut self, commemoration: Commemoration, blocker: &str) -> Self {
        self.entries.push((commemoration, Some(blocker.to_string())));
        self
    }

    /// Add a weekday-relative commemoration shifted by `days` days from the
    /// weekday it is counted to.
    pub fn add_offset(mut self, commemoration: Commemoration, days: i32) -> Self {
        self.offsets.push((commemoration.key().to_string(), days));
        self.entries.push((commemoration, None));
        self
    }

    /// Add a season.
    pub fn season(mut self, season: Season) -> Self {
        self.seasons.push(season);
        self
    }

    /// Add a numbered proper.
    pub fn proper(mut self, proper: Proper) -> Self {
        self.propers.push(proper);
        self
    }

    /// Resolve links and freeze the catalog.
    ///
    /// Fails with [`Error::Lookup`] when a blocker or season start names no
    /// catalog entry, with [`Error::InvalidArgument`] when an offset is given
    /// to a commemoration that is not weekday-relative, and with
    /// [`Error::Construction`] when two names are reused or the blocker links
    /// form a cycle.
    pub fn build(self) -> Result<Catalog> {
        let mut entries = self.entries;
        for (key, days) in &self.offsets {
            if let Some((c, _)) = entries.iter_mut().find(|(c, _)| c.key() == key.as_str()) {
                c.set_days_offset(*days)?;
            }
        }
        entries.sort_by_key(|(c, _)| kind_order(&c.kind));

        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for (i, (c, _)) in entries.iter().enumerate() {
            if index.insert(c.key().to_string(), i).is_some() {
                return Err(Error::Construction(format!(
                    "commemoration {:?} is defined twice",
                    c.key()
                )));
            }
        }
        let mut blockers: Vec<Option<usize>> = Vec::with_capacity(entries.len());
        for (_, blocker) in &entries {
            blockers.push(match blocker {
                None => None,
                Some(name) => Some(*index.get(name).ok_or_else(|| Error::Lookup {
                    kind: "commemoration",
                    name: name.clone(),
                })?),
            });
        }

        // Entries are frozen blockers-first; every round freezes at least one
        // entry whose blocker is already frozen, or the links form a cycle.
        let mut frozen: Vec<Option<Arc<Commemoration>>> = vec![None; entries.len()];
        let mut pending: Vec<Option<Commemoration>> =
            entries.into_iter().map(|(c, _)| Some(c)).collect();
        let mut remaining = pending.len();
        while remaining > 0 {
            let before = remaining;
            for i in 0..pending.len() {
                if pending[i].is_none() {
                    continue;
                }
                let blocker = match blockers[i] {
                    None => None,
                    Some(b) => match &frozen[b] {
                        Some(arc) => Some(Arc::clone(arc)),
                        None => continue,
                    },
                };
                if let Some(mut c) = pending[i].take() {
                    c.cannot_occur_after = blocker;
                    frozen[i] = Some(Arc::new(c));
                    remaining -= 1;
                }
            }
            if remaining == before {
                return Err(Error::Construction(
                    "cannot_occur_after links form a cycle".into(),
                ));
            }
        }
        let commemorations: Vec<Arc<Commemoration>> = frozen.into_iter().flatten().collect();

        let seasons: Vec<Arc<Season>> = self.seasons.into_iter().map(Arc::new).collect();
        let mut season_starts = HashMap::with_capacity(seasons.len());
        for season in &seasons {
            if !index.contains_key(&season.start_commemoration) {
                return Err(Error::Lookup {
                    kind: "season start",
                    name: season.start_commemoration.clone(),
                });
            }
            season_starts.insert(season.start_commemoration.clone(), Arc::clone(season));
        }

        let mut propers = self.propers;
        propers.sort_by_key(|p| p.number);

        Ok(Catalog {
            abbreviation: self.abbreviation,
            name: self.name,
            commemorations,
            seasons,
            season_starts,
            propers: propers.into_iter().map(Arc::new).collect(),
        })
    }
}

fn kind_order(kind: &CommemorationKind) -> u8 {
    match kind {
        CommemorationKind::Sanctorale { .. } => 0,
        CommemorationKind::SanctoraleBased { .. } => 1,
        CommemorationKind::Temporale { .. } => 2,
        CommemorationKind::Ferial { .. } => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::rank::Rank;
    use crate::season::SeasonKind;
    use cc_time::{Month, Weekday};

    #[test]
    fn builder_orders_by_kind_and_links_blockers() {
        let catalog = Catalog::builder("TEST", "Test")
            .add(Commemoration::temporale("Easter Day", Rank::PrincipalFeast, 0))
            .add_blocked(
                Commemoration::sanctorale_based(
                    "The Second Sunday of Christmas",
                    Rank::Sunday,
                    Weekday::Sunday,
                    2,
                    Month::December,
                    25,
                ),
                "The Epiphany",
            )
            .add(Commemoration::sanctorale(
                "The Epiphany",
                Rank::PrincipalFeast,
                Month::January,
                6,
            ))
            .season(Season::new(SeasonKind::Eastertide, "Easter Day", Color::White))
            .build()
            .unwrap();
        let keys: Vec<&str> = catalog.commemorations().iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            ["The Epiphany", "The Second Sunday of Christmas", "Easter Day"]
        );
        let second = catalog.commemoration("The Second Sunday of Christmas").unwrap();
        assert_eq!(
            second.cannot_occur_after.as_ref().map(|c| c.key()),
            Some("The Epiphany")
        );
        assert_eq!(
            catalog.season_for_start("Easter Day").map(|s| s.kind),
            Some(SeasonKind::Eastertide)
        );
    }

    #[test]
    fn unknown_names_are_lookup_errors() {
        let err = Catalog::builder("TEST", "Test")
            .add_blocked(
                Commemoration::temporale("Easter Day", Rank::PrincipalFeast, 0),
                "Nowhere",
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Lookup { kind: "commemoration", .. }));

        let err = Catalog::builder("TEST", "Test")
            .season(Season::new(SeasonKind::Lent, "Ash Wednesday", Color::Purple))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Lookup { kind: "season start", .. }));

        assert!(matches!(
            Catalog::by_abbreviation("TEC_BCP1979"),
            Err(Error::Lookup { kind: "calendar", .. })
        ));
    }

    #[test]
    fn cycles_and_duplicates_fail() {
        let err = Catalog::builder("TEST", "Test")
            .add_blocked(Commemoration::temporale("A", Rank::Sunday, 0), "B")
            .add_blocked(Commemoration::temporale("B", Rank::Sunday, 7), "A")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Construction(_)));

        let err = Catalog::builder("TEST", "Test")
            .add(Commemoration::temporale("A", Rank::Sunday, 0))
            .add(Commemoration::temporale("A", Rank::Sunday, 7))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Construction(_)));
    }

    #[test]
    fn offsets_apply_only_to_weekday_relative_entries() {
        let catalog = Catalog::builder("TEST", "Test")
            .add_offset(
                Commemoration::sanctorale_based(
                    "Ember Friday",
                    Rank::EmberDay,
                    Weekday::Wednesday,
                    1,
                    Month::September,
                    14,
                ),
                2,
            )
            .build()
            .unwrap();
        let friday = catalog.commemoration("Ember Friday").unwrap();
        assert!(matches!(
            friday.kind,
            CommemorationKind::SanctoraleBased { days_offset: 2, .. }
        ));

        let err = Catalog::builder("TEST", "Test")
            .add_offset(Commemoration::temporale("Easter Day", Rank::PrincipalFeast, 0), 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn built_in_catalog_is_shared() {
        let a = Catalog::by_abbreviation(ACNA_BCP2019).unwrap();
        let b = Catalog::acna_bcp2019().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.propers().len(), 28);
        assert_eq!(a.seasons().len(), 7);
    }
}
