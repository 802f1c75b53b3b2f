//! Process-wide cache of built church years.
//!
//! Building a year walks every commemoration of the catalog, so lookups by
//! date go through a [`YearCache`] keyed by calendar abbreviation and
//! Advent year.  Cached years are shared as `Arc<ChurchYear>` and are never
//! mutated after construction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use cc_core::errors::Result;
use cc_core::Year;

use crate::catalog::Catalog;
use crate::church_year::ChurchYear;

type Key = (String, Year);

/// Built church years, by calendar and Advent year.
#[derive(Debug, Default)]
pub struct YearCache {
    years: Mutex<HashMap<Key, Arc<ChurchYear>>>,
}

impl YearCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-wide cache.
    pub fn global() -> &'static YearCache {
        static INSTANCE: OnceLock<YearCache> = OnceLock::new();
        INSTANCE.get_or_init(YearCache::new)
    }

    /// The year of `catalog` beginning in Advent of `advent_year`, built on
    /// first use.
    ///
    /// The lock is not held while a year is built; if two callers race, the
    /// first to finish is kept and both receive it.
    pub fn get_or_build(&self, catalog: &Catalog, advent_year: Year) -> Result<Arc<ChurchYear>> {
        let key = (catalog.abbreviation().to_string(), advent_year);
        if let Some(year) = self.lock().get(&key) {
            tracing::trace!(calendar = %key.0, advent_year, "year cache hit");
            return Ok(Arc::clone(year));
        }
        tracing::debug!(calendar = %key.0, advent_year, "year cache miss");
        let built = Arc::new(ChurchYear::new(catalog, advent_year)?);
        let mut years = self.lock();
        Ok(Arc::clone(years.entry(key).or_insert(built)))
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached year.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Key, Arc<ChurchYear>>> {
        self.years.lock().expect("YearCache mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_lookup_is_shared() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let cache = YearCache::new();
        assert!(cache.is_empty());
        let a = cache.get_or_build(&catalog, 2020).unwrap();
        let b = cache.get_or_build(&catalog, 2020).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        cache.get_or_build(&catalog, 2021).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn failed_builds_are_not_cached() {
        let catalog = Catalog::acna_bcp2019().unwrap();
        let cache = YearCache::new();
        assert!(cache.get_or_build(&catalog, 1700).is_err());
        assert!(cache.is_empty());
    }
}
