//! Global library settings.
//!
//! [`Settings`] holds the **calendar abbreviation** used by the convenience
//! lookups and a switch for the process-wide church-year cache.  It is a
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: each value is stored behind a `Mutex` so that it can be
//! changed from any thread.  Tests that change a setting should restore it
//! when done, most easily through [`ScopedCalendar`].

use std::sync::{Mutex, OnceLock};

/// Abbreviation of the calendar used when none has been configured.
pub const DEFAULT_CALENDAR: &str = "ACNA_BCP2019";

/// Process-wide settings used by the churchcal-rs library.
pub struct Settings {
    calendar: Mutex<Option<String>>,
    cache_enabled: Mutex<bool>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            calendar: Mutex::new(None),
            cache_enabled: Mutex::new(true),
        })
    }

    /// Return the configured calendar abbreviation, or
    /// [`DEFAULT_CALENDAR`] if none has been set.
    pub fn calendar(&self) -> String {
        self.calendar
            .lock()
            .expect("Settings mutex poisoned")
            .clone()
            .unwrap_or_else(|| DEFAULT_CALENDAR.to_string())
    }

    /// Set the calendar abbreviation.
    pub fn set_calendar(&self, abbreviation: impl Into<String>) {
        *self.calendar.lock().expect("Settings mutex poisoned") = Some(abbreviation.into());
    }

    /// Return `true` if built church years are shared through the
    /// process-wide cache.
    pub fn cache_enabled(&self) -> bool {
        *self.cache_enabled.lock().expect("Settings mutex poisoned")
    }

    /// Turn the process-wide church-year cache on or off.
    pub fn set_cache_enabled(&self, enabled: bool) {
        *self.cache_enabled.lock().expect("Settings mutex poisoned") = enabled;
    }

    /// Restore every setting to its default.
    pub fn reset(&self) {
        *self.calendar.lock().expect("Settings mutex poisoned") = None;
        *self.cache_enabled.lock().expect("Settings mutex poisoned") = true;
    }
}

/// Sets the calendar abbreviation for the lifetime of the guard and
/// restores the previous value on drop.
pub struct ScopedCalendar {
    previous: Option<String>,
}

impl ScopedCalendar {
    /// Switch the global calendar to `abbreviation` until the guard drops.
    pub fn new(abbreviation: impl Into<String>) -> Self {
        let settings = Settings::instance();
        let previous = settings
            .calendar
            .lock()
            .expect("Settings mutex poisoned")
            .replace(abbreviation.into());
        Self { previous }
    }
}

impl Drop for ScopedCalendar {
    fn drop(&mut self) {
        *Settings::instance()
            .calendar
            .lock()
            .expect("Settings mutex poisoned") = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_calendar_restores_previous_value() {
        let before = Settings::instance().calendar();
        {
            let _guard = ScopedCalendar::new("TEST_CALENDAR");
            assert_eq!(Settings::instance().calendar(), "TEST_CALENDAR");
        }
        assert_eq!(Settings::instance().calendar(), before);
    }
}
