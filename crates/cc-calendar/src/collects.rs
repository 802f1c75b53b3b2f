//! Collect texts and the slots a commemoration carries them in.

use std::sync::Arc;

/// The text of one collect.  Cloning shares the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collect(Arc<str>);

impl Collect {
    /// Wrap a collect text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Collect(text.into())
    }

    /// The collect text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Collect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Collect {
    fn from(text: &str) -> Self {
        Collect::new(text)
    }
}

/// The three collect slots a commemoration can provide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collects {
    /// The collect of the day.
    pub collect_1: Option<Collect>,
    /// A second collect, said at Evening Prayer in place of the first.
    pub collect_2: Option<Collect>,
    /// Collect for the eve, said at Evening Prayer the day before.
    pub collect_eve: Option<Collect>,
}

impl Collects {
    /// A single collect of the day.
    pub fn one(text: &str) -> Self {
        Self {
            collect_1: Some(Collect::from(text)),
            ..Self::default()
        }
    }

    /// Add an evening collect.
    pub fn with_second(mut self, text: &str) -> Self {
        self.collect_2 = Some(Collect::from(text));
        self
    }

    /// Add a collect for the eve.
    pub fn with_eve(mut self, text: &str) -> Self {
        self.collect_eve = Some(Collect::from(text));
        self
    }
}

/// Collects resolved for the two offices of a particular day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrayerCollects {
    /// Collect at Morning Prayer.
    pub morning: Option<Collect>,
    /// Collect at Evening Prayer.
    pub evening: Option<Collect>,
}

impl PrayerCollects {
    /// The same collect at both offices.
    pub fn both(collect: Option<Collect>) -> Self {
        Self {
            morning: collect.clone(),
            evening: collect,
        }
    }
}
