//! Commemoration ranks.
//!
//! A [`Rank`] fixes where a commemoration sits in the order of precedence
//! and whether it displaces other observances (`required`) or merely
//! accumulates alongside them as an option.

/// Liturgical precedence tier of a commemoration.
///
/// The derived ordering follows precedence: `Rank::PrincipalFeast <
/// Rank::Feria`, so sorting ascending puts the highest-ranking
/// commemoration first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Easter, Pentecost, Christmas and the other principal feasts.
    PrincipalFeast,
    /// Ash Wednesday and the days of Holy Week.
    PrivilegedObservance,
    /// A Sunday of the temporale.
    Sunday,
    /// A major feast of an apostle, evangelist, or of Our Lord.
    HolyDay,
    /// A Sunday kept alongside a higher feast that fell on the same day.
    AlternateSunday,
    /// A lesser feast that is kept as a required observance.
    PrivilegedLesserFeast,
    /// One of the quarterly Ember Days.
    EmberDay,
    /// One of the three days before Ascension Day.
    RogationDay,
    /// An optional commemoration of a saint.
    LesserFeast,
    /// An ordinary weekday of the season.
    Feria,
}

impl Rank {
    /// All ranks in precedence order.
    pub const ALL: [Rank; 10] = [
        Rank::PrincipalFeast,
        Rank::PrivilegedObservance,
        Rank::Sunday,
        Rank::HolyDay,
        Rank::AlternateSunday,
        Rank::PrivilegedLesserFeast,
        Rank::EmberDay,
        Rank::RogationDay,
        Rank::LesserFeast,
        Rank::Feria,
    ];

    /// Numeric precedence; lower wins.
    pub fn precedence_rank(self) -> u8 {
        self as u8 + 1
    }

    /// Whether commemorations of this rank displace optional ones.
    pub fn required(self) -> bool {
        self.precedence_rank() <= Rank::PrivilegedLesserFeast.precedence_rank()
    }

    /// Upper-case identifier, e.g. `"PRINCIPAL_FEAST"`.
    pub fn name(self) -> &'static str {
        match self {
            Rank::PrincipalFeast => "PRINCIPAL_FEAST",
            Rank::PrivilegedObservance => "PRIVILEGED_OBSERVANCE",
            Rank::Sunday => "SUNDAY",
            Rank::HolyDay => "HOLY_DAY",
            Rank::AlternateSunday => "ALTERNATE_SUNDAY",
            Rank::PrivilegedLesserFeast => "PRIVILEGED_LESSER_FEAST",
            Rank::EmberDay => "EMBER_DAY",
            Rank::RogationDay => "ROGATION_DAY",
            Rank::LesserFeast => "LESSER_FEAST",
            Rank::Feria => "FERIA",
        }
    }

    /// Display form, e.g. `"Principal Feast"`.  A ferial commemoration is
    /// named with this until the collect pass renames it.
    pub fn formatted_name(self) -> &'static str {
        match self {
            Rank::PrincipalFeast => "Principal Feast",
            Rank::PrivilegedObservance => "Privileged Observance",
            Rank::Sunday => "Sunday",
            Rank::HolyDay => "Holy Day",
            Rank::AlternateSunday => "Alternate Sunday",
            Rank::PrivilegedLesserFeast => "Privileged Lesser Feast",
            Rank::EmberDay => "Ember Day",
            Rank::RogationDay => "Rogation Day",
            Rank::LesserFeast => "Lesser Feast",
            Rank::Feria => "Feria",
        }
    }

    /// `true` for every rank whose identifier contains `SUNDAY`.
    pub fn is_sunday_like(self) -> bool {
        matches!(self, Rank::Sunday | Rank::AlternateSunday)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.formatted_name())
    }
}
