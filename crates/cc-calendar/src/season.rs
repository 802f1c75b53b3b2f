//! Liturgical seasons.

use crate::color::Color;
use crate::rank::Rank;

/// The seasons of the church year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonKind {
    /// From the First Sunday of Advent to Christmas Eve.
    Advent,
    /// The twelve days of Christmas.
    Christmastide,
    /// From the Epiphany to the day before Ash Wednesday.
    Epiphanytide,
    /// From Ash Wednesday to the day before Palm Sunday.
    Lent,
    /// Palm Sunday to Holy Saturday.
    HolyWeek,
    /// Easter Day to the Day of Pentecost.
    Eastertide,
    /// From the day after Pentecost to the day before Advent.
    AfterPentecost,
}

impl SeasonKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SeasonKind::Advent => "Advent",
            SeasonKind::Christmastide => "Christmastide",
            SeasonKind::Epiphanytide => "Epiphanytide",
            SeasonKind::Lent => "Lent",
            SeasonKind::HolyWeek => "Holy Week",
            SeasonKind::Eastertide => "Eastertide",
            SeasonKind::AfterPentecost => "Season After Pentecost",
        }
    }

    /// Seasons in which a Sunday displaced by a higher feast is not kept
    /// as an alternate.
    pub fn suppresses_alternate_sunday(self) -> bool {
        matches!(
            self,
            SeasonKind::Advent | SeasonKind::Lent | SeasonKind::HolyWeek | SeasonKind::Eastertide
        )
    }
}

impl std::fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A season as configured by a calendar: which commemoration opens it, and
/// the colors and rank given to its ferial days.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    /// Which season this is.
    pub kind: SeasonKind,
    /// Name of the commemoration whose day begins the season.
    pub start_commemoration: String,
    /// Default color.
    pub color: Color,
    /// Alternative color, if any.
    pub alternate_color: Option<Color>,
    /// Rank given to ferial days of the season.
    pub rank: Rank,
}

impl Season {
    /// A season opened by `start_commemoration`, kept in `color`.
    pub fn new(kind: SeasonKind, start_commemoration: impl Into<String>, color: Color) -> Self {
        Self {
            kind,
            start_commemoration: start_commemoration.into(),
            color,
            alternate_color: None,
            rank: Rank::Feria,
        }
    }

    /// Set the alternate color.
    pub fn with_alternate_color(mut self, color: Color) -> Self {
        self.alternate_color = Some(color);
        self
    }

    /// Display name of the season.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
