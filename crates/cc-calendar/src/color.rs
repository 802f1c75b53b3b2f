//! Liturgical colors.

/// A liturgical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// White.
    White,
    /// Red.
    Red,
    /// Purple (Advent and Lent).
    Purple,
    /// Blue (an Advent alternative).
    Blue,
    /// Green (the seasons after Epiphany and Pentecost).
    Green,
    /// Rose.
    Rose,
    /// Black.
    Black,
    /// Gold.
    Gold,
}

impl Color {
    /// Lower-case name, e.g. `"purple"`.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Rose => "rose",
            Color::Black => "black",
            Color::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The colors a commemoration may be kept in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Colors {
    /// Principal color; `None` only for a commemoration that takes the
    /// color of the season.
    pub color: Option<Color>,
    /// A second color worn together with the principal one.
    pub additional_color: Option<Color>,
    /// Permitted alternative.
    pub alternate_color: Option<Color>,
    /// Second permitted alternative.
    pub alternate_color_2: Option<Color>,
    /// Free-text rubric about the colors.
    pub color_notes: Option<String>,
}

impl Colors {
    /// A single color with no alternatives.
    pub fn of(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Set the alternate color.
    pub fn with_alternate(mut self, color: Color) -> Self {
        self.alternate_color = Some(color);
        self
    }

    /// Set the rubric text.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.color_notes = Some(notes.into());
        self
    }
}
