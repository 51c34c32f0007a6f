//! Glyph tags stored in the track grid.

use serde::{Deserialize, Serialize};

use crate::config::GlyphSet;

/// Content of one `(row, column)` cell of the track grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    #[default]
    Empty,
    /// Connector on a row strictly inside an edge's span
    Vertical,
    /// Corner whose line continues upward
    CornerUp,
    /// Corner whose line continues downward
    CornerDown,
    /// Run from the marker column to a deeper corner on an endpoint row
    Horizontal,
    /// Jump target marker (reserved column only)
    EntryMarker,
    /// Jump source marker (reserved column only)
    ExitMarker,
}

impl Glyph {
    /// True for glyphs that belong to an edge's track and block reuse of the cell.
    pub fn is_track(self) -> bool {
        matches!(self, Glyph::Vertical | Glyph::CornerUp | Glyph::CornerDown)
    }

    pub fn to_char(self, set: &GlyphSet) -> char {
        match self {
            Glyph::Empty => set.blank,
            Glyph::Vertical => set.vertical,
            Glyph::Horizontal => set.horizontal.unwrap_or(set.blank),
            Glyph::CornerUp => set.corner_up,
            Glyph::CornerDown => set.corner_down,
            Glyph::EntryMarker => set.entry_marker,
            Glyph::ExitMarker => set.exit_marker,
        }
    }
}
