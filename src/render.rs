//! Turning a track grid into per-row decoration strings.
//!
//! Each row is printed deepest column first, so column 0 (the markers) ends
//! up directly left of the instruction text. Every row of a function is
//! padded to the grid's final depth.

use crate::analysis::TrackGrid;
use crate::config::GlyphSet;
use crate::core::Glyph;

/// Decoration for one row of the grid.
pub fn render_row(grid: &TrackGrid, row: usize, glyphs: &GlyphSet) -> String {
    let mut cells = grid.row(row);
    cells.resize(grid.depth(), Glyph::Empty);
    cells.iter().rev().map(|g| g.to_char(glyphs)).collect()
}

/// Decorations for every row of the grid, top to bottom.
pub fn render_rows(grid: &TrackGrid, glyphs: &GlyphSet) -> Vec<String> {
    (0..grid.rows())
        .map(|row| render_row(grid, row, glyphs))
        .collect()
}
