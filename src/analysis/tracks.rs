//! Track (column) allocation for jump edges.
//!
//! The grid is stored column-major: `columns[c][row]`. Column 0 is created
//! up front and never holds a track; it carries only the entry/exit markers
//! next to the instruction text. Track columns are appended on demand and
//! never removed, so `depth` only grows while a function is laid out.
//!
//! Endpoint rows also record `Horizontal` cells between column 0 and the
//! edge's corner. They never block allocation and are overwritten by any
//! track glyph; whether they are drawn is up to the glyph set.

use serde::Serialize;
use tracing::debug;

use crate::core::{Edge, Glyph};

/// Column an edge was routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackAssignment {
    pub edge: Edge,
    pub column: usize,
}

/// Per-function glyph grid owned by the allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGrid {
    rows: usize,
    columns: Vec<Vec<Glyph>>,
}

impl TrackGrid {
    /// Empty grid for `rows` instructions, holding only the reserved column.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: vec![vec![Glyph::Empty; rows]],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns including the reserved column 0.
    pub fn depth(&self) -> usize {
        self.columns.len()
    }

    /// Glyph at `(row, column)`; out-of-range cells read as empty.
    pub fn get(&self, row: usize, column: usize) -> Glyph {
        self.columns
            .get(column)
            .and_then(|c| c.get(row))
            .copied()
            .unwrap_or_default()
    }

    /// Glyphs of one row, column 0 first.
    pub fn row(&self, row: usize) -> Vec<Glyph> {
        (0..self.depth()).map(|c| self.get(row, c)).collect()
    }

    fn is_free(&self, column: usize, lo: usize, hi: usize) -> bool {
        self.columns[column][lo..=hi].iter().all(|g| !g.is_track())
    }

    fn push_column(&mut self) -> usize {
        self.columns.push(vec![Glyph::Empty; self.rows]);
        self.columns.len() - 1
    }

    /// Route `edge` through the leftmost column free over its whole span.
    ///
    /// Returns `None` (and draws nothing) if the edge does not fit the grid.
    pub fn allocate(&mut self, edge: &Edge) -> Option<usize> {
        let (lo, hi) = edge.span();
        if hi >= self.rows {
            debug!(%edge, rows = self.rows, "edge outside grid, skipped");
            return None;
        }
        let column = match (1..self.depth()).find(|&c| self.is_free(c, lo, hi)) {
            Some(c) => c,
            None => self.push_column(),
        };
        self.place(edge, column);
        Some(column)
    }

    fn place(&mut self, edge: &Edge, column: usize) {
        let (lo, hi) = edge.span();
        let track = &mut self.columns[column];
        for cell in track.iter_mut().take(hi).skip(lo + 1) {
            *cell = Glyph::Vertical;
        }
        track[edge.source_index] = edge.direction.source_corner();
        track[edge.target_index] = edge.direction.target_corner();

        for lane in &mut self.columns[1..column] {
            for row in [edge.source_index, edge.target_index] {
                if lane[row] == Glyph::Empty {
                    lane[row] = Glyph::Horizontal;
                }
            }
        }

        let markers = &mut self.columns[0];
        if markers[edge.source_index] != Glyph::EntryMarker {
            markers[edge.source_index] = Glyph::ExitMarker;
        }
        markers[edge.target_index] = Glyph::EntryMarker;
    }
}

/// Allocate every edge in presentation order on a fresh grid.
pub fn allocate_tracks(edges: &[Edge], rows: usize) -> (TrackGrid, Vec<TrackAssignment>) {
    let mut grid = TrackGrid::new(rows);
    let assignments = edges
        .iter()
        .filter_map(|edge| {
            grid.allocate(edge).map(|column| TrackAssignment {
                edge: *edge,
                column,
            })
        })
        .collect();
    (grid, assignments)
}
