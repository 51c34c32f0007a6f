//! Per-function control-flow analysis for arrow layout.
//!
//! `edges` discovers jump edges between instruction lines; `tracks` routes
//! each edge through a column of the glyph grid without collisions.

pub mod edges;
pub mod tracks;

pub use edges::{extract_edges, jump_target};
pub use tracks::{allocate_tracks, TrackAssignment, TrackGrid};
