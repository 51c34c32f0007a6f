//! Listing annotation: the public entry points of the arrow engine.
//!
//! `layout_function` runs the per-function pipeline (edges, tracks,
//! rendering). `decorate` and `annotate_listing` apply it to a whole listing
//! and stitch the decorations back onto the original lines, one output line
//! per input line, in input order.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{allocate_tracks, extract_edges, TrackAssignment};
use crate::config::ArrowConfig;
use crate::core::{Edge, EdgeDirection, InstructionLine};
use crate::listing::{classify, parse_listing, Block, FunctionBlock, LineRecord};
use crate::render::render_rows;

/// Complete arrow layout of one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionLayout {
    pub label: Option<String>,
    pub instructions: usize,
    /// Edges in presentation order
    pub edges: Vec<Edge>,
    pub assignments: Vec<TrackAssignment>,
    /// Column count including the reserved column 0
    pub depth: usize,
    /// One decoration per instruction, all `depth` characters wide
    pub decorations: Vec<String>,
}

/// Compact per-function statistics for tooling output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub label: Option<String>,
    pub instructions: usize,
    pub forward: usize,
    pub backward: usize,
    pub self_loops: usize,
    pub depth: usize,
}

impl FunctionLayout {
    pub fn summary(&self) -> LayoutSummary {
        let count = |d: EdgeDirection| self.edges.iter().filter(|e| e.direction == d).count();
        LayoutSummary {
            label: self.label.clone(),
            instructions: self.instructions,
            forward: count(EdgeDirection::Forward),
            backward: count(EdgeDirection::Backward),
            self_loops: count(EdgeDirection::SelfLoop),
            depth: self.depth,
        }
    }

    /// Column assigned to `edge`, if it was routed.
    pub fn column_of(&self, edge: &Edge) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.edge == *edge)
            .map(|a| a.column)
    }
}

/// Lay out the arrows of a single function's instruction list.
pub fn layout_function(lines: &[InstructionLine], config: &ArrowConfig) -> FunctionLayout {
    let edges = extract_edges(lines, config);
    let (grid, assignments) = allocate_tracks(&edges, lines.len());
    let decorations = render_rows(&grid, &config.glyphs);
    FunctionLayout {
        label: None,
        instructions: lines.len(),
        edges,
        assignments,
        depth: grid.depth(),
        decorations,
    }
}

/// Lay out a classified function block, keeping its label.
pub fn layout_block(block: &FunctionBlock, config: &ArrowConfig) -> FunctionLayout {
    let mut layout = layout_function(&block.lines, config);
    layout.label = block.label.clone();
    debug!(
        label = block.label.as_deref().unwrap_or("?"),
        address = block.address,
        instructions = layout.instructions,
        edges = layout.edges.len(),
        depth = layout.depth,
        "laid out function"
    );
    layout
}

/// An input record with the decoration to print left of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedLine<'a> {
    /// Empty for headers and pass-through lines
    pub decoration: String,
    pub record: &'a LineRecord,
}

impl fmt::Display for DecoratedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.decoration, self.record.raw)
    }
}

/// Decorate every record and return the per-function layouts alongside.
pub fn decorate_with_layouts<'a>(
    records: &'a [LineRecord],
    config: &ArrowConfig,
) -> (Vec<DecoratedLine<'a>>, Vec<FunctionLayout>) {
    let blocks = classify(records);
    let functions: Vec<&FunctionBlock> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Function(f) => Some(f),
            Block::PassThrough(_) => None,
        })
        .collect();

    let layouts: Vec<FunctionLayout> = if config.parallel {
        functions.par_iter().map(|f| layout_block(f, config)).collect()
    } else {
        functions.iter().map(|f| layout_block(f, config)).collect()
    };

    let mut decorations = vec![String::new(); records.len()];
    for (function, layout) in functions.iter().zip(&layouts) {
        for (&row, decoration) in function.rows.iter().zip(&layout.decorations) {
            decorations[row] = decoration.clone();
        }
    }

    let lines = records
        .iter()
        .zip(decorations)
        .map(|(record, decoration)| DecoratedLine { decoration, record })
        .collect();
    (lines, layouts)
}

/// Decorate every record; one output per input, in input order.
pub fn decorate<'a>(records: &'a [LineRecord], config: &ArrowConfig) -> Vec<DecoratedLine<'a>> {
    decorate_with_layouts(records, config).0
}

/// Annotate a whole listing held in memory.
///
/// The result has exactly as many lines as the input and keeps a trailing
/// newline if the input had one.
pub fn annotate_listing(text: &str, config: &ArrowConfig) -> String {
    let records = parse_listing(text);
    let mut out = decorate(&records, config)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}
