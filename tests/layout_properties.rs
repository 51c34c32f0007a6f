//! Layout guarantees checked on synthetic functions.

mod common;

use common::{function_with_jumps, instruction_lines};
use flowlines::analysis::{allocate_tracks, extract_edges};
use flowlines::core::{Edge, EdgeDirection, Glyph};
use flowlines::{layout_function, ArrowConfig, FunctionLayout};

fn assert_no_interior_overlap(layout: &FunctionLayout) {
    for (i, a) in layout.assignments.iter().enumerate() {
        for b in &layout.assignments[i + 1..] {
            if a.column != b.column {
                continue;
            }
            let (alo, ahi) = a.edge.span();
            let (blo, bhi) = b.edge.span();
            assert!(
                ahi < blo || bhi < alo,
                "edges {} and {} share column {}",
                a.edge,
                b.edge,
                a.column
            );
        }
    }
}

#[test]
fn multiple_sources_keep_every_arrow() {
    let lines = function_with_jumps(7, &[(1, 5), (2, 5), (3, 5)]);
    let layout = layout_function(&lines, &ArrowConfig::default());

    assert_eq!(
        layout.edges,
        vec![Edge::new(1, 5), Edge::new(2, 5), Edge::new(3, 5)]
    );
    let mut columns: Vec<usize> = layout.assignments.iter().map(|a| a.column).collect();
    columns.sort_unstable();
    columns.dedup();
    assert_eq!(columns.len(), 3, "each arrow needs its own column");
    // all three corners land on row 5
    assert_eq!(layout.decorations[5], "└└└>");
    assert_no_interior_overlap(&layout);
}

#[test]
fn forward_edge_glyphs() {
    let lines = function_with_jumps(9, &[(2, 7)]);
    let edges = extract_edges(&lines, &ArrowConfig::default());
    assert_eq!(edges, vec![Edge::new(2, 7)]);
    assert_eq!(edges[0].direction, EdgeDirection::Forward);

    let (grid, assignments) = allocate_tracks(&edges, lines.len());
    let column = assignments[0].column;
    assert_eq!(column, 1);
    assert_eq!(grid.get(2, column), Glyph::CornerDown);
    for row in 3..=6 {
        assert_eq!(grid.get(row, column), Glyph::Vertical, "row {row}");
    }
    assert_eq!(grid.get(7, column), Glyph::CornerUp);
}

#[test]
fn function_without_jumps_is_blank() {
    for n in [0, 1, 5, 64] {
        let texts: Vec<&str> = std::iter::repeat("nop").take(n).collect();
        let layout = layout_function(&instruction_lines(&texts), &ArrowConfig::default());
        assert_eq!(layout.decorations.len(), n);
        assert!(layout
            .decorations
            .iter()
            .all(|d| d.chars().all(|c| c == ' ')));
    }
}

#[test]
fn nested_edges_grow_depth() {
    let lines = function_with_jumps(11, &[(0, 10), (2, 8), (4, 6)]);
    let layout = layout_function(&lines, &ArrowConfig::default());
    let columns: Vec<usize> = layout.assignments.iter().map(|a| a.column).collect();
    assert_eq!(columns, vec![1, 2, 3]);
    assert_eq!(layout.depth, 4);
    for decoration in &layout.decorations {
        assert_eq!(decoration.chars().count(), 4);
    }
}

#[test]
fn jump_out_of_function_is_ignored() {
    let lines = instruction_lines(&["nop", "jmp 4000", "jne ff", "ret"]);
    let layout = layout_function(&lines, &ArrowConfig::default());
    assert!(layout.edges.is_empty());
    assert_eq!(layout.depth, 1);
}

#[test]
fn backward_edges_are_allocated_first() {
    // forward 0 -> 4 and backward 5 -> 1 overlap; the loop gets column 1
    let lines = function_with_jumps(6, &[(0, 4), (5, 1)]);
    let layout = layout_function(&lines, &ArrowConfig::default());
    assert_eq!(layout.column_of(&Edge::new(5, 1)), Some(1));
    assert_eq!(layout.column_of(&Edge::new(0, 4)), Some(2));
}

#[test]
fn dense_function_never_overlaps() {
    let jumps: Vec<(usize, usize)> = (0..60).map(|i| (i, (i * 17 + 3) % 60)).collect();
    let lines = function_with_jumps(60, &jumps);
    let layout = layout_function(&lines, &ArrowConfig::default());
    assert_eq!(layout.assignments.len(), layout.edges.len());
    assert_eq!(layout.edges.len(), 60);
    assert_no_interior_overlap(&layout);
    assert!(layout
        .decorations
        .iter()
        .all(|d| d.chars().count() == layout.depth));
}

#[test]
fn loop_target_that_also_jumps_shows_entry_marker() {
    // row 1 is the target of 2 -> 1 and the source of 1 -> 3
    let lines = instruction_lines(&["nop", "jmp 3", "jne 1", "nop"]);
    let layout = layout_function(&lines, &ArrowConfig::default());
    assert_eq!(layout.decorations, vec!["   ", "┌┌>", "│└<", "└ >"]);
}
