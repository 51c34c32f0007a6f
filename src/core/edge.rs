//! Edge type for intra-function jump relations.
//!
//! An Edge links a jump instruction to the instruction its operand resolves
//! to, both identified by their index in the function's instruction list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::glyph::Glyph;

/// Listing-order direction of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Target occurs after the source
    Forward,
    /// Target occurs before the source
    Backward,
    /// Jump to itself
    #[serde(rename = "self")]
    SelfLoop,
}

impl EdgeDirection {
    pub fn value(&self) -> &str {
        match self {
            EdgeDirection::Forward => "forward",
            EdgeDirection::Backward => "backward",
            EdgeDirection::SelfLoop => "self",
        }
    }

    /// Corner drawn on the jump instruction's row.
    pub fn source_corner(self) -> Glyph {
        match self {
            EdgeDirection::Forward => Glyph::CornerDown,
            _ => Glyph::CornerUp,
        }
    }

    /// Corner drawn on the jump target's row.
    pub fn target_corner(self) -> Glyph {
        match self {
            EdgeDirection::Backward => Glyph::CornerDown,
            _ => Glyph::CornerUp,
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A jump from `source_index` to `target_index` within one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source_index: usize,
    pub target_index: usize,
    pub direction: EdgeDirection,
}

impl Edge {
    pub fn new(source_index: usize, target_index: usize) -> Self {
        let direction = match target_index.cmp(&source_index) {
            std::cmp::Ordering::Greater => EdgeDirection::Forward,
            std::cmp::Ordering::Less => EdgeDirection::Backward,
            std::cmp::Ordering::Equal => EdgeDirection::SelfLoop,
        };
        Self {
            source_index,
            target_index,
            direction,
        }
    }

    /// Inclusive row span `(lo, hi)` covered by the edge.
    pub fn span(&self) -> (usize, usize) {
        (
            self.source_index.min(self.target_index),
            self.source_index.max(self.target_index),
        )
    }

    pub fn is_self_loop(&self) -> bool {
        self.direction == EdgeDirection::SelfLoop
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source_index, self.target_index, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_indices() {
        assert_eq!(Edge::new(2, 7).direction, EdgeDirection::Forward);
        assert_eq!(Edge::new(7, 2).direction, EdgeDirection::Backward);
        assert_eq!(Edge::new(4, 4).direction, EdgeDirection::SelfLoop);
        assert!(Edge::new(4, 4).is_self_loop());
    }

    #[test]
    fn span_is_ordered() {
        assert_eq!(Edge::new(2, 7).span(), (2, 7));
        assert_eq!(Edge::new(7, 2).span(), (2, 7));
        assert_eq!(Edge::new(3, 3).span(), (3, 3));
    }

    #[test]
    fn corner_rules() {
        // forward: opens down at the jump, closes upward at the target
        assert_eq!(EdgeDirection::Forward.source_corner(), Glyph::CornerDown);
        assert_eq!(EdgeDirection::Forward.target_corner(), Glyph::CornerUp);
        // backward: target above, line runs down to the jump below
        assert_eq!(EdgeDirection::Backward.source_corner(), Glyph::CornerUp);
        assert_eq!(EdgeDirection::Backward.target_corner(), Glyph::CornerDown);
        assert_eq!(EdgeDirection::SelfLoop.source_corner(), Glyph::CornerUp);
        assert_eq!(EdgeDirection::SelfLoop.target_corner(), Glyph::CornerUp);
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&EdgeDirection::SelfLoop).unwrap();
        assert_eq!(json, "\"self\"");
        let json = serde_json::to_string(&Edge::new(1, 0)).unwrap();
        assert!(json.contains("\"backward\""));
        assert_eq!(Edge::new(1, 0).to_string(), "1 -> 0 (backward)");
    }
}
