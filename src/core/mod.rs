//! Core data types for flowlines.
//!
//! These types are shared by every stage of the pipeline: the instruction
//! lines produced by classification, the edges discovered between them, and
//! the glyph tags the track grid is made of.

pub mod edge;
pub mod glyph;
pub mod instruction;

pub use edge::{Edge, EdgeDirection};
pub use glyph::Glyph;
pub use instruction::InstructionLine;
