//! Control-flow arrows for disassembly listings.
//!
//! `flowlines` reads the textual output of a disassembler, finds the jumps
//! inside each function, routes every jump through its own column, and
//! prints box-drawing arrows left of the instructions:
//!
//! ```text
//! ┌>    1000:	31 c0	xor    %eax,%eax
//! │     1002:	ff c0	inc    %eax
//! └<    1004:	75 fa	jne    1000 <loop>
//! ```
//!
//! The engine is a pure function of the listing text; see
//! [`annotate::annotate_listing`] and [`annotate::layout_function`].

/// Core data types
pub mod core;

pub mod analysis;
pub mod annotate;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod render;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use annotate::{
    annotate_listing, decorate, decorate_with_layouts, layout_function, DecoratedLine,
    FunctionLayout, LayoutSummary,
};
pub use config::{ArrowConfig, GlyphSet, SelfLoopPolicy};
pub use error::{FlowlinesError, Result};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// Python module entry point.
#[cfg(feature = "python-ext")]
#[pymodule]
fn flowlines(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
