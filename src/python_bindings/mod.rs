//! Python bindings for flowlines.
//!
//! The surrounding Python tool calls the annotator as a pure function; the
//! bindings only translate arguments and errors.

pub mod annotate;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    annotate::register_annotate_bindings(py, m)?;
    Ok(())
}
