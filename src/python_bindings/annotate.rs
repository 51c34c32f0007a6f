//! Python bindings for listing annotation.

use pyo3::prelude::*;

use crate::annotate;
use crate::config::ArrowConfig;
use crate::error::FlowlinesError;
use crate::listing::LineRecord;

fn config_for(ascii: bool, config_json: Option<&str>) -> PyResult<ArrowConfig> {
    let mut cfg = match config_json {
        Some(text) => ArrowConfig::from_json_str(text)?,
        None => ArrowConfig::default(),
    };
    if ascii {
        cfg.glyphs = crate::config::GlyphSet::ascii();
    }
    Ok(cfg)
}

/// Annotate objdump text with jump arrows.
#[pyfunction]
#[pyo3(name = "annotate_listing")]
#[pyo3(signature = (text, ascii=false, config_json=None))]
pub fn annotate_listing_py(text: &str, ascii: bool, config_json: Option<&str>) -> PyResult<String> {
    let cfg = config_for(ascii, config_json)?;
    Ok(annotate::annotate_listing(text, &cfg))
}

/// Decorations for pre-split records; one string per record.
#[pyfunction]
#[pyo3(name = "decorate_records")]
#[pyo3(signature = (records, ascii=false, config_json=None))]
pub fn decorate_records_py(
    records: Vec<Vec<String>>,
    ascii: bool,
    config_json: Option<&str>,
) -> PyResult<Vec<String>> {
    let cfg = config_for(ascii, config_json)?;
    let records: Vec<LineRecord> = records.into_iter().map(LineRecord::from_fields).collect();
    Ok(annotate::decorate(&records, &cfg)
        .into_iter()
        .map(|d| d.decoration)
        .collect())
}

/// Per-function layout summaries as a JSON string.
#[pyfunction]
#[pyo3(name = "layout_summaries_json")]
pub fn layout_summaries_json_py(text: &str) -> PyResult<String> {
    let records = crate::listing::parse_listing(text);
    let (_, layouts) = annotate::decorate_with_layouts(&records, &ArrowConfig::default());
    let summaries: Vec<_> = layouts.iter().map(|l| l.summary()).collect();
    serde_json::to_string(&summaries)
        .map_err(|e| FlowlinesError::from(e).into())
}

/// Register annotation-related Python bindings.
pub fn register_annotate_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(annotate_listing_py, m)?)?;
    m.add_function(wrap_pyfunction!(decorate_records_py, m)?)?;
    m.add_function(wrap_pyfunction!(layout_summaries_json_py, m)?)?;
    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}
