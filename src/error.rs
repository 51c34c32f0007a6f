//! Error types for the flowlines annotation library.
//!
//! The layout engine itself never fails: malformed listing text degrades to
//! "no arrow drawn". Errors only arise at the edges of the crate, when a
//! listing or a configuration file is read from the outside world.

use thiserror::Error;

/// Main error type for flowlines operations.
#[derive(Debug, Error)]
pub enum FlowlinesError {
    /// Configuration could not be parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for flowlines operations
pub type Result<T> = std::result::Result<T, FlowlinesError>;

/// Convert flowlines errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<FlowlinesError> for pyo3::PyErr {
    fn from(err: FlowlinesError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyValueError};

        match err {
            FlowlinesError::Io(e) => PyIOError::new_err(e.to_string()),
            FlowlinesError::Config(msg) => PyValueError::new_err(msg),
            FlowlinesError::Serialization(e) => PyValueError::new_err(e.to_string()),
        }
    }
}
