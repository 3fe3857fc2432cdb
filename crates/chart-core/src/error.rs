// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart composition and row loading.

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

/// Failures reported to the caller. Malformed numbers never land here: they
/// become gaps or omitted shapes in the scene graph instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series descriptor #{index} is invalid: {reason}")]
    InvalidDescriptor { index: usize, reason: String },

    #[error("invalid chart dimensions: {0}")]
    InvalidDimensions(String),

    #[error("row {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn descriptor(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor { index, reason: reason.into() }
    }
}
