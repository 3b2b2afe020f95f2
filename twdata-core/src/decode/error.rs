use thiserror::Error;
use twdata_types::TwdataError;

/// Row-level decoding failure.
///
/// Only shape problems are represented here. A cell that is present but not
/// numeric decodes to `None` and never produces a `DecodeError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The value sequence length matches none of the known layouts.
    #[error("unrecognized row layout: {columns} value columns (known: {known:?})")]
    SchemaMismatch {
        /// Observed number of value columns.
        columns: usize,
        /// Column counts of every known layout.
        known: Vec<usize>,
    },

    /// A positional read went past the end of the row.
    #[error("row has {len} cells, cell {needed} requested")]
    MissingCell {
        /// Zero-based index that was requested.
        needed: usize,
        /// Actual number of cells.
        len: usize,
    },

    /// A required date cell did not match any ROC or Western shape.
    #[error("cell {index} is not a recognizable date: {raw:?}")]
    InvalidDate {
        /// Zero-based index of the offending cell.
        index: usize,
        /// Original cell text.
        raw: String,
    },
}

impl DecodeError {
    /// Promote to the workspace error, tagged with the upstream endpoint.
    #[must_use]
    pub fn into_error(self, endpoint: &str) -> TwdataError {
        TwdataError::schema_mismatch(endpoint, self.to_string())
    }
}
