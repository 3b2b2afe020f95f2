//! Row Decoder.
//!
//! Upstream rows are unlabeled positional arrays. [`Cells`] gives bounds-checked
//! typed access to them, [`layout`] holds the institutional-flow variants that
//! are selected by row width, and [`envelope`] models the outer JSON shapes.

mod cells;
pub mod envelope;
mod error;
pub mod layout;

pub use cells::Cells;
pub use envelope::{Rows, Table, TpexEnvelope, TwseEnvelope, parse_envelope};
pub use error::DecodeError;
pub use layout::{FlowLayout, LayoutTable, Slot, TPEX_INSTITUTIONAL, TWSE_INSTITUTIONAL};

use twdata_types::TwdataError;

/// Decode every row of a table with `f`.
///
/// A row whose required date cannot be recognized is logged and skipped so
/// that no record leaves with a ROC-form or missing key date. Any other
/// [`DecodeError`] means the page does not have the expected shape and fails
/// the whole decode as a `SchemaMismatch` tagged with `endpoint`.
///
/// # Errors
/// `SchemaMismatch` on the first row with an unrecognized shape.
pub fn decode_rows<T>(
    endpoint: &str,
    rows: &[Vec<String>],
    mut f: impl FnMut(Cells<'_>) -> Result<T, DecodeError>,
) -> Result<Vec<T>, TwdataError> {
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match f(Cells::new(row)) {
            Ok(record) => out.push(record),
            Err(DecodeError::InvalidDate { index, raw }) => {
                tracing::warn!(
                    target: "twdata::decode",
                    endpoint,
                    row = i,
                    cell = index,
                    raw = %raw,
                    "skipping row with unrecognizable date"
                );
            }
            Err(e) => return Err(e.into_error(endpoint)),
        }
    }
    Ok(out)
}
