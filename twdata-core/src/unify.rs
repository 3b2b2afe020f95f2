//! Schema Unifier: merges summary rows with optional per-row detail look-ups.
//!
//! Detail look-ups of one batch run concurrently (bounded), all of them are
//! awaited, and the output keeps summary order. A failed look-up is logged
//! and the row is returned in its summary-only form; it never fails the
//! batch.

use std::future::Future;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use twdata_types::TwdataError;

/// Identifies the detail record of one summary row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetailKey {
    /// Security code.
    pub symbol: String,
    /// Reference date the detail endpoint is keyed by.
    pub date: NaiveDate,
}

impl DetailKey {
    /// Build a key.
    #[must_use]
    pub fn new(symbol: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            date,
        }
    }
}

/// A decoded summary row and the key of its detail record, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<T> {
    /// Summary-only record.
    pub record: T,
    /// `None` when the row carries no usable detail reference.
    pub detail_key: Option<DetailKey>,
}

impl<T> Summary<T> {
    /// Pair a record with its detail key.
    pub const fn new(record: T, detail_key: Option<DetailKey>) -> Self {
        Self { record, detail_key }
    }
}

/// Records that can absorb a detail record.
///
/// Precedence: every field the detail type carries replaces the summary
/// field, including when the detail value is `None`. Fields the detail type
/// does not carry, and the record's key fields, are left untouched.
pub trait MergeDetail {
    /// Detail record type.
    type Detail;

    /// Overlay `detail` onto `self`.
    fn merge_detail(&mut self, detail: Self::Detail);
}

/// Merge detail into each summary row.
///
/// With `include_detail == false` the summaries are returned unchanged and
/// `fetch` is never called. Otherwise `fetch` runs once per keyed row with at
/// most `concurrency` look-ups in flight (values below 1 mean 1):
/// - `Ok(Some(d))` merges `d` into the row,
/// - `Ok(None)` keeps the row as is,
/// - `Err(_)` is logged at `warn` and keeps the row as is.
pub async fn merge_details<T, F, Fut>(
    summaries: Vec<Summary<T>>,
    include_detail: bool,
    concurrency: usize,
    fetch: F,
) -> Vec<T>
where
    T: MergeDetail,
    F: Fn(DetailKey) -> Fut,
    Fut: Future<Output = Result<Option<T::Detail>, TwdataError>>,
{
    if !include_detail {
        return summaries.into_iter().map(|s| s.record).collect();
    }

    let fetch = &fetch;
    stream::iter(summaries)
        .map(|Summary { mut record, detail_key }| async move {
            let Some(key) = detail_key else {
                tracing::warn!(target: "twdata::unify", "row has no detail reference; keeping summary");
                return record;
            };
            match fetch(key.clone()).await {
                Ok(Some(detail)) => record.merge_detail(detail),
                Ok(None) => tracing::debug!(
                    target: "twdata::unify",
                    symbol = %key.symbol,
                    date = %key.date,
                    "no detail available"
                ),
                Err(e) => tracing::warn!(
                    target: "twdata::unify",
                    symbol = %key.symbol,
                    date = %key.date,
                    error = %e,
                    "detail look-up failed; keeping summary"
                ),
            }
            record
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
