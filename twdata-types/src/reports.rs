//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::TwdataError;

/// Result of a request fanned out across several connectors.
///
/// Carries the combined `data` of every connector that answered and the
/// failures of those that did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FetchReport<T> {
    /// Combined payload, in connector registration order.
    pub data: T,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<TwdataError>,
}

impl<T> FetchReport<T> {
    /// Transform the payload while keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchReport<U> {
        FetchReport {
            data: f(self.data),
            warnings: self.warnings,
        }
    }

    /// True when no connector reported a failure.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
