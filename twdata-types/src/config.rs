//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bound on concurrent detail look-ups within one batch fetch.
const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

/// Per-connector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub base_url: String,
    /// Maximum number of detail look-ups in flight for a single batch.
    ///
    /// Detail look-ups of one batch settle independently; this only bounds how
    /// many run at the same time. Values below 1 are treated as 1.
    pub detail_concurrency: usize,
}

impl ConnectorConfig {
    /// Build a configuration for the given base URL with default concurrency.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }

    /// Override the detail look-up concurrency bound.
    #[must_use]
    pub const fn with_detail_concurrency(mut self, n: usize) -> Self {
        self.detail_concurrency = n;
        self
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Global configuration for the `Twdata` orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwdataConfig {
    /// Optional upper bound on a single connector call.
    ///
    /// `None` leaves timing entirely to the fetch collaborator.
    pub provider_timeout: Option<Duration>,
}
