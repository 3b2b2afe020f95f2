use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every twdata crate.
///
/// Per-row and per-field problems never surface here: unparseable cells
/// degrade to `None` and failed detail look-ups are logged and skipped. What
/// remains are structural failures of an upstream response, capability
/// mismatches, argument validation and fetch-collaborator failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TwdataError {
    /// No registered connector serves this capability (or exchange).
    #[error("not supported: {capability}")]
    Unsupported {
        /// What was asked for, e.g. `quotes/TPEx`.
        capability: String,
    },

    /// The outer response envelope could not be read at all.
    #[error("data issue: {0}")]
    Data(String),

    /// A query was rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The fetch collaborator behind a connector returned an error.
    #[error("{connector}: {msg}")]
    Connector {
        /// Key of the connector the fetch was made for.
        connector: String,
        /// Message from the fetcher.
        msg: String,
    },

    /// Anything without a better home.
    #[error("unknown error: {0}")]
    Other(String),

    /// A fixture, page or record that should exist does not.
    #[error("not found: {what}")]
    NotFound {
        /// What was missing, e.g. `detail for 2330`.
        what: String,
    },

    /// A row or table did not match any known upstream layout.
    #[error("schema mismatch at {endpoint}: {reason}")]
    SchemaMismatch {
        /// Upstream endpoint whose payload was rejected (e.g. `T86`).
        endpoint: String,
        /// Decoder diagnostic describing the unrecognized shape.
        reason: String,
    },

    /// Every connector asked in a fan-out failed.
    #[error("every connector failed: {0:?}")]
    AllProvidersFailed(Vec<TwdataError>),

    /// A connector call ran past `TwdataConfig::provider_timeout`.
    #[error("{connector} timed out serving {capability}")]
    ProviderTimeout {
        /// Key of the connector.
        connector: String,
        /// Capability label, e.g. `quotes`.
        capability: String,
    },
}

impl TwdataError {
    /// `Unsupported` for `capability`.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// `Connector` attributed to `connector`.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` describing `what`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `SchemaMismatch` tagged with the upstream endpoint.
    pub fn schema_mismatch(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// `ProviderTimeout` for `connector` serving `capability`.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Whether a caller can do something about this error.
    ///
    /// A missing capability or record is not actionable; an aggregate is
    /// actionable when any of its members is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(members) => members.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// The leaf errors of a possibly nested aggregate, in order.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(members) => {
                members.into_iter().flat_map(Self::flatten).collect()
            }
            leaf => vec![leaf],
        }
    }
}
