use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use twdata_core::ExchangeConnector;
use twdata_types::{Capability, Exchange, TwdataConfig, TwdataError};

/// Orchestrator that routes requests to the connector of each exchange.
pub struct Twdata {
    pub(crate) connectors: Vec<Arc<dyn ExchangeConnector>>,
    pub(crate) cfg: TwdataConfig,
}

/// Builder for constructing a [`Twdata`] orchestrator.
pub struct TwdataBuilder {
    connectors: Vec<Arc<dyn ExchangeConnector>>,
    cfg: TwdataConfig,
}

impl Default for TwdataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TwdataBuilder {
    /// Create a builder with no connectors and no provider timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: TwdataConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Registration order is the order in which fan-out results are
    /// concatenated. At most one connector per exchange is accepted by
    /// [`build`](Self::build).
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ExchangeConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Bound every connector call; an expired call fails with
    /// `ProviderTimeout`.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: TwdataConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// `InvalidArg` when no connector was registered or two connectors serve
    /// the same exchange.
    pub fn build(self) -> Result<Twdata, TwdataError> {
        if self.connectors.is_empty() {
            return Err(TwdataError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let mut seen: HashSet<Exchange> = HashSet::new();
        for c in &self.connectors {
            if !seen.insert(c.exchange()) {
                return Err(TwdataError::InvalidArg(format!(
                    "more than one connector registered for {}",
                    c.exchange()
                )));
            }
        }
        Ok(Twdata {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an error to the connector that produced it.
///
/// Errors that already name their origin or describe the request itself
/// pass through; anything else is wrapped as `Connector`.
#[must_use]
pub fn tag_err(connector: &str, e: TwdataError) -> TwdataError {
    match e {
        e @ (TwdataError::NotFound { .. }
        | TwdataError::ProviderTimeout { .. }
        | TwdataError::Connector { .. }
        | TwdataError::SchemaMismatch { .. }
        | TwdataError::InvalidArg(_)
        | TwdataError::Unsupported { .. }
        | TwdataError::AllProvidersFailed(_)) => e,
        other => TwdataError::connector(connector, other.to_string()),
    }
}

impl Twdata {
    /// Start building a new orchestrator.
    #[must_use]
    pub fn builder() -> TwdataBuilder {
        TwdataBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TwdataConfig {
        &self.cfg
    }

    /// Exchanges with a registered connector, in registration order.
    #[must_use]
    pub fn exchanges(&self) -> Vec<Exchange> {
        self.connectors.iter().map(|c| c.exchange()).collect()
    }

    pub(crate) fn connector_for(
        &self,
        exchange: Exchange,
        capability: Capability,
    ) -> Result<&Arc<dyn ExchangeConnector>, TwdataError> {
        self.connectors
            .iter()
            .find(|c| c.exchange() == exchange)
            .ok_or_else(|| Self::unsupported(capability, exchange))
    }

    pub(crate) fn unsupported(capability: Capability, exchange: Exchange) -> TwdataError {
        TwdataError::unsupported(format!("{capability}/{exchange}"))
    }

    /// Run a connector future under the optional provider timeout.
    #[tracing::instrument(
        target = "twdata::core",
        skip(fut),
        fields(
            connector = connector_name,
            capability = %capability,
            timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
        ),
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, TwdataError>
    where
        Fut: core::future::Future<Output = Result<T, TwdataError>>,
    {
        let Some(timeout) = timeout else {
            return fut.await;
        };
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            tracing::warn!(target: "twdata::core", connector = connector_name, %capability, "provider call timed out");
            Err(TwdataError::provider_timeout(connector_name, capability.as_str()))
        })
    }
}
