//! The fetch collaborator.
//!
//! Connectors build [`FetchRequest`]s and decode the [`Payload`] a [`Fetcher`]
//! returns. Transport, retries, timeouts and charset handling all belong to
//! the fetcher; connectors only see the final payload or an error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use twdata_types::TwdataError;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Parameters go to the query string.
    Get,
    /// Parameters go to a `application/x-www-form-urlencoded` body.
    Post,
}

/// A request for one upstream endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute endpoint URL without query string.
    pub url: String,
    /// Query or form parameters, in insertion order.
    pub params: Vec<(String, String)>,
}

impl FetchRequest {
    /// GET request without parameters.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// POST request without parameters.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// First value of parameter `key`.
    #[must_use]
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Last path segment of the URL (`T86`, `dailyTrade`, ...).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Body returned by the fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Already-parsed JSON.
    Json(Value),
    /// Raw text (JSON not yet parsed, or HTML).
    Text(String),
}

impl Payload {
    /// Parsed JSON value, parsing text bodies on demand.
    ///
    /// # Errors
    /// `Data` when a text body is not valid JSON.
    pub fn into_json(self, endpoint: &str) -> Result<Value, TwdataError> {
        match self {
            Self::Json(v) => Ok(v),
            Self::Text(s) => serde_json::from_str(&s)
                .map_err(|e| TwdataError::Data(format!("{endpoint}: response is not JSON: {e}"))),
        }
    }

    /// Raw text of an HTML page.
    ///
    /// # Errors
    /// `Data` when the fetcher already parsed the body as JSON.
    pub fn into_text(self, endpoint: &str) -> Result<String, TwdataError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Json(_) => Err(TwdataError::Data(format!(
                "{endpoint}: expected an HTML page, got JSON"
            ))),
        }
    }
}

/// Performs upstream requests on behalf of the connectors.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Execute `req` and return its body.
    async fn fetch(&self, req: &FetchRequest) -> Result<Payload, TwdataError>;
}

impl dyn Fetcher {
    /// Build a `Fetcher` from a synchronous closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn Fetcher>
    where
        F: Send + Sync + 'static + Fn(&FetchRequest) -> Result<Payload, TwdataError>,
    {
        struct FnFetcher<F>(F);

        #[async_trait]
        impl<F> Fetcher for FnFetcher<F>
        where
            F: Send + Sync + 'static + Fn(&FetchRequest) -> Result<Payload, TwdataError>,
        {
            async fn fetch(&self, req: &FetchRequest) -> Result<Payload, TwdataError> {
                (self.0)(req)
            }
        }

        Arc::new(FnFetcher(f))
    }
}
