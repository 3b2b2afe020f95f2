//! twdata-mock
//!
//! Fetchers for tests and demos that never touch the network:
//! - [`FixtureFetcher`] answers every TWSE and TPEx endpoint, and the MOPS
//!   foreign-holdings page, from recorded pages for 2024-01-02, plus the
//!   legacy `T86` layouts of 2017-12-15 and 2012-05-02, and reports "no data"
//!   for any other day.
//! - [`DynamicFetcher`] defers each endpoint to behavior scripted through a
//!   [`DynamicFetcherController`].

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use twdata_core::{FetchRequest, Fetcher, Payload};
use twdata_types::TwdataError;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicFetcher, DynamicFetcherController, MockBehavior};

/// The trading day the fixtures were recorded for.
#[must_use]
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default()
}

/// Fixture-backed fetcher for both portals.
///
/// A detail request for `STK_NO=FAIL` fails with a connector error, which
/// lets tests exercise per-row detail failures.
#[derive(Default)]
pub struct FixtureFetcher {
    log: Mutex<Vec<FetchRequest>>,
}

impl FixtureFetcher {
    /// Name used in forced-failure errors.
    pub const NAME: &'static str = "twdata-mock";

    /// New fetcher with an empty request log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request served so far, in arrival order.
    pub async fn requests(&self) -> Vec<FetchRequest> {
        self.log.lock().await.clone()
    }

    /// Number of requests served for `endpoint` (last URL segment).
    pub async fn count(&self, endpoint: &str) -> usize {
        self.log
            .lock()
            .await
            .iter()
            .filter(|r| r.endpoint() == endpoint)
            .count()
    }
}

#[async_trait]
impl Fetcher for FixtureFetcher {
    async fn fetch(&self, req: &FetchRequest) -> Result<Payload, TwdataError> {
        self.log.lock().await.push(req.clone());
        if req.param_value("STK_NO") == Some("FAIL") {
            return Err(TwdataError::connector(
                Self::NAME,
                format!("forced failure: {}", req.endpoint()),
            ));
        }
        if let Some(page) = fixtures::mops::respond(req) {
            return Ok(Payload::Text(page));
        }
        fixtures::twse::respond(req)
            .or_else(|| fixtures::tpex::respond(req))
            .map(Payload::Json)
            .ok_or_else(|| TwdataError::not_found(format!("fixture for {}", req.url)))
    }
}
