use std::sync::Arc;

use chrono::NaiveDate;
use twdata::{Exchange, ExchangeConnector, Twdata};
use twdata_core::Fetcher;
use twdata_mock::{DynamicFetcher, DynamicFetcherController, FixtureFetcher};
use twdata_tpex::TpexConnector;
use twdata_twse::TwseConnector;

pub use twdata_mock::fixture_date;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Both exchanges over the shared fixture fetcher, TWSE registered first.
pub fn fixture_twdata() -> (Twdata, Arc<FixtureFetcher>) {
    let fetcher = Arc::new(FixtureFetcher::new());
    let shared: Arc<dyn Fetcher> = fetcher.clone();
    let twdata = Twdata::builder()
        .with_connector(Arc::new(TwseConnector::new(shared.clone())))
        .with_connector(Arc::new(TpexConnector::new(shared)))
        .build()
        .unwrap();
    (twdata, fetcher)
}

/// A TWSE connector whose endpoints are scripted by the returned controller.
pub fn scripted_twse() -> (Arc<dyn ExchangeConnector>, DynamicFetcherController) {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    (Arc::new(TwseConnector::new(fetcher)), controller)
}

/// A TPEx connector whose endpoints are scripted by the returned controller.
pub fn scripted_tpex() -> (Arc<dyn ExchangeConnector>, DynamicFetcherController) {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    (Arc::new(TpexConnector::new(fetcher)), controller)
}

pub fn fixture_tpex() -> Arc<dyn ExchangeConnector> {
    Arc::new(TpexConnector::new(Arc::new(FixtureFetcher::new())))
}

/// Connector that declares an exchange but serves no capability.
pub struct Bare(pub Exchange);

impl ExchangeConnector for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn exchange(&self) -> Exchange {
        self.0
    }
}
