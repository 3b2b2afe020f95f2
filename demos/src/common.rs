use std::sync::Arc;

use chrono::NaiveDate;
use twdata::{Twdata, TwdataError};
use twdata_core::Fetcher;
use twdata_mock::FixtureFetcher;
use twdata_tpex::TpexConnector;
use twdata_twse::TwseConnector;
use tracing_subscriber::fmt::format::FmtSpan;

/// Install a human-friendly subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=info,twdata=debug`. Span enter/exit events are shown
/// when `TWDATA_DEMO_SPANS` is set.
pub fn init_tracing() {
    let spans = if std::env::var_os("TWDATA_DEMO_SPANS").is_some() {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .with_span_events(spans)
        .try_init();
}

/// The trading day the bundled fixtures answer for.
#[must_use]
pub fn demo_day() -> NaiveDate {
    twdata_mock::fixture_date()
}

/// Both exchanges served from recorded pages, TWSE registered first.
///
/// # Errors
/// Propagates builder validation errors.
pub fn fixture_twdata() -> Result<Twdata, TwdataError> {
    let fetcher: Arc<dyn Fetcher> = Arc::new(FixtureFetcher::new());
    Twdata::builder()
        .with_connector(Arc::new(TwseConnector::new(fetcher.clone())))
        .with_connector(Arc::new(TpexConnector::new(fetcher)))
        .build()
}
