use std::sync::Arc;

use twdata::{DailyQuery, Exchange, RangeQuery, Twdata, TwdataError};

use crate::helpers::{Bare, d, fixture_date, fixture_tpex};

#[tokio::test]
async fn missing_exchange_is_unsupported() {
    let twdata = Twdata::builder().with_connector(fixture_tpex()).build().unwrap();
    let err = twdata
        .stock_quotes(Exchange::Twse, &DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert_eq!(err, TwdataError::unsupported("quotes/TWSE"));
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let twdata = Twdata::builder()
        .with_connector(Arc::new(Bare(Exchange::Twse)))
        .build()
        .unwrap();
    let q = RangeQuery::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
    let err = twdata.stock_splits(Exchange::Twse, &q).await.unwrap_err();
    assert_eq!(err, TwdataError::unsupported("splits/TWSE"));

    let err = twdata.stock_splits_all(&q).await.unwrap_err();
    assert_eq!(err, TwdataError::unsupported("splits"));
}

#[tokio::test]
async fn fan_out_skips_connectors_without_the_capability() {
    let twdata = Twdata::builder()
        .with_connector(Arc::new(Bare(Exchange::Twse)))
        .with_connector(fixture_tpex())
        .build()
        .unwrap();
    let report = twdata
        .market_trades_all(fixture_date())
        .await
        .unwrap();
    assert_eq!(report.data.len(), 1);
    assert_eq!(report.data[0].exchange, Exchange::Tpex);
    assert!(report.is_clean());
}
