use twdata::{DailyQuery, Exchange, Twdata, TwdataError};
use twdata_mock::MockBehavior;

use crate::helpers::{fixture_date, fixture_tpex, fixture_twdata, scripted_tpex, scripted_twse};

#[tokio::test]
async fn rows_follow_registration_order() {
    let (twdata, _) = fixture_twdata();
    let report = twdata
        .stock_quotes_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap();
    assert!(report.is_clean());
    let symbols: Vec<&str> = report.data.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["2330", "2317", "0050", "6488", "8069"]);
}

#[tokio::test]
async fn symbol_filter_applies_to_every_exchange() {
    let (twdata, _) = fixture_twdata();
    let report = twdata
        .stock_margin_all(&DailyQuery::new(fixture_date()).with_symbol("6488"))
        .await
        .unwrap();
    assert_eq!(report.data.len(), 1);
    assert_eq!(report.data[0].exchange, Exchange::Tpex);
}

#[tokio::test]
async fn one_failure_is_a_warning() {
    let (twse, controller) = scripted_twse();
    controller
        .set_behavior("T86", MockBehavior::Fail(TwdataError::Other("reset by peer".into())))
        .await;
    let twdata = Twdata::builder()
        .with_connector(twse)
        .with_connector(fixture_tpex())
        .build()
        .unwrap();

    let report = twdata
        .stock_institutional_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap();
    assert_eq!(report.data.len(), 1);
    assert_eq!(
        report.warnings,
        vec![TwdataError::connector("twdata-twse", "reset by peer")]
    );
    assert!(!report.is_clean());
}

#[tokio::test]
async fn every_failure_is_an_error() {
    let (twse, twse_ctl) = scripted_twse();
    let (tpex, tpex_ctl) = scripted_tpex();
    twse_ctl
        .set_behavior("TWT93U", MockBehavior::Fail(TwdataError::Other("a".into())))
        .await;
    tpex_ctl
        .set_behavior("sbl", MockBehavior::Fail(TwdataError::Other("b".into())))
        .await;
    let twdata = Twdata::builder()
        .with_connector(twse)
        .with_connector(tpex)
        .build()
        .unwrap();

    let err = twdata
        .stock_short_sales_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TwdataError::AllProvidersFailed(vec![
            TwdataError::connector("twdata-twse", "a"),
            TwdataError::connector("twdata-tpex", "b"),
        ])
    );
}

#[tokio::test]
async fn no_data_everywhere_is_an_empty_report() {
    let (twdata, _) = fixture_twdata();
    let report = twdata
        .stock_quotes_all(&DailyQuery::new(crate::helpers::d(2024, 1, 6)))
        .await
        .unwrap();
    assert!(report.data.is_empty());
    assert!(report.is_clean());
}
