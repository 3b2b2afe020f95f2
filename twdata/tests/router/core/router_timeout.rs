use std::time::Duration;

use twdata::{DailyQuery, Exchange, Twdata, TwdataError};
use twdata_mock::MockBehavior;

use crate::helpers::{fixture_date, fixture_tpex, scripted_twse};

#[tokio::test(start_paused = true)]
async fn stalled_connector_times_out() {
    let (twse, controller) = scripted_twse();
    controller.set_behavior("MI_INDEX", MockBehavior::Hang).await;
    let twdata = Twdata::builder()
        .with_connector(twse)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = twdata
        .stock_quotes(Exchange::Twse, &DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert_eq!(err, TwdataError::provider_timeout("twdata-twse", "quotes"));
}

#[tokio::test(start_paused = true)]
async fn stalled_connector_becomes_a_fan_out_warning() {
    let (twse, controller) = scripted_twse();
    controller.set_behavior("MI_INDEX", MockBehavior::Hang).await;
    let twdata = Twdata::builder()
        .with_connector(twse)
        .with_connector(fixture_tpex())
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = twdata
        .stock_quotes_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap();
    assert_eq!(report.data.len(), 2);
    assert_eq!(
        report.warnings,
        vec![TwdataError::provider_timeout("twdata-twse", "quotes")]
    );
}
