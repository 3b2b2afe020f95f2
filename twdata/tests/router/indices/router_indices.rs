use rust_decimal::Decimal;
use twdata::{DailyQuery, Exchange};

use crate::helpers::{d, fixture_date, fixture_twdata};

#[tokio::test]
async fn derived_indices_from_both_exchanges() {
    let (twdata, _) = fixture_twdata();
    let report = twdata
        .index_trades_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap();
    assert!(report.is_clean());
    let count = |ex: Exchange| report.data.iter().filter(|r| r.exchange == ex).count();
    assert_eq!(count(Exchange::Twse), 12);
    assert_eq!(count(Exchange::Tpex), 10);
}

#[tokio::test]
async fn single_index_lookup() {
    let (twdata, _) = fixture_twdata();
    let day = fixture_date();

    let basket = twdata.index_trade(Exchange::Tpex, day, "IX0047").await.unwrap().unwrap();
    assert_eq!(basket.name, "櫃買電子類指數");
    assert_eq!(basket.trade_weight, Some(Decimal::new(6525, 2)));

    let non_finance = twdata.index_trade(Exchange::Twse, day, "IX0007").await.unwrap().unwrap();
    assert_eq!(non_finance.trade_weight, Some(Decimal::new(5417, 2)));

    assert_eq!(twdata.index_trade(Exchange::Tpex, day, "IX0007").await.unwrap(), None);
    assert_eq!(
        twdata.index_trade(Exchange::Twse, d(2024, 1, 6), "IX0010").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn market_totals() {
    let (twdata, _) = fixture_twdata();
    let report = twdata.market_trades_all(fixture_date()).await.unwrap();
    let values: Vec<Option<Decimal>> = report.data.iter().map(|m| m.trade_value).collect();
    assert_eq!(
        values,
        [
            Some(Decimal::from(300_000_000_000_i64)),
            Some(Decimal::from(40_000_000_000_i64)),
        ]
    );

    let none = twdata.market_trades(Exchange::Twse, d(2024, 1, 6)).await.unwrap();
    assert_eq!(none, None);
}
