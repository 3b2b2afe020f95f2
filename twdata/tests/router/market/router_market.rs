use rust_decimal::Decimal;
use twdata::{DailyQuery, EtfSplitKind, Exchange, InvestorCategory, RangeQuery};

use crate::helpers::{d, fixture_date, fixture_twdata};

#[tokio::test]
async fn market_summaries_from_both_exchanges() {
    let (twdata, _) = fixture_twdata();
    let day = fixture_date();

    let inst = twdata.market_institutional_all(day).await.unwrap();
    assert!(inst.is_clean());
    let totals: Vec<(Exchange, Option<Decimal>)> = inst
        .data
        .iter()
        .map(|m| {
            let total = m.flow(InvestorCategory::Total).and_then(|f| f.difference);
            (m.exchange, total)
        })
        .collect();
    assert_eq!(
        totals,
        [
            (Exchange::Twse, Some(Decimal::from(-3_300_000_000_i64))),
            (Exchange::Tpex, Some(Decimal::from(2_300_000_000_i64))),
        ]
    );

    let margin = twdata.market_margin_all(day).await.unwrap();
    assert_eq!(margin.data.len(), 2);
    assert_eq!(margin.data[1].short_balance, Some(Decimal::from(50_800)));

    let breadth = twdata.market_breadth(Exchange::Tpex, day).await.unwrap().unwrap();
    assert_eq!(breadth.up, Some(Decimal::from(420)));
}

#[tokio::test]
async fn holiday_market_summaries_are_empty() {
    let (twdata, _) = fixture_twdata();
    let holiday = d(2024, 1, 6);
    let report = twdata.market_breadth_all(holiday).await.unwrap();
    assert!(report.data.is_empty());
    assert!(report.is_clean());
    assert_eq!(twdata.market_margin(Exchange::Twse, holiday).await.unwrap(), None);
}

#[tokio::test]
async fn index_history_from_both_exchanges() {
    let (twdata, _) = fixture_twdata();
    let report = twdata
        .index_historical_all(&DailyQuery::new(fixture_date()))
        .await
        .unwrap();
    let symbols: Vec<&str> = report.data.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["IX0001", "IX0010", "IX0043", "IX0053", "IX0100"]);
}

#[tokio::test]
async fn single_stock_valuation() {
    let (twdata, _) = fixture_twdata();
    let day = fixture_date();
    let tsmc = twdata.stock_value(Exchange::Twse, day, "2330").await.unwrap().unwrap();
    assert_eq!(tsmc.pb_ratio, Some(Decimal::new(450, 2)));
    assert_eq!(twdata.stock_value(Exchange::Tpex, day, "2330").await.unwrap(), None);

    let holdings = twdata
        .stock_fini_holdings_all(&DailyQuery::new(day))
        .await
        .unwrap();
    assert_eq!(holdings.data.len(), 4);
}

#[tokio::test]
async fn etf_splits_from_both_exchanges() {
    let (twdata, _) = fixture_twdata();
    let q = RangeQuery::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
    let report = twdata.etf_splits_all(&q).await.unwrap();
    let reverse = report
        .data
        .iter()
        .filter(|r| r.kind == EtfSplitKind::ReverseSplit)
        .count();
    assert_eq!(report.data.len(), 4);
    assert_eq!(reverse, 2);
}
