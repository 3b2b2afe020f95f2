use rust_decimal::Decimal;
use twdata::{AnnouncementQuery, Exchange, ListingQuery, RangeQuery};

use crate::helpers::{d, fixture_twdata};

fn january() -> RangeQuery {
    RangeQuery::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap()
}

#[tokio::test]
async fn dividends_across_exchanges() {
    let (twdata, fetcher) = fixture_twdata();
    let report = twdata.stock_dividends_all(&january()).await.unwrap();

    let keys: Vec<(Exchange, &str)> = report
        .data
        .iter()
        .map(|r| (r.exchange, r.symbol.as_str()))
        .collect();
    assert_eq!(
        keys,
        [
            (Exchange::Twse, "2330"),
            (Exchange::Twse, "2317"),
            (Exchange::Twse, "FAIL"),
            (Exchange::Tpex, "6488"),
        ]
    );
    // a failed detail look-up keeps its summary row and is not a connector failure
    assert!(report.is_clean());
    assert_eq!(report.data[0].cash_dividend, Some(Decimal::from(4)));
    assert_eq!(fetcher.count("TWT49UDetail").await, 3);
}

#[tokio::test]
async fn per_exchange_detail_defaults_survive_routing() {
    let (twdata, fetcher) = fixture_twdata();
    let rows = twdata
        .dividend_announcements(Exchange::Twse, &AnnouncementQuery::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(fetcher.count("TWT49UDetail").await, 0);

    let rows = twdata
        .capital_reductions(Exchange::Twse, &january().with_detail(false))
        .await
        .unwrap();
    assert_eq!(rows[0].shares_per_thousand, Some(Decimal::from(800)));
}

#[tokio::test]
async fn inverted_range_is_an_invalid_argument() {
    let (twdata, _) = fixture_twdata();
    let q = RangeQuery {
        start: d(2024, 2, 1),
        end: d(2024, 1, 1),
        symbol: None,
        include_detail: None,
    };
    let err = twdata.stock_splits(Exchange::Tpex, &q).await.unwrap_err();
    assert!(matches!(err, twdata::TwdataError::InvalidArg(_)));
}

#[tokio::test]
async fn announcements_and_splits_fan_out() {
    let (twdata, _) = fixture_twdata();

    let reductions = twdata
        .capital_reduction_announcements_all(&AnnouncementQuery::default())
        .await
        .unwrap();
    let symbols: Vec<&str> = reductions.data.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["4111", "6573"]);

    let splits = twdata.stock_splits_all(&january()).await.unwrap();
    assert_eq!(splits.data.len(), 2);
    assert_eq!(splits.data[0].halt_date, Some(d(2023, 12, 25)));
    assert_eq!(splits.data[1].halt_date, None);

    let split_ann = twdata
        .split_announcements_all(&AnnouncementQuery::default().with_symbol("3093"))
        .await
        .unwrap();
    assert_eq!(split_ann.data.len(), 1);
    assert_eq!(split_ann.data[0].exchange, Exchange::Tpex);
}

#[tokio::test]
async fn listing_applications_by_year() {
    let (twdata, _) = fixture_twdata();

    let all = twdata.listing_applications_all(&ListingQuery::default()).await.unwrap();
    let symbols: Vec<&str> = all.data.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["7722", "6949", "7780"]);

    let y2023 = twdata
        .listing_applications_all(&ListingQuery::default().with_year(2023))
        .await
        .unwrap();
    let symbols: Vec<&str> = y2023.data.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["7780"]);
}
