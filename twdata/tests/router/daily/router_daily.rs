use rust_decimal::Decimal;
use twdata::{DailyQuery, Exchange, InvestorCategory};

use crate::helpers::{d, fixture_date, fixture_twdata};

#[tokio::test]
async fn routes_to_the_exchange_connector() {
    let (twdata, fetcher) = fixture_twdata();
    let q = DailyQuery::new(fixture_date());

    let twse = twdata.stock_quotes(Exchange::Twse, &q).await.unwrap().unwrap();
    assert_eq!(twse.len(), 3);
    assert!(twse.iter().all(|r| r.exchange == Exchange::Twse));

    let tpex = twdata.stock_quotes(Exchange::Tpex, &q).await.unwrap().unwrap();
    assert_eq!(tpex.len(), 2);

    let endpoints: Vec<String> = fetcher
        .requests()
        .await
        .iter()
        .map(|r| r.endpoint().to_string())
        .collect();
    assert_eq!(endpoints, ["MI_INDEX", "dailyQuotes"]);
}

#[tokio::test]
async fn no_trading_day_is_none() {
    let (twdata, _) = fixture_twdata();
    let q = DailyQuery::new(d(2024, 1, 6));
    assert_eq!(twdata.stock_quotes(Exchange::Twse, &q).await.unwrap(), None);
    assert_eq!(twdata.stock_margin(Exchange::Tpex, &q).await.unwrap(), None);
}

#[tokio::test]
async fn singular_lookups() {
    let (twdata, _) = fixture_twdata();
    let day = fixture_date();

    let tsmc = twdata.stock_quote(Exchange::Twse, day, "2330").await.unwrap().unwrap();
    assert_eq!(tsmc.close, Some(Decimal::from(593)));
    assert_eq!(twdata.stock_quote(Exchange::Twse, day, "6488").await.unwrap(), None);
    assert_eq!(
        twdata.stock_quote(Exchange::Twse, d(2024, 1, 6), "2330").await.unwrap(),
        None
    );

    let flows = twdata.stock_flows(Exchange::Tpex, day, "6488").await.unwrap().unwrap();
    assert_eq!(flows.institutional.len(), 8);
    assert_eq!(flows.institutional[7].investor, InvestorCategory::Total);

    let margin = twdata
        .stock_margin_balance(Exchange::Twse, day, "2317")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(margin.note, "X");

    let short = twdata
        .stock_short_sale_balance(Exchange::Tpex, day, "6488")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(short.sbl_short_balance, Some(Decimal::from(2_050)));
}

#[tokio::test]
async fn legacy_layouts_route_unchanged() {
    let (twdata, _) = fixture_twdata();
    let rows = twdata
        .stock_institutional(Exchange::Twse, &DailyQuery::new(d(2017, 12, 15)))
        .await
        .unwrap()
        .unwrap();
    let investors: Vec<InvestorCategory> =
        rows[0].institutional.iter().map(|f| f.investor).collect();
    assert_eq!(
        investors,
        [
            InvestorCategory::Foreign,
            InvestorCategory::InvestmentTrust,
            InvestorCategory::Dealers,
            InvestorCategory::DealersProprietary,
            InvestorCategory::DealersHedging,
            InvestorCategory::Total,
        ]
    );
}
