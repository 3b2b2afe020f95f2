use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use twdata_core::connector::ExchangeConnector;
use twdata_core::{
    AnnouncementQuery, DailyQuery, EtfSplitKind, InvestorCategory, ListingQuery, Payload,
    RangeQuery,
};
use twdata_mock::{DynamicFetcher, FixtureFetcher, MockBehavior, fixture_date};
use twdata_twse::TwseConnector;
use twdata_types::TwdataError;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn connector() -> (TwseConnector, Arc<FixtureFetcher>) {
    let fetcher = Arc::new(FixtureFetcher::new());
    (TwseConnector::new(fetcher.clone()), fetcher)
}

fn january() -> RangeQuery {
    RangeQuery::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap()
}

fn dec(n: i64) -> Option<Decimal> {
    Some(Decimal::from(n))
}

#[tokio::test]
async fn quotes_for_the_day_and_symbol_filter() {
    let (twse, _) = connector();
    let qp = twse.as_quotes_provider().unwrap();

    let all = qp.stock_quotes(&DailyQuery::new(fixture_date())).await.unwrap().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].symbol, "2317");
    assert_eq!(all[1].change, Some(Decimal::new(-150, 2)));
    assert_eq!(all[2].change, Some(Decimal::ZERO));

    let one = qp
        .stock_quotes(&DailyQuery::new(fixture_date()).with_symbol("2330"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].close, Some(Decimal::from(593)));

    let none = qp
        .stock_quotes(&DailyQuery::new(fixture_date()).with_symbol("9999"))
        .await
        .unwrap()
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn holiday_is_none() {
    let (twse, _) = connector();
    let q = DailyQuery::new(d(2024, 1, 6));
    assert_eq!(twse.as_quotes_provider().unwrap().stock_quotes(&q).await.unwrap(), None);
    assert_eq!(twse.as_margin_provider().unwrap().stock_margin(&q).await.unwrap(), None);
    assert_eq!(
        twse.as_index_trades_provider().unwrap().index_trades(&q).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn institutional_layout_follows_row_width() {
    let (twse, _) = connector();
    let ip = twse.as_institutional_provider().unwrap();

    let current = ip.stock_institutional(&DailyQuery::new(fixture_date())).await.unwrap().unwrap();
    let flows = &current[0].institutional;
    assert_eq!(flows.len(), 7);
    assert_eq!(flows[0].investor, InvestorCategory::ForeignExcludingDealers);
    assert_eq!(flows[0].difference, dec(5_000_000));
    assert_eq!(current[1].institutional[6].difference, dec(-1_100_000));

    let fourteen = ip.stock_institutional(&DailyQuery::new(d(2017, 12, 15))).await.unwrap().unwrap();
    assert_eq!(fourteen[0].institutional.len(), 6);

    let ten = ip.stock_institutional(&DailyQuery::new(d(2012, 5, 2))).await.unwrap().unwrap();
    assert_eq!(ten[0].institutional.len(), 4);
    assert_eq!(ten[0].institutional[2].investor, InvestorCategory::Dealers);
}

#[tokio::test]
async fn margin_and_short_sales() {
    let (twse, _) = connector();
    let q = DailyQuery::new(fixture_date()).with_symbol("2317");

    let margin = twse.as_margin_provider().unwrap().stock_margin(&q).await.unwrap().unwrap();
    assert_eq!(margin[0].margin_balance, dec(40_500));
    assert_eq!(margin[0].note, "X");

    let short = twse
        .as_short_sales_provider()
        .unwrap()
        .stock_short_sales(&q)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(short[0].sbl_short_balance, dec(12_300));
    assert_eq!(short[0].note, "*");
}

#[tokio::test]
async fn market_total_and_derived_indices() {
    let (twse, _) = connector();
    let market = twse
        .as_market_trades_provider()
        .unwrap()
        .market_trades(fixture_date())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(market.trade_value, dec(300_000_000_000));

    let rows = twse
        .as_index_trades_provider()
        .unwrap()
        .index_trades(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    let by = |s: &str| rows.iter().find(|r| r.symbol == s).unwrap();

    // uncatalogued rows never reach the output
    assert_eq!(rows.len(), 12);
    assert_eq!(by("IX0010").trade_weight, Some(Decimal::new(50, 2)));

    let non_finance = by("IX0007");
    assert_eq!(non_finance.trade_value, dec(162_500_000_000));
    assert_eq!(non_finance.trade_volume, dec(2_230_000_000));
    assert_eq!(non_finance.trade_weight, Some(Decimal::new(5417, 2)));
    assert_eq!(by("IX0008").trade_value, dec(27_500_000_000));
    let neither = by("IX0009");
    assert_eq!(neither.trade_value, dec(12_500_000_000));
    assert_eq!(neither.trade_weight, Some(Decimal::new(417, 2)));
}

#[tokio::test]
async fn dividends_merge_detail_by_default() {
    let (twse, fetcher) = connector();
    let rows = twse
        .as_dividends_provider()
        .unwrap()
        .stock_dividends(&january())
        .await
        .unwrap();

    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["2330", "2317", "FAIL"]);
    assert_eq!(rows[0].cash_dividend, Some(Decimal::from(4)));
    assert_eq!(rows[0].stock_dividend_shares, Some(Decimal::ZERO));
    // no detail page for 2317; a failed look-up keeps the summary for FAIL
    assert_eq!(rows[1].cash_dividend, None);
    assert_eq!(rows[2].cash_dividend, None);
    assert_eq!(rows[2].dividend, dec(1));
    assert_eq!(fetcher.count("TWT49UDetail").await, 3);
}

#[tokio::test]
async fn dividends_without_detail_skip_lookups() {
    let (twse, fetcher) = connector();
    let rows = twse
        .as_dividends_provider()
        .unwrap()
        .stock_dividends(&january().with_detail(false))
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].cash_dividend, None);
    assert_eq!(fetcher.count("TWT49UDetail").await, 0);
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let (twse, fetcher) = connector();
    let q = RangeQuery {
        start: d(2024, 2, 1),
        end: d(2024, 1, 1),
        symbol: None,
        include_detail: None,
    };
    let err = twse.as_splits_provider().unwrap().stock_splits(&q).await.unwrap_err();
    assert!(matches!(err, TwdataError::InvalidArg(_)));
    assert!(fetcher.requests().await.is_empty());
}

#[tokio::test]
async fn dividend_announcements_detail_is_opt_in() {
    let (twse, fetcher) = connector();
    let dp = twse.as_dividend_announcements_provider().unwrap();

    let plain = dp.dividend_announcements(&AnnouncementQuery::default()).await.unwrap();
    assert_eq!(plain.len(), 2);
    assert_eq!(plain[0].cash_dividend, Some(Decimal::from(24)));
    assert_eq!(plain[0].stock_dividend_shares, None);
    assert_eq!(fetcher.count("TWT49UDetail").await, 0);

    let detailed = dp
        .dividend_announcements(&AnnouncementQuery::default().with_symbol("2454").with_detail(true))
        .await
        .unwrap();
    assert_eq!(detailed.len(), 1);
    assert_eq!(detailed[0].stock_dividend_shares, Some(Decimal::ZERO));
}

#[tokio::test]
async fn capital_reductions_always_carry_detail() {
    let (twse, _) = connector();
    let rows = twse
        .as_capital_reductions_provider()
        .unwrap()
        .capital_reductions(&january().with_detail(false))
        .await
        .unwrap();
    assert_eq!(rows[0].symbol, "4111");
    assert_eq!(rows[0].halt_date, Some(d(2023, 12, 20)));
    assert_eq!(rows[0].shares_per_thousand, dec(800));
    assert_eq!(rows[0].refund_per_share, dec(2));
}

#[tokio::test]
async fn capital_reduction_announcements_with_detail() {
    let (twse, _) = connector();
    let rows = twse
        .as_capital_reduction_announcements_provider()
        .unwrap()
        .capital_reduction_announcements(&AnnouncementQuery::default().with_detail(true))
        .await
        .unwrap();
    let r = &rows[0];
    assert_eq!(r.halt_date, d(2024, 1, 10));
    assert_eq!(r.resume_date, Some(d(2024, 1, 25)));
    assert_eq!(r.shares_per_thousand, dec(800));
    assert_eq!(r.cash_dividend_per_share, Some(Decimal::ZERO));
}

#[tokio::test]
async fn splits_and_announcements() {
    let (twse, _) = connector();
    let splits = twse.as_splits_provider().unwrap().stock_splits(&january()).await.unwrap();
    assert_eq!(splits[0].halt_date, Some(d(2023, 12, 25)));
    assert_eq!(splits[0].resume_date, d(2024, 1, 2));

    let ann = twse
        .as_split_announcements_provider()
        .unwrap()
        .split_announcements(&AnnouncementQuery::default().with_detail(true))
        .await
        .unwrap();
    assert_eq!(ann[0].shares_per_old_share, dec(4));
    assert_eq!(ann[0].new_face_value, Some(Decimal::new(250, 2)));
}

#[tokio::test]
async fn etf_splits_and_announcements() {
    let (twse, _) = connector();
    let rows = twse.as_etf_splits_provider().unwrap().etf_splits(&january()).await.unwrap();
    let kinds: Vec<EtfSplitKind> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, [EtfSplitKind::Split, EtfSplitKind::ReverseSplit]);
    assert_eq!(rows[0].resume_date, d(2024, 1, 2));
    assert_eq!(rows[1].reference_price, dec(20));

    let ann = twse
        .as_etf_split_announcements_provider()
        .unwrap()
        .etf_split_announcements(&AnnouncementQuery::default().with_symbol("00715L"))
        .await
        .unwrap();
    assert_eq!(ann.len(), 1);
    assert_eq!(ann[0].kind, EtfSplitKind::ReverseSplit);
    assert_eq!(ann[0].resume_date, None);
    assert_eq!(ann[0].split_ratio, Some(Decimal::new(25, 2)));
    assert_eq!(ann[0].previous_nav, None);
}

#[tokio::test]
async fn valuation_and_foreign_holdings() {
    let (twse, fetcher) = connector();
    let q = DailyQuery::new(fixture_date());
    let values = twse
        .as_stock_values_provider()
        .unwrap()
        .stock_values(&q)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(values[0].pe_ratio, Some(Decimal::new(1580, 2)));
    assert_eq!(values[0].dividend_year, Some(2023));
    assert_eq!(values[1].pe_ratio, None);
    assert_eq!(values[1].pb_ratio, Some(Decimal::new(130, 2)));

    let fini = twse
        .as_fini_holdings_provider()
        .unwrap()
        .stock_fini_holdings(&q.clone().with_symbol("2317"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fini.len(), 1);
    assert_eq!(fini[0].name, "鴻海");
    assert_eq!(fini[0].held_percent, Some(Decimal::new(3868, 2)));

    let reqs = fetcher.requests().await;
    assert_eq!(reqs[0].param_value("selectType"), Some("ALL"));
    assert_eq!(reqs[1].param_value("selectType"), Some("ALLBUT0999"));
}

#[tokio::test]
async fn market_summaries() {
    let (twse, fetcher) = connector();
    let day = fixture_date();

    let inst = twse
        .as_market_institutional_provider()
        .unwrap()
        .market_institutional(day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inst.institutional.len(), 6);
    assert_eq!(
        inst.flow(InvestorCategory::Total).and_then(|f| f.difference),
        dec(-3_300_000_000)
    );
    assert_eq!(fetcher.requests().await[0].param_value("dayDate"), Some("20240102"));

    let margin = twse
        .as_market_margin_provider()
        .unwrap()
        .market_margin(day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(margin.margin_buy, dec(300_000));
    assert_eq!(margin.short_balance, dec(304_000));
    assert_eq!(margin.margin_balance_value, dec(270_350_000));

    let breadth = twse
        .as_market_breadth_provider()
        .unwrap()
        .market_breadth(day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((breadth.up, breadth.limit_up), (dec(500), dec(12)));
    assert_eq!((breadth.down, breadth.limit_down), (dec(400), dec(3)));
    assert_eq!(breadth.not_applicable, dec(5));

    let holiday = d(2024, 1, 6);
    let mp = twse.as_market_margin_provider().unwrap();
    assert_eq!(mp.market_margin(holiday).await.unwrap(), None);
}

#[tokio::test]
async fn index_history_summarizes_intraday_ticks() {
    let (twse, _) = connector();
    let rows = twse
        .as_index_historical_provider()
        .unwrap()
        .index_historical(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["IX0001", "IX0010"]);
    let taiex = &rows[0];
    assert_eq!(taiex.open, Some(Decimal::new(1_795_000, 2)));
    assert_eq!(taiex.high, Some(Decimal::new(1_800_000, 2)));
    assert_eq!(taiex.close, Some(Decimal::new(1_785_376, 2)));
    assert_eq!(taiex.low, taiex.close);
    assert_eq!(taiex.change, Some(Decimal::new(-7_705, 2)));
}

#[tokio::test]
async fn listing_applications_by_year_and_symbol() {
    let (twse, fetcher) = connector();
    let lp = twse.as_listing_applications_provider().unwrap();

    assert_eq!(lp.listing_applications(&ListingQuery::default()).await.unwrap().len(), 2);
    let this_year = lp
        .listing_applications(&ListingQuery::default().with_year(2024).with_symbol("6949"))
        .await
        .unwrap();
    assert_eq!(this_year.len(), 1);
    assert_eq!(this_year[0].underwriting_price, dec(120));
    assert!(lp
        .listing_applications(&ListingQuery::default().with_year(2019))
        .await
        .unwrap()
        .is_empty());

    let years: Vec<Option<String>> = fetcher
        .requests()
        .await
        .iter()
        .map(|r| r.param_value("date").map(str::to_string))
        .collect();
    assert_eq!(years, [None, Some("20240101".into()), Some("20190101".into())]);
}

#[tokio::test]
async fn fetch_failures_are_attributed_to_the_connector() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    controller
        .set_behavior("T86", MockBehavior::Fail(TwdataError::Other("socket closed".into())))
        .await;
    let twse = TwseConnector::new(fetcher);

    let err = twse
        .as_institutional_provider()
        .unwrap()
        .stock_institutional(&DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert_eq!(err, TwdataError::connector("twdata-twse", "socket closed"));
}

#[tokio::test]
async fn unknown_row_width_is_a_schema_mismatch() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    controller
        .set_behavior(
            "T86",
            MockBehavior::Return(Payload::Json(serde_json::json!({
                "stat": "OK",
                "data": [["2330", "台積電", "1", "2", "3", "4", "5"]]
            }))),
        )
        .await;
    let twse = TwseConnector::new(fetcher);

    let err = twse
        .as_institutional_provider()
        .unwrap()
        .stock_institutional(&DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert!(matches!(err, TwdataError::SchemaMismatch { ref endpoint, .. } if endpoint == "T86"));
}

#[tokio::test]
async fn requests_use_compact_dates_and_json() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    let twse = TwseConnector::new(fetcher);
    let _ = twse
        .as_dividends_provider()
        .unwrap()
        .stock_dividends(&january())
        .await;

    let log = controller.requests().await;
    let req = &log[0];
    assert_eq!(req.url, "https://www.twse.com.tw/rwd/zh/exRight/TWT49U");
    assert_eq!(req.param_value("startDate"), Some("20240101"));
    assert_eq!(req.param_value("endDate"), Some("20240131"));
    assert_eq!(req.param_value("response"), Some("json"));
}
