use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use twdata_core::connector::ExchangeConnector;
use twdata_core::{
    AnnouncementQuery, DailyQuery, EtfSplitKind, InvestorCategory, ListingQuery, Method, Payload,
    RangeQuery,
};
use twdata_mock::{DynamicFetcher, FixtureFetcher, MockBehavior, fixture_date};
use twdata_tpex::TpexConnector;
use twdata_types::{ConnectorConfig, Exchange, TwdataError};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn connector() -> (TpexConnector, Arc<FixtureFetcher>) {
    let fetcher = Arc::new(FixtureFetcher::new());
    (TpexConnector::new(fetcher.clone()), fetcher)
}

fn january() -> RangeQuery {
    RangeQuery::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap()
}

fn dec(n: i64) -> Option<Decimal> {
    Some(Decimal::from(n))
}

#[tokio::test]
async fn quotes_leave_warrants_out() {
    let (tpex, _) = connector();
    let rows = tpex
        .as_quotes_provider()
        .unwrap()
        .stock_quotes(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["6488", "8069"]);
    assert_eq!(rows[0].exchange, Exchange::Tpex);
    assert_eq!(rows[0].close, dec(520));
    assert_eq!(rows[1].change, Some(Decimal::new(-250, 2)));
    assert_eq!(rows[1].volume, dec(5_000_000));
}

#[tokio::test]
async fn empty_day_is_none() {
    let (tpex, _) = connector();
    let q = DailyQuery::new(d(2024, 1, 6));
    assert_eq!(tpex.as_quotes_provider().unwrap().stock_quotes(&q).await.unwrap(), None);
    assert_eq!(
        tpex.as_market_trades_provider().unwrap().market_trades(q.date).await.unwrap(),
        None
    );
    assert_eq!(tpex.as_index_trades_provider().unwrap().index_trades(&q).await.unwrap(), None);
}

#[tokio::test]
async fn institutional_current_layout() {
    let (tpex, fetcher) = connector();
    let rows = tpex
        .as_institutional_provider()
        .unwrap()
        .stock_institutional(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    let flows = &rows[0].institutional;
    assert_eq!(flows.len(), 8);
    assert_eq!(flows[2].investor, InvestorCategory::Foreign);
    assert_eq!(flows[2].difference, dec(100_000));
    assert_eq!(flows[6].investor, InvestorCategory::Dealers);
    assert_eq!(flows[6].total_buy, dec(12_000));
    assert_eq!(flows[7].investor, InvestorCategory::Total);
    assert_eq!(flows[7].difference, dec(136_000));

    let req = &fetcher.requests().await[0];
    assert_eq!(req.param_value("date"), Some("2024/01/02"));
    assert_eq!(req.param_value("sect"), Some("EW"));
}

#[tokio::test]
async fn margin_and_short_sales() {
    let (tpex, _) = connector();
    let q = DailyQuery::new(fixture_date()).with_symbol("6488");
    let margin = tpex.as_margin_provider().unwrap().stock_margin(&q).await.unwrap().unwrap();
    assert_eq!(margin[0].margin_balance, dec(3_050));
    assert_eq!(margin[0].short_balance, dec(110));
    assert_eq!(margin[0].offset, dec(4));

    let short = tpex
        .as_short_sales_provider()
        .unwrap()
        .stock_short_sales(&q)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(short[0].sbl_short_balance, dec(2_050));
    assert_eq!(short[0].note, "");
}

#[tokio::test]
async fn market_total_comes_from_the_footer() {
    let (tpex, _) = connector();
    let market = tpex
        .as_market_trades_provider()
        .unwrap()
        .market_trades(fixture_date())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(market.trade_value, dec(40_000_000_000));
    assert_eq!(market.trade_volume, dec(400_000_000));
    assert_eq!(market.transaction, dec(300_000));
}

#[tokio::test]
async fn index_trades_add_the_electronics_basket() {
    let (tpex, _) = connector();
    let rows = tpex
        .as_index_trades_provider()
        .unwrap()
        .index_trades(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    // eight electronics sectors, biotech, and the basket; unknown sectors dropped
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r.exchange == Exchange::Tpex));
    assert_eq!(rows[0].symbol, "IX0053");
    assert_eq!(rows[0].name, "櫃買半導體類指數");

    let basket = rows.iter().find(|r| r.symbol == "IX0047").unwrap();
    assert_eq!(basket.trade_value, dec(26_100_000_000));
    assert_eq!(basket.trade_volume, dec(261_000_000));
    assert_eq!(basket.trade_weight, Some(Decimal::new(6525, 2)));

    let only = tpex
        .as_index_trades_provider()
        .unwrap()
        .index_trades(&DailyQuery::new(fixture_date()).with_symbol("IX0047"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(only.len(), 1);
}

#[tokio::test]
async fn dividends_by_range() {
    let (tpex, fetcher) = connector();
    let rows = tpex
        .as_dividends_provider()
        .unwrap()
        .stock_dividends(&january())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.date, d(2024, 1, 2));
    assert_eq!(r.dividend, dec(10));
    assert_eq!(r.dividend_type, "息");
    assert_eq!(r.capital_increase_right, None);
    assert_eq!(r.cash_dividend, dec(10));

    let req = &fetcher.requests().await[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.param_value("startDate"), Some("2024/01/01"));

    let february = RangeQuery::new(d(2024, 2, 1), d(2024, 2, 29)).unwrap();
    let none = tpex.as_dividends_provider().unwrap().stock_dividends(&february).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn detail_flag_is_ignored() {
    let (tpex, fetcher) = connector();
    let rows = tpex
        .as_capital_reductions_provider()
        .unwrap()
        .capital_reductions(&january().with_detail(true))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(fetcher.requests().await.len(), 1);
}

#[tokio::test]
async fn capital_reduction_detail_comes_from_the_embedded_table() {
    let (tpex, _) = connector();
    let rows = tpex
        .as_capital_reductions_provider()
        .unwrap()
        .capital_reductions(&january())
        .await
        .unwrap();
    let r = &rows[0];
    assert_eq!(r.symbol, "6573");
    assert_eq!(r.resume_date, d(2024, 1, 2));
    assert_eq!(r.halt_date, Some(d(2023, 12, 20)));
    assert_eq!(r.shares_per_thousand, dec(800));
    assert_eq!(r.refund_per_share, dec(2));
}

#[tokio::test]
async fn announcements() {
    let (tpex, _) = connector();

    let dividends = tpex
        .as_dividend_announcements_provider()
        .unwrap()
        .dividend_announcements(&AnnouncementQuery::default())
        .await
        .unwrap();
    // the convertible bond row is not a stock
    assert_eq!(dividends.len(), 1);
    assert_eq!(dividends[0].symbol, "6488");
    assert_eq!(dividends[0].dividend_type, "權息");
    assert_eq!(dividends[0].cash_dividend, dec(10));

    let reductions = tpex
        .as_capital_reduction_announcements_provider()
        .unwrap()
        .capital_reduction_announcements(&AnnouncementQuery::default())
        .await
        .unwrap();
    assert_eq!(reductions[0].halt_date, d(2024, 1, 10));
    assert_eq!(reductions[0].resume_date, None);
    assert_eq!(reductions[0].refund_per_share, Some(Decimal::new(205, 2)));
    assert_eq!(reductions[0].cash_increase_ratio_after_reduction, None);
    assert_eq!(reductions[0].subscription_price, None);

    let splits = tpex
        .as_split_announcements_provider()
        .unwrap()
        .split_announcements(&AnnouncementQuery::default().with_symbol("3093"))
        .await
        .unwrap();
    assert_eq!(splits[0].resume_date, Some(d(2024, 2, 5)));
    assert_eq!(splits[0].new_face_value, Some(Decimal::new(250, 2)));
    assert_eq!(splits[0].shares_per_old_share, None);
}

#[tokio::test]
async fn splits_use_compact_dates() {
    let (tpex, _) = connector();
    let rows = tpex.as_splits_provider().unwrap().stock_splits(&january()).await.unwrap();
    assert_eq!(rows[0].symbol, "3093");
    assert_eq!(rows[0].resume_date, d(2024, 1, 2));
    assert_eq!(rows[0].halt_date, None);
    assert_eq!(rows[0].reference_price, dec(20));
}

#[tokio::test]
async fn etf_splits_merge_both_result_pages() {
    let (tpex, fetcher) = connector();
    let rows = tpex.as_etf_splits_provider().unwrap().etf_splits(&january()).await.unwrap();
    let kinds: Vec<(&str, EtfSplitKind)> =
        rows.iter().map(|r| (r.symbol.as_str(), r.kind)).collect();
    assert_eq!(
        kinds,
        [("006201", EtfSplitKind::Split), ("00679B", EtfSplitKind::ReverseSplit)]
    );
    assert_eq!(rows[0].resume_date, d(2024, 1, 2));
    assert_eq!(rows[0].reference_price, dec(20));
    assert_eq!(fetcher.count("etfSplitRslt").await, 1);
    assert_eq!(fetcher.count("etfRvsRslt").await, 1);

    let ann = tpex
        .as_etf_split_announcements_provider()
        .unwrap()
        .etf_split_announcements(&AnnouncementQuery::default())
        .await
        .unwrap();
    assert_eq!(ann.len(), 2);
    assert_eq!(ann[0].resume_date, Some(d(2024, 2, 5)));
    assert_eq!(ann[0].previous_nav, Some(Decimal::new(4012, 2)));
    assert_eq!(ann[1].kind, EtfSplitKind::ReverseSplit);
    assert_eq!(ann[1].resume_date, None);
    assert_eq!(ann[1].split_ratio, Some(Decimal::new(25, 2)));
}

#[tokio::test]
async fn valuation_ratios() {
    let (tpex, _) = connector();
    let rows = tpex
        .as_stock_values_provider()
        .unwrap()
        .stock_values(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rows[0].pe_ratio, Some(Decimal::new(1250, 2)));
    assert_eq!(rows[0].dividend_year, Some(2023));
    assert_eq!(rows[0].dividend_yield, Some(Decimal::new(481, 2)));
    assert_eq!(rows[0].pb_ratio, Some(Decimal::new(230, 2)));
    assert_eq!(rows[1].pe_ratio, None);
}

#[tokio::test]
async fn foreign_holdings_come_from_the_mops_page() {
    let (tpex, fetcher) = connector();
    let fp = tpex.as_fini_holdings_provider().unwrap();
    let rows = fp
        .stock_fini_holdings(&DailyQuery::new(fixture_date()))
        .await
        .unwrap()
        .unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["環球晶", "元太"]);
    assert_eq!(rows[1].shares_held, dec(340_000_000));
    assert_eq!(rows[1].upper_limit_percent, dec(100));

    let req = &fetcher.requests().await[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, twdata_tpex::fini::MOPS_FINI_URL);
    assert_eq!(req.param_value("days"), Some("02"));

    let holiday = DailyQuery::new(d(2024, 1, 6));
    assert_eq!(fp.stock_fini_holdings(&holiday).await.unwrap(), None);
}

#[tokio::test]
async fn market_summaries() {
    let (tpex, fetcher) = connector();
    let day = fixture_date();

    let inst = tpex
        .as_market_institutional_provider()
        .unwrap()
        .market_institutional(day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inst.institutional[0].category, Some(InvestorCategory::Foreign));
    assert_eq!(inst.institutional[3].investor, "三大法人");
    assert_eq!(
        inst.flow(InvestorCategory::Total).and_then(|f| f.difference),
        dec(2_300_000_000)
    );
    assert_eq!(fetcher.requests().await[0].param_value("type"), Some("Daily"));

    let margin = tpex
        .as_market_margin_provider()
        .unwrap()
        .market_margin(day)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(margin.margin_balance_prev, dec(1_200_000));
    assert_eq!(margin.margin_balance, dec(1_201_000));
    assert_eq!(margin.short_sell, dec(6_000));
    assert_eq!(margin.short_buy, dec(5_000));
    assert_eq!(margin.short_balance, dec(50_800));
    assert_eq!(margin.margin_balance_value, dec(45_060_000));

    let bp = tpex.as_market_breadth_provider().unwrap();
    let breadth = bp.market_breadth(day).await.unwrap().unwrap();
    assert_eq!((breadth.up, breadth.limit_up), (dec(420), dec(15)));
    assert_eq!((breadth.unchanged, breadth.unmatched), (dec(80), dec(20)));
    assert_eq!(bp.market_breadth(d(2024, 1, 6)).await.unwrap(), None);
}

#[tokio::test]
async fn index_history_names_sector_rows() {
    let (tpex, _) = connector();
    let rows = tpex
        .as_index_historical_provider()
        .unwrap()
        .index_historical(&DailyQuery::new(fixture_date()).with_symbol("IX0053"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "櫃買半導體類指數");
    assert_eq!(rows[0].high, Some(Decimal::new(61_620, 2)));
    assert_eq!(rows[0].change, Some(Decimal::new(-310, 2)));
}

#[tokio::test]
async fn listing_applications_default_to_all_years() {
    let (tpex, fetcher) = connector();
    let lp = tpex.as_listing_applications_provider().unwrap();

    let rows = lp.listing_applications(&ListingQuery::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].symbol, "7780");
    assert_eq!(rows[0].application_date, d(2023, 10, 2));
    assert_eq!(rows[0].underwriting_price, dec(58));
    assert_eq!(rows[0].contract_filing_date, None);

    assert!(lp
        .listing_applications(&ListingQuery::default().with_year(2024))
        .await
        .unwrap()
        .is_empty());

    let dates: Vec<Option<String>> = fetcher
        .requests()
        .await
        .iter()
        .map(|r| r.param_value("date").map(str::to_string))
        .collect();
    assert_eq!(dates, [Some("ALL".into()), Some("2024".into())]);
}

#[tokio::test]
async fn custom_base_url() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    let cfg = ConnectorConfig::new("http://localhost:9000/tpex/");
    let tpex = TpexConnector::with_config(fetcher, cfg);
    let _ = tpex
        .as_market_trades_provider()
        .unwrap()
        .market_trades(fixture_date())
        .await;
    let log = controller.requests().await;
    assert_eq!(log[0].url, "http://localhost:9000/tpex/afterTrading/marketStats");
}

#[tokio::test]
async fn missing_market_footer_is_a_schema_mismatch() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    controller
        .set_behavior(
            "marketStats",
            MockBehavior::Return(Payload::Json(serde_json::json!({
                "stat": "ok",
                "tables": [{ "totalCount": 1, "data": [["股票", "1", "2", "3"]], "summary": [] }]
            }))),
        )
        .await;
    let tpex = TpexConnector::new(fetcher);
    let err = tpex
        .as_market_trades_provider()
        .unwrap()
        .market_trades(fixture_date())
        .await
        .unwrap_err();
    assert!(matches!(err, TwdataError::SchemaMismatch { .. }));
}

#[tokio::test]
async fn fetch_failures_are_attributed_to_the_connector() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    controller
        .set_behavior("dailyQuotes", MockBehavior::Fail(TwdataError::Other("reset".into())))
        .await;
    let tpex = TpexConnector::new(fetcher);
    let err = tpex
        .as_quotes_provider()
        .unwrap()
        .stock_quotes(&DailyQuery::new(fixture_date()))
        .await
        .unwrap_err();
    assert_eq!(err, TwdataError::connector("twdata-tpex", "reset"));
}
