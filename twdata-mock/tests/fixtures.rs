use twdata_core::{FetchRequest, Fetcher, Payload};
use twdata_mock::FixtureFetcher;
use twdata_types::TwdataError;

fn json(p: Payload) -> serde_json::Value {
    p.into_json("test").expect("json body")
}

#[tokio::test]
async fn twse_day_is_served_and_other_days_are_empty() {
    let f = FixtureFetcher::new();
    let hit = json(
        f.fetch(&FetchRequest::get("https://x/rwd/zh/fund/T86").param("date", "20240102"))
            .await
            .unwrap(),
    );
    assert_eq!(hit["stat"], "OK");
    assert_eq!(hit["data"][0][0], "2330");

    let miss = json(
        f.fetch(&FetchRequest::get("https://x/rwd/zh/fund/T86").param("date", "20240103"))
            .await
            .unwrap(),
    );
    assert_ne!(miss["stat"], "OK");
    assert_eq!(f.count("T86").await, 2);
}

#[tokio::test]
async fn legacy_institutional_widths() {
    let f = FixtureFetcher::new();
    for (date, width) in [("20171215", 16), ("20120502", 12)] {
        let body = json(
            f.fetch(&FetchRequest::get("https://x/fund/T86").param("date", date))
                .await
                .unwrap(),
        );
        assert_eq!(body["data"][0].as_array().unwrap().len(), width, "{date}");
    }
}

#[tokio::test]
async fn tpex_range_bulletins_cover_the_fixture_day() {
    let f = FixtureFetcher::new();
    let req = FetchRequest::post("https://x/www/zh-tw/bulletin/exDailyQ")
        .param("startDate", "2024/01/01")
        .param("endDate", "2024/01/31");
    let body = json(f.fetch(&req).await.unwrap());
    assert_eq!(body["tables"][0]["totalCount"], 1);

    let req = FetchRequest::post("https://x/www/zh-tw/bulletin/exDailyQ")
        .param("startDate", "2024/02/01")
        .param("endDate", "2024/02/29");
    let body = json(f.fetch(&req).await.unwrap());
    assert_eq!(body["tables"][0]["totalCount"], 0);
}

#[tokio::test]
async fn forced_detail_failure_and_unknown_endpoint() {
    let f = FixtureFetcher::new();
    let err = f
        .fetch(&FetchRequest::get("https://x/exRight/TWT49UDetail").param("STK_NO", "FAIL"))
        .await
        .unwrap_err();
    assert!(matches!(err, TwdataError::Connector { .. }));

    let err = f
        .fetch(&FetchRequest::get("https://x/nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(err, TwdataError::NotFound { .. }));
}

#[tokio::test]
async fn mops_holdings_page_is_html_text() {
    let f = FixtureFetcher::new();
    let req = |day: &str| {
        FetchRequest::post("https://mops.twse.com.tw/server-java/t13sa150_otc")
            .param("years", "2024")
            .param("months", "01")
            .param("days", day)
    };
    let Payload::Text(page) = f.fetch(&req("02")).await.unwrap() else {
        panic!("expected an HTML page");
    };
    assert!(page.contains("環球晶"));
    let Payload::Text(page) = f.fetch(&req("03")).await.unwrap() else {
        panic!("expected an HTML page");
    };
    assert!(page.contains("查無所需資料"));
}
