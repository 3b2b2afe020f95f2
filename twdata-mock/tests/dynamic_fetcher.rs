use std::time::Duration;

use twdata_core::{FetchRequest, Fetcher, Payload};
use twdata_mock::{DynamicFetcher, MockBehavior};
use twdata_types::TwdataError;

fn req(endpoint: &str) -> FetchRequest {
    FetchRequest::get(format!("https://portal.test/{endpoint}")).param("response", "json")
}

#[tokio::test]
async fn returns_scripted_body() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    let body = Payload::Json(serde_json::json!({"stat": "OK", "data": []}));
    controller
        .set_behavior("T86", MockBehavior::Return(body.clone()))
        .await;

    let got = fetcher.fetch(&req("T86")).await.expect("scripted body");
    assert_eq!(got, body);
}

#[tokio::test]
async fn fails_with_scripted_error() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    let err = TwdataError::Other("boom".into());
    controller
        .set_behavior("T86", MockBehavior::Fail(err.clone()))
        .await;

    let got = fetcher.fetch(&req("T86")).await.expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn unscripted_endpoint_is_not_found() {
    let (fetcher, _controller) = DynamicFetcher::new_with_controller();
    let got = fetcher.fetch(&req("BFIAMU")).await.expect_err("err");
    assert!(matches!(got, TwdataError::NotFound { .. }));
}

#[tokio::test]
async fn hang_never_completes() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    controller.set_behavior("sbl", MockBehavior::Hang).await;

    let r = tokio::time::timeout(Duration::from_millis(50), fetcher.fetch(&req("sbl"))).await;
    assert!(r.is_err(), "hanging fetch should time out");
}

#[tokio::test]
async fn logs_requests_and_clears() {
    let (fetcher, controller) = DynamicFetcher::new_with_controller();
    let _ = fetcher.fetch(&req("T86")).await;
    let _ = fetcher.fetch(&req("MI_INDEX")).await;

    let log = controller.requests().await;
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].endpoint(), "MI_INDEX");

    controller.clear_all_behaviors().await;
    assert!(controller.requests().await.is_empty());
}
