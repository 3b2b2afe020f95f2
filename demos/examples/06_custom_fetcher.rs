use twdata::{DailyQuery, ExchangeConnector};
use twdata_core::{Fetcher, Payload};
use twdata_twse::TwseConnector;

/// Any transport can back a connector: here a closure answers `T86` with a
/// canned 14-column page and reports "no data" for everything else.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = <dyn Fetcher>::from_fn(|req| {
        println!("-> {:?} {} {:?}", req.method, req.url, req.params);
        let body = match req.endpoint() {
            "T86" => serde_json::json!({
                "stat": "OK",
                "data": [["2330", "台積電", "10,000", "8,000", "2,000", "500", "0", "500", "100", "300", "200", "100", "100", "100", "0", "2,600"]]
            }),
            _ => serde_json::json!({ "stat": "很抱歉，沒有符合條件的資料!" }),
        };
        Ok(Payload::Json(body))
    });
    let twse = TwseConnector::new(fetcher);

    let Some(provider) = twse.as_institutional_provider() else {
        return Ok(());
    };
    let day = twdata_demos::common::demo_day();
    let rows = provider.stock_institutional(&DailyQuery::new(day)).await?.unwrap_or_default();
    for row in &rows {
        for f in &row.institutional {
            println!("{} {:?}: {:?}", row.symbol, f.investor, f.difference);
        }
    }
    Ok(())
}
