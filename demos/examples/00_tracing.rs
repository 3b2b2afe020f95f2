use twdata::{DailyQuery, Exchange, RangeQuery};
use twdata_demos::common::{demo_day, fixture_twdata, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Try: RUST_LOG=debug TWDATA_DEMO_SPANS=1 cargo run --example 00_tracing
    init_tracing();

    let twdata = fixture_twdata()?;
    let day = demo_day();

    // Router and connector spans, plus the "no rows reported" debug event.
    let _ = twdata.stock_quotes(Exchange::Twse, &DailyQuery::new(day)).await?;
    let _ = twdata.stock_quotes(Exchange::Twse, &DailyQuery::new(day.succ_opt().unwrap_or(day))).await?;

    // The FAIL row's detail look-up logs a warning and keeps its summary.
    let range = RangeQuery::new(day, day)?;
    let rows = twdata.stock_dividends(Exchange::Twse, &range).await?;
    tracing::info!(target: "twdata::demo", rows = rows.len(), "dividends decoded");

    Ok(())
}
