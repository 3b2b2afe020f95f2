use twdata::{DailyQuery, Exchange};
use twdata_demos::common::{demo_day, fixture_twdata};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;
    let day = demo_day();

    let markets = twdata.market_trades_all(day).await?;
    for m in &markets.data {
        println!("{} market value {:?}", m.exchange, m.trade_value);
    }

    // Sector rows plus the indices the portals publish without trading
    // figures: TWSE market-excluding-sector complements and the TPEx
    // electronics basket.
    let report = twdata.index_trades_all(&DailyQuery::new(day)).await?;
    println!("\n{:<5} {:<7} {:<22} {:>18} {:>8}", "exch", "symbol", "name", "value", "weight%");
    for r in &report.data {
        println!(
            "{:<5} {:<7} {:<22} {:>18} {:>8}",
            r.exchange,
            r.symbol,
            r.name,
            r.trade_value.map(|d| d.to_string()).unwrap_or_default(),
            r.trade_weight.map(|d| d.to_string()).unwrap_or_default(),
        );
    }

    if let Some(ix) = twdata.index_trade(Exchange::Tpex, day, "IX0047").await? {
        println!("\n{}", serde_json::to_string_pretty(&ix)?);
    }

    Ok(())
}
