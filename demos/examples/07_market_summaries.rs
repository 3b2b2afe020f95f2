use twdata::{DailyQuery, InvestorCategory};
use twdata_demos::common::{demo_day, fixture_twdata};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;
    let day = demo_day();

    for m in twdata.market_institutional_all(day).await?.data {
        let net = m.flow(InvestorCategory::Total).and_then(|f| f.difference);
        println!("{} institutional net {:?}", m.exchange, net);
    }
    for m in twdata.market_margin_all(day).await?.data {
        println!(
            "{} margin balance {:?}, short balance {:?}",
            m.exchange, m.margin_balance, m.short_balance
        );
    }
    for b in twdata.market_breadth_all(day).await?.data {
        println!(
            "{} up {:?} ({:?} limit) / down {:?} ({:?} limit) / flat {:?}",
            b.exchange, b.up, b.limit_up, b.down, b.limit_down, b.unchanged
        );
    }

    let levels = twdata.index_historical_all(&DailyQuery::new(day)).await?;
    println!("\n{:<5} {:<7} {:<20} {:>10} {:>10}", "exch", "symbol", "name", "close", "change");
    for r in &levels.data {
        println!(
            "{:<5} {:<7} {:<20} {:>10} {:>10}",
            r.exchange,
            r.symbol,
            r.name,
            r.close.map(|d| d.to_string()).unwrap_or_default(),
            r.change.map(|d| d.to_string()).unwrap_or_default(),
        );
    }

    Ok(())
}
