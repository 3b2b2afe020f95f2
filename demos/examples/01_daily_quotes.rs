use twdata::{DailyQuery, Exchange};
use twdata_demos::common::{demo_day, fixture_twdata};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;
    let day = demo_day();

    // 1. One stock on one exchange.
    match twdata.stock_quote(Exchange::Twse, day, "2330").await? {
        Some(q) => println!("{} {} close={:?} change={:?}", q.symbol, q.name, q.close, q.change),
        None => println!("2330 did not trade on {day}"),
    }

    // 2. Every stock on both exchanges; TPEx warrants are left out.
    let report = twdata.stock_quotes_all(&DailyQuery::new(day)).await?;
    println!("\n## {} quotes on {day}", report.data.len());
    for q in &report.data {
        println!("{:<5} {:<6} {:>10} {:?}", q.exchange, q.symbol, q.close.unwrap_or_default(), q.volume);
    }
    for w in &report.warnings {
        println!("warning: {w}");
    }

    // 3. A day without trading is `None`, not an empty list.
    let sunday = DailyQuery::new(day + chrono::Days::new(5));
    println!("\n{:?}", twdata.stock_quotes(Exchange::Tpex, &sunday).await?);

    Ok(())
}
