use chrono::NaiveDate;
use twdata::{DailyQuery, Exchange, StockInstitutional};
use twdata_demos::common::{demo_day, fixture_twdata};

fn print_flows(label: &str, rows: &[StockInstitutional]) {
    println!("\n## {label}");
    for row in rows {
        println!("{} {} ({} categories)", row.symbol, row.name, row.institutional.len());
        for f in &row.institutional {
            println!(
                "  {:<28} buy={:<12} sell={:<12} net={}",
                format!("{:?}", f.investor),
                f.total_buy.map(|d| d.to_string()).unwrap_or_default(),
                f.total_sell.map(|d| d.to_string()).unwrap_or_default(),
                f.difference.map(|d| d.to_string()).unwrap_or_default(),
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;

    // The portals changed their column layout over the years; each width
    // decodes to its own set of investor categories.
    let days = [
        ("TWSE, 17 columns", demo_day()),
        ("TWSE, 14 columns", NaiveDate::from_ymd_opt(2017, 12, 15).unwrap_or_default()),
        ("TWSE, 10 columns", NaiveDate::from_ymd_opt(2012, 5, 2).unwrap_or_default()),
    ];
    for (label, day) in days {
        let q = DailyQuery::new(day).with_symbol("2330");
        if let Some(rows) = twdata.stock_institutional(Exchange::Twse, &q).await? {
            print_flows(label, &rows);
        }
    }

    if let Some(row) = twdata.stock_flows(Exchange::Tpex, demo_day(), "6488").await? {
        print_flows("TPEx, 22 columns", std::slice::from_ref(&row));
    }

    Ok(())
}
