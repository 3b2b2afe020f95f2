use twdata::ListingQuery;
use twdata_demos::common::fixture_twdata;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;

    for year in [None, Some(2023), Some(2024)] {
        let mut q = ListingQuery::default();
        if let Some(y) = year {
            q = q.with_year(y);
        }
        let report = twdata.listing_applications_all(&q).await?;
        println!("## {}", year.map_or_else(|| "all years".to_string(), |y| y.to_string()));
        for a in &report.data {
            println!(
                "{} {:<6} {:<12} applied {} listed {:?} underwriter {:?}",
                a.exchange, a.symbol, a.name, a.application_date, a.listed_date, a.underwriter
            );
        }
    }

    Ok(())
}
