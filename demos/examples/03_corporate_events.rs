use chrono::NaiveDate;
use twdata::{AnnouncementQuery, Exchange, RangeQuery};
use twdata_demos::common::fixture_twdata;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let twdata = fixture_twdata()?;
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    let january = RangeQuery::new(start, end)?;

    // TWSE dividends merge per-symbol detail unless told otherwise.
    println!("## Dividends (with detail)");
    for r in twdata.stock_dividends_all(&january).await?.data {
        println!(
            "{} {:<6} {} dividend={:?} cash={:?}",
            r.exchange, r.symbol, r.date, r.dividend, r.cash_dividend
        );
    }

    println!("\n## Dividends (summary only)");
    let summary = twdata
        .stock_dividends(Exchange::Twse, &january.clone().with_detail(false))
        .await?;
    for r in summary {
        println!("{} {:<6} cash={:?}", r.exchange, r.symbol, r.cash_dividend);
    }

    println!("\n## Capital reductions");
    for r in twdata.capital_reductions_all(&january).await?.data {
        println!(
            "{} {:<6} halt={:?} resume={} per-thousand={:?} refund={:?}",
            r.exchange, r.symbol, r.halt_date, r.resume_date, r.shares_per_thousand, r.refund_per_share
        );
    }

    println!("\n## Par-value changes");
    for r in twdata.stock_splits_all(&january).await?.data {
        println!("{} {:<6} halt={:?} resume={}", r.exchange, r.symbol, r.halt_date, r.resume_date);
    }

    // Announcements only fetch detail when asked to.
    println!("\n## Upcoming");
    let detailed = AnnouncementQuery::default().with_detail(true);
    for r in twdata.dividend_announcements_all(&detailed).await?.data {
        println!("dividend   {} {:<6} {} cash={:?}", r.exchange, r.symbol, r.exdividend_date, r.cash_dividend);
    }
    for r in twdata.capital_reduction_announcements_all(&detailed).await?.data {
        println!("reduction  {} {:<6} {} resume={:?}", r.exchange, r.symbol, r.halt_date, r.resume_date);
    }
    for r in twdata.split_announcements_all(&detailed).await?.data {
        println!(
            "par-value  {} {:<6} {} new face value={:?}",
            r.exchange, r.symbol, r.halt_date, r.new_face_value
        );
    }

    Ok(())
}
