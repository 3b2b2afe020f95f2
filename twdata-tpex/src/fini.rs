//! Foreign holdings of OTC stocks, published as an HTML page on MOPS rather
//! than the TPEx portal.

use chrono::{Datelike, NaiveDate};
use twdata_core::normalize::{html_has_heading, html_table_rows};
use twdata_core::{Exchange, FetchRequest, StockFiniHoldings, decode_rows};
use twdata_types::TwdataError;

/// MOPS page serving the OTC foreign-holdings table.
pub const MOPS_FINI_URL: &str = "https://mops.twse.com.tw/server-java/t13sa150_otc";

/// Heading MOPS renders instead of a table on days without data.
const NO_DATA: &str = "查無所需資料";

/// Header rows above the first data row.
const HEADER_ROWS: usize = 2;

/// Form request for `date`.
#[must_use]
pub fn fini_request(date: NaiveDate) -> FetchRequest {
    FetchRequest::post(MOPS_FINI_URL)
        .param("years", date.year().to_string())
        .param("months", format!("{:02}", date.month()))
        .param("days", format!("{:02}", date.day()))
        .param("bcode", "")
        .param("step", "2")
}

/// Decode the holdings table (`[symbol, name, issued, available, held,
/// available %, held %, upper limit %]`).
///
/// Names carry an English abbreviation in parentheses, which is cut.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_fini_holdings(
    page: &str,
    date: NaiveDate,
) -> Result<Option<Vec<StockFiniHoldings>>, TwdataError> {
    if html_has_heading(page, NO_DATA) {
        return Ok(None);
    }
    let rows = html_table_rows(page, 0);
    let body = rows.get(HEADER_ROWS..).unwrap_or_default();
    decode_rows("t13sa150_otc", body, |c| {
        let name = c.text(1)?;
        let name = name.split('(').next().unwrap_or_default().trim().to_string();
        Ok(StockFiniHoldings {
            date,
            exchange: Exchange::Tpex,
            symbol: c.text(0)?,
            name,
            issued_shares: c.num(2)?,
            available_shares: c.num(3)?,
            shares_held: c.num(4)?,
            available_percent: c.num(5)?,
            held_percent: c.num(6)?,
            upper_limit_percent: c.num(7)?,
        })
    })
    .map(Some)
}
