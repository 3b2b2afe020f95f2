//! Market-wide summaries: `BFI82U`, the `MI_MARGN` totals and the breadth
//! table of `MI_INDEX`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use twdata_core::decode::TwseEnvelope;
use twdata_core::normalize::parse_numeric_str;
use twdata_core::{
    Cells, Exchange, MarketBreadth, MarketFlow, MarketInstitutional, MarketMargin, decode_rows,
};
use twdata_types::TwdataError;

pub(crate) const BFI82U: &str = "fund/BFI82U";

/// `MI_INDEX` table of advancing/declining counts.
const BREADTH_TABLE: usize = 7;
/// `MI_MARGN` (`selectType=MS`) table of market totals.
const TOTALS_TABLE: usize = 0;

/// Decode `BFI82U` institutional totals.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_institutional(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketInstitutional>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let institutional = decode_rows("BFI82U", &env.data, |c| {
        Ok(MarketFlow::new(c.raw(0)?, c.num(1)?, c.num(2)?, c.num(3)?))
    })?;
    Ok(Some(MarketInstitutional {
        date,
        exchange: Exchange::Twse,
        institutional,
    }))
}

/// Decode the `MI_MARGN` (`selectType=MS`) totals.
///
/// Table 0 holds three rows (margin units, short units, margin value), each a
/// label followed by buy, sell, redeem, previous balance and balance.
///
/// # Errors
/// `SchemaMismatch` when the table is missing or has fewer than fifteen
/// figures.
pub fn decode_margin(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketMargin>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let table = env.table("MI_MARGN", TOTALS_TABLE)?;
    let figures: Vec<String> = table
        .data
        .iter()
        .flat_map(|row| row.iter().skip(1).cloned())
        .collect();
    let mut totals = decode_rows("MI_MARGN", std::slice::from_ref(&figures), |v| {
        Ok(MarketMargin {
            date,
            exchange: Exchange::Twse,
            margin_buy: v.num(0)?,
            margin_sell: v.num(1)?,
            margin_redeem: v.num(2)?,
            margin_balance_prev: v.num(3)?,
            margin_balance: v.num(4)?,
            short_buy: v.num(5)?,
            short_sell: v.num(6)?,
            short_redeem: v.num(7)?,
            short_balance_prev: v.num(8)?,
            short_balance: v.num(9)?,
            margin_buy_value: v.num(10)?,
            margin_sell_value: v.num(11)?,
            margin_redeem_value: v.num(12)?,
            margin_balance_prev_value: v.num(13)?,
            margin_balance_value: v.num(14)?,
        })
    })?;
    Ok(totals.pop())
}

/// `"5,000(120)"` as the count and its parenthesized limit count.
fn with_limit(cell: &str) -> (Option<Decimal>, Option<Decimal>) {
    let cell = cell.replace(')', "");
    match cell.split_once('(') {
        Some((count, limit)) => (parse_numeric_str(count), parse_numeric_str(limit)),
        None => (parse_numeric_str(&cell), None),
    }
}

/// Decode the stock column of `MI_INDEX` table 7.
///
/// Rows are up (limit up), down (limit down), unchanged, unmatched and not
/// applicable.
///
/// # Errors
/// `SchemaMismatch` when the table is missing or short.
pub fn decode_breadth(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketBreadth>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let table = env.table("MI_INDEX", BREADTH_TABLE)?;
    let counts = decode_rows("MI_INDEX", &table.data, |c| c.text(2))?;
    let mut breadth = decode_rows("MI_INDEX", std::slice::from_ref(&counts), |c: Cells<'_>| {
        let (up, limit_up) = with_limit(c.raw(0)?);
        let (down, limit_down) = with_limit(c.raw(1)?);
        Ok(MarketBreadth {
            date,
            exchange: Exchange::Twse,
            up,
            limit_up,
            down,
            limit_down,
            unchanged: c.num(2)?,
            unmatched: c.num(3)?,
            not_applicable: c.num(4)?,
        })
    })?;
    Ok(breadth.pop())
}
