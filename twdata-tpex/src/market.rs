//! Market-wide summaries: `insti/summary`, the footer of `margin/balance`
//! and `highlight`.

use chrono::NaiveDate;
use twdata_core::decode::TpexEnvelope;
use twdata_core::{
    Cells, DecodeError, Exchange, MarketBreadth, MarketFlow, MarketInstitutional, MarketMargin,
    decode_rows,
};
use twdata_types::TwdataError;

pub(crate) const INSTI_SUMMARY: &str = "insti/summary";
pub(crate) const HIGHLIGHT: &str = "afterTrading/highlight";

/// Decode `insti/summary` institutional totals.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_institutional(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketInstitutional>, TwdataError> {
    let Some(table) = env.tables.first().filter(|t| !t.data.is_empty()) else {
        return Ok(None);
    };
    let institutional = decode_rows("summary", &table.data, |c| {
        Ok(MarketFlow::new(c.raw(0)?, c.num(1)?, c.num(2)?, c.num(3)?))
    })?;
    Ok(Some(MarketInstitutional {
        date,
        exchange: Exchange::Tpex,
        institutional,
    }))
}

/// Decode the market totals from the two footer rows of `margin/balance`.
///
/// The first footer row lays out unit totals like a stock row (margin from
/// value cell 0, short from value cell 8); the second holds the margin
/// amounts in the same order as the margin units.
///
/// # Errors
/// `SchemaMismatch` when a footer row is missing or short.
pub fn decode_margin(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketMargin>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let table = env.table("balance", 0)?;
    let (Some(units), Some(amounts)) = (table.summary.first(), table.summary.get(1)) else {
        return Err(TwdataError::schema_mismatch(
            "balance",
            format!("expected 2 summary rows, found {}", table.summary.len()),
        ));
    };
    margin_totals(units, amounts, date)
        .map(Some)
        .map_err(|e| e.into_error("balance"))
}

fn margin_totals(
    units: &[String],
    amounts: &[String],
    date: NaiveDate,
) -> Result<MarketMargin, DecodeError> {
    let (_, u) = Cells::new(units).split(2)?;
    let (_, a) = Cells::new(amounts).split(2)?;
    Ok(MarketMargin {
        date,
        exchange: Exchange::Tpex,
        margin_balance_prev: u.num(0)?,
        margin_buy: u.num(1)?,
        margin_sell: u.num(2)?,
        margin_redeem: u.num(3)?,
        margin_balance: u.num(4)?,
        short_balance_prev: u.num(8)?,
        short_sell: u.num(9)?,
        short_buy: u.num(10)?,
        short_redeem: u.num(11)?,
        short_balance: u.num(12)?,
        margin_balance_prev_value: a.num(0)?,
        margin_buy_value: a.num(1)?,
        margin_sell_value: a.num(2)?,
        margin_redeem_value: a.num(3)?,
        margin_balance_value: a.num(4)?,
    })
}

/// Decode breadth from cells 7 to 12 of the first `highlight` row.
///
/// # Errors
/// `SchemaMismatch` when the row is short.
pub fn decode_breadth(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketBreadth>, TwdataError> {
    let ok = env
        .stat
        .as_deref()
        .is_some_and(|s| s.trim().eq_ignore_ascii_case("ok"));
    if !ok {
        return Ok(None);
    }
    let table = env.table("highlight", 0)?;
    let Some(row) = table.data.first() else {
        return Ok(None);
    };
    let mut breadth = decode_rows("highlight", std::slice::from_ref(row), |c| {
        Ok(MarketBreadth {
            date,
            exchange: Exchange::Tpex,
            up: c.num(7)?,
            limit_up: c.num(8)?,
            down: c.num(9)?,
            limit_down: c.num(10)?,
            unchanged: c.num(11)?,
            unmatched: c.num(12)?,
            not_applicable: None,
        })
    })?;
    Ok(breadth.pop())
}
