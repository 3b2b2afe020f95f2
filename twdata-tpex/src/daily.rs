//! Single-day endpoints: `dailyQuotes`, `dailyTrade`, `balance`, `sbl`,
//! `peQryDate` and `marketStats`.

use chrono::NaiveDate;
use twdata_core::decode::{TPEX_INSTITUTIONAL, TpexEnvelope};
use twdata_core::{
    Exchange, MarketTrades, StockInstitutional, StockMargin, StockQuote, StockShortSales,
    StockValues, decode_rows,
};
use twdata_types::TwdataError;

pub(crate) const DAILY_QUOTES: &str = "afterTrading/dailyQuotes";
pub(crate) const DAILY_TRADE: &str = "insti/dailyTrade";
pub(crate) const BALANCE: &str = "margin/balance";
pub(crate) const SBL: &str = "margin/sbl";
pub(crate) const MARKET_STATS: &str = "afterTrading/marketStats";
pub(crate) const PE_QRY_DATE: &str = "afterTrading/peQryDate";

/// Warrant codes: six digits, `03`..`08` or `70`..`73`.
fn is_warrant(symbol: &str) -> bool {
    let b = symbol.as_bytes();
    if b.len() != 6 || !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    matches!((b[0], b[1]), (b'0', b'3'..=b'8') | (b'7', b'0'..=b'3'))
}

/// Decode `dailyQuotes`, leaving warrants out.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_quotes(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockQuote>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let table = env.table("dailyQuotes", 0)?;
    let rows: Vec<Vec<String>> = table
        .data
        .iter()
        .filter(|row| !row.first().is_some_and(|s| is_warrant(s.trim())))
        .cloned()
        .collect();
    decode_rows("dailyQuotes", &rows, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockQuote {
            date,
            exchange: Exchange::Tpex,
            symbol: head.text(0)?,
            name: head.text(1)?,
            open: v.num(2)?,
            high: v.num(3)?,
            low: v.num(4)?,
            close: v.num(0)?,
            volume: v.num(6)?,
            turnover: v.num(7)?,
            transaction: v.num(8)?,
            change: v.num(1)?,
        })
    })
    .map(Some)
}

/// Decode `dailyTrade` institutional flows.
///
/// Rows come from the first table that reports any; the layout is chosen by
/// row width.
///
/// # Errors
/// `SchemaMismatch` when a row has a width no known layout uses.
pub fn decode_institutional(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockInstitutional>>, TwdataError> {
    let index = if env.has_rows(0) {
        0
    } else if env.has_rows(1) {
        1
    } else {
        return Ok(None);
    };
    let table = env.table("dailyTrade", index)?;
    decode_rows("dailyTrade", &table.data, |cells| {
        let (head, values) = cells.split(2)?;
        Ok(StockInstitutional {
            date,
            exchange: Exchange::Tpex,
            symbol: head.text(0)?,
            name: head.text(1)?,
            institutional: TPEX_INSTITUTIONAL.decode(values)?,
        })
    })
    .map(Some)
}

/// Decode `margin/balance`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_margin(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockMargin>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let table = env.table("balance", 0)?;
    decode_rows("balance", &table.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockMargin {
            date,
            exchange: Exchange::Tpex,
            symbol: head.text(0)?,
            name: head.text(1)?,
            margin_balance_prev: v.num(0)?,
            margin_buy: v.num(1)?,
            margin_sell: v.num(2)?,
            margin_redeem: v.num(3)?,
            margin_balance: v.num(4)?,
            margin_quota: v.num(7)?,
            short_balance_prev: v.num(8)?,
            short_sell: v.num(9)?,
            short_buy: v.num(10)?,
            short_redeem: v.num(11)?,
            short_balance: v.num(12)?,
            short_quota: v.num(15)?,
            offset: v.num(16)?,
            note: v.text(17)?,
        })
    })
    .map(Some)
}

/// Decode `margin/sbl`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_short_sales(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockShortSales>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let table = env.table("sbl", 0)?;
    decode_rows("sbl", &table.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockShortSales {
            date,
            exchange: Exchange::Tpex,
            symbol: head.text(0)?,
            name: head.text(1)?,
            margin_short_balance_prev: v.num(0)?,
            margin_short_sell: v.num(1)?,
            margin_short_buy: v.num(2)?,
            margin_short_redeem: v.num(3)?,
            margin_short_balance: v.num(4)?,
            margin_short_quota: v.num(5)?,
            sbl_short_balance_prev: v.num(6)?,
            sbl_short_sale: v.num(7)?,
            sbl_short_return: v.num(8)?,
            sbl_short_adjustment: v.num(9)?,
            sbl_short_balance: v.num(10)?,
            sbl_short_quota: v.num(11)?,
            note: v.text(12)?,
        })
    })
    .map(Some)
}

/// Decode `peQryDate` valuation ratios.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_values(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockValues>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let table = env.table("peQryDate", 0)?;
    decode_rows("peQryDate", &table.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockValues {
            date,
            exchange: Exchange::Tpex,
            symbol: head.text(0)?,
            name: head.text(1)?,
            pe_ratio: v.num(0)?,
            pb_ratio: v.num(4)?,
            dividend_yield: v.num(3)?,
            dividend_year: v.roc_year(2)?,
        })
    })
    .map(Some)
}

/// Decode the market total from the second footer row of `marketStats`.
///
/// The footer is `[label, value, volume, transactions]`.
///
/// # Errors
/// `SchemaMismatch` when the footer row is missing or short.
pub fn decode_market_trades(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketTrades>, TwdataError> {
    let Some(table) = env.tables.first() else {
        return Ok(None);
    };
    if table.data.is_empty() {
        return Ok(None);
    }
    let Some(footer) = table.summary.get(1) else {
        return Err(TwdataError::schema_mismatch(
            "marketStats",
            format!("expected 2 summary rows, found {}", table.summary.len()),
        ));
    };
    let mut totals = decode_rows("marketStats", std::slice::from_ref(footer), |cells| {
        let (_, v) = cells.split(1)?;
        Ok(MarketTrades {
            date,
            exchange: Exchange::Tpex,
            trade_volume: v.num(1)?,
            trade_value: v.num(0)?,
            transaction: v.num(2)?,
        })
    })?;
    Ok(totals.pop())
}
