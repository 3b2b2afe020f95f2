//! Single-day endpoints: `MI_INDEX`, `T86`, `MI_MARGN`, `TWT93U`, `BWIBBU_d`
//! and `MI_QFIIS`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use twdata_core::decode::{TWSE_INSTITUTIONAL, TwseEnvelope};
use twdata_core::{
    Exchange, MarketTrades, StockFiniHoldings, StockInstitutional, StockMargin, StockQuote,
    StockShortSales, StockValues, decode_rows,
};
use twdata_types::TwdataError;

pub(crate) const MI_INDEX: &str = "afterTrading/MI_INDEX";
pub(crate) const T86: &str = "fund/T86";
pub(crate) const MI_MARGN: &str = "marginTrading/MI_MARGN";
pub(crate) const TWT93U: &str = "marginTrading/TWT93U";
pub(crate) const BWIBBU_D: &str = "afterTrading/BWIBBU_d";
pub(crate) const MI_QFIIS: &str = "fund/MI_QFIIS";

/// `MI_INDEX` table holding per-security quotes.
const QUOTES_TABLE: usize = 8;
/// `MI_INDEX` table whose last row is the market-wide total.
const MARKET_TABLE: usize = 6;
/// `MI_MARGN` table holding per-security balances.
const MARGIN_TABLE: usize = 1;

/// Decode `MI_INDEX` (`type=ALLBUT0999`) quotes.
///
/// # Errors
/// `SchemaMismatch` when the quotes table is missing or a row is short.
pub fn decode_quotes(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockQuote>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let table = env.table("MI_INDEX", QUOTES_TABLE)?;
    decode_rows("MI_INDEX", &table.data, |cells| {
        let (head, v) = cells.split(2)?;
        // v7 is a colored sign marker, v8 the magnitude
        let magnitude = v.num(8)?;
        let change = if v.raw(7)?.contains("green") {
            magnitude.map(negate)
        } else {
            magnitude
        };
        Ok(StockQuote {
            date,
            exchange: Exchange::Twse,
            symbol: head.text(0)?,
            name: head.text(1)?,
            open: v.num(3)?,
            high: v.num(4)?,
            low: v.num(5)?,
            close: v.num(6)?,
            volume: v.num(0)?,
            turnover: v.num(2)?,
            transaction: v.num(1)?,
            change,
        })
    })
    .map(Some)
}

/// Decode the market-wide total from the last row of `MI_INDEX` table 6.
///
/// # Errors
/// `SchemaMismatch` when the table is missing or its last row is short.
pub fn decode_market_trades(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<MarketTrades>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let table = env.table("MI_INDEX", MARKET_TABLE)?;
    let Some(last) = table.data.last() else {
        return Ok(None);
    };
    let mut totals = decode_rows("MI_INDEX", std::slice::from_ref(last), |cells| {
        let (_, v) = cells.split(1)?;
        Ok(MarketTrades {
            date,
            exchange: Exchange::Twse,
            trade_volume: v.num(1)?,
            trade_value: v.num(0)?,
            transaction: v.num(2)?,
        })
    })?;
    Ok(totals.pop())
}

/// Decode `T86` institutional flows, selecting the layout by row width.
///
/// # Errors
/// `SchemaMismatch` when a row has a width no known layout uses.
pub fn decode_institutional(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockInstitutional>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    decode_rows("T86", &env.data, |cells| {
        let (head, values) = cells.split(2)?;
        Ok(StockInstitutional {
            date,
            exchange: Exchange::Twse,
            symbol: head.text(0)?,
            name: head.text(1)?,
            institutional: TWSE_INSTITUTIONAL.decode(values)?,
        })
    })
    .map(Some)
}

/// Decode `MI_MARGN` (`selectType=ALL`) margin balances.
///
/// # Errors
/// `SchemaMismatch` when the balance table is missing or a row is short.
pub fn decode_margin(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockMargin>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let table = env.table("MI_MARGN", MARGIN_TABLE)?;
    decode_rows("MI_MARGN", &table.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockMargin {
            date,
            exchange: Exchange::Twse,
            symbol: head.text(0)?,
            name: head.text(1)?,
            margin_buy: v.num(0)?,
            margin_sell: v.num(1)?,
            margin_redeem: v.num(2)?,
            margin_balance_prev: v.num(3)?,
            margin_balance: v.num(4)?,
            margin_quota: v.num(5)?,
            short_buy: v.num(6)?,
            short_sell: v.num(7)?,
            short_redeem: v.num(8)?,
            short_balance_prev: v.num(9)?,
            short_balance: v.num(10)?,
            short_quota: v.num(11)?,
            offset: v.num(12)?,
            note: v.text(13)?,
        })
    })
    .map(Some)
}

/// Decode `TWT93U` short sale balances.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_short_sales(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockShortSales>>, TwdataError> {
    if !env.is_ok() || env.data.is_empty() {
        return Ok(None);
    }
    decode_rows("TWT93U", &env.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockShortSales {
            date,
            exchange: Exchange::Twse,
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

/// Decode `BWIBBU_d` (`selectType=ALL`) valuation ratios.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_values(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockValues>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    decode_rows("BWIBBU_d", &env.data, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(StockValues {
            date,
            exchange: Exchange::Twse,
            symbol: head.text(0)?,
            name: head.text(1)?,
            pe_ratio: v.num(2)?,
            pb_ratio: v.num(3)?,
            dividend_yield: v.num(0)?,
            dividend_year: v.roc_year(1)?,
        })
    })
    .map(Some)
}

/// Decode `MI_QFIIS` foreign shareholding; the ISIN column is skipped.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_fini_holdings(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<StockFiniHoldings>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    decode_rows("MI_QFIIS", &env.data, |cells| {
        let (head, v) = cells.split(3)?;
        Ok(StockFiniHoldings {
            date,
            exchange: Exchange::Twse,
            symbol: head.text(0)?,
            name: head.text(1)?,
            issued_shares: v.num(0)?,
            available_shares: v.num(1)?,
            shares_held: v.num(2)?,
            available_percent: v.num(3)?,
            held_percent: v.num(4)?,
            upper_limit_percent: v.num(5)?,
        })
    })
    .map(Some)
}

fn negate(d: Decimal) -> Decimal {
    if d.is_zero() { d } else { -d }
}
