//! `BFIAMU` sector index trading and the complements derived from it, and
//! the `MI_5MINS_INDEX` intraday levels summarized per index.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use twdata_core::decode::TwseEnvelope;
use twdata_core::index_catalog::{
    TWSE_CHEMICAL_BIOTECH, TWSE_ELECTRONICS, TWSE_FINANCE, TWSE_NON_ELECTRONICS,
    TWSE_NON_FINANCE, TWSE_NON_FINANCE_NON_ELECTRONICS,
};
use twdata_core::{
    Complement, Exchange, IndexHistorical, IndexTrades, MarketTrades, decode_rows, index_symbol,
    market_weight, synthesize_complements,
};
use twdata_types::TwdataError;

pub(crate) const BFIAMU: &str = "afterTrading/BFIAMU";
pub(crate) const MI_5MINS_INDEX: &str = "TAIEX/MI_5MINS_INDEX";

/// Aggregate sectors whose members are listed on their own; left out of the
/// market total the complements are subtracted from.
pub const BASE_EXCLUSIONS: &[&str] = &[TWSE_CHEMICAL_BIOTECH, TWSE_ELECTRONICS];

/// Market-excluding-sector indices TWSE publishes without trading figures.
pub const COMPLEMENTS: &[Complement] = &[
    Complement {
        target: TWSE_NON_FINANCE,
        name: "未含金融保險股指數",
        subtract: &[TWSE_FINANCE],
    },
    Complement {
        target: TWSE_NON_ELECTRONICS,
        name: "未含電子股指數",
        subtract: &[TWSE_ELECTRONICS],
    },
    Complement {
        target: TWSE_NON_FINANCE_NON_ELECTRONICS,
        name: "未含金融電子股指數",
        subtract: &[TWSE_FINANCE, TWSE_ELECTRONICS],
    },
];

/// Decode `BFIAMU` rows and append the complement indices.
///
/// Weights are relative to `market`. Without a market total nothing is
/// returned, matching the complements' own requirement.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_index_trades(
    env: &TwseEnvelope,
    date: NaiveDate,
    market: Option<&MarketTrades>,
) -> Result<Option<Vec<IndexTrades>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let Some(market) = market else {
        tracing::debug!(target: "twdata::twse", %date, "no market total; index trades unavailable");
        return Ok(None);
    };
    let decoded = decode_rows("BFIAMU", &env.data, |c| {
        let name = c.text(0)?;
        let Some(symbol) = index_symbol(&name) else {
            tracing::debug!(target: "twdata::twse", name = %name, "uncatalogued index row dropped");
            return Ok(None);
        };
        let trade_value = c.num(2)?;
        Ok(Some(IndexTrades {
            date,
            exchange: Exchange::Twse,
            symbol: symbol.to_string(),
            name,
            trade_volume: c.num(1)?,
            trade_value,
            trade_weight: market_weight(trade_value, market.trade_value),
        }))
    })?;
    let mut rows: Vec<IndexTrades> = decoded.into_iter().flatten().collect();
    if let Some(extra) = synthesize_complements(&rows, Some(market), BASE_EXCLUSIONS, COMPLEMENTS) {
        rows.extend(extra);
    }
    Ok(Some(rows))
}

/// One row of `MI_5MINS_INDEX`: the time and a level per index column.
type Tick = (String, Vec<Option<Decimal>>);

/// Decode `MI_5MINS_INDEX` into one session summary per catalogued index.
///
/// The first tick of each column is the previous close. Open and close are
/// the earliest and latest of the remaining ticks, high and low their
/// extremes, and change is close minus the previous close.
///
/// # Errors
/// `SchemaMismatch` when a row has fewer levels than `fields` names.
pub fn decode_index_historical(
    env: &TwseEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<IndexHistorical>>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let names = env.fields.get(1..).unwrap_or_default();
    let ticks: Vec<Tick> = decode_rows("MI_5MINS_INDEX", &env.data, |c| {
        let (head, v) = c.split(1)?;
        let levels: Vec<Option<Decimal>> =
            (0..names.len()).map(|i| v.num(i)).collect::<Result<_, _>>()?;
        Ok((head.text(0)?, levels))
    })?;

    let mut rows = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let name = name.trim();
        let Some(symbol) = index_symbol(name) else {
            tracing::debug!(target: "twdata::twse", name = %name, "uncatalogued index column dropped");
            continue;
        };
        let series: Vec<(&str, Decimal)> = ticks
            .iter()
            .filter_map(|(time, levels)| levels[i].map(|p| (time.as_str(), p)))
            .collect();
        rows.push(session(date, symbol, name, &series));
    }
    Ok(Some(rows))
}

fn session(
    date: NaiveDate,
    symbol: &str,
    name: &str,
    series: &[(&str, Decimal)],
) -> IndexHistorical {
    let (prev, rest) = match series.split_first() {
        Some((first, rest)) => (Some(first.1), rest),
        None => (None, series),
    };
    let open = rest.iter().min_by_key(|(t, _)| *t).map(|(_, p)| *p);
    let close = rest.iter().max_by_key(|(t, _)| *t).map(|(_, p)| *p);
    let high = rest.iter().map(|(_, p)| *p).max();
    let low = rest.iter().map(|(_, p)| *p).min();
    let change = close.zip(prev).map(|(c, p)| c - p);
    IndexHistorical {
        date,
        exchange: Exchange::Twse,
        symbol: symbol.to_string(),
        name: name.to_string(),
        open,
        high,
        low,
        close,
        change,
    }
}
