use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// Daily trading totals of one sector index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexTrades {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Index code (`IX....`).
    pub symbol: String,
    /// Index display name.
    pub name: String,
    /// Shares traded in the sector.
    pub trade_volume: Option<Decimal>,
    /// Value traded in the sector.
    pub trade_value: Option<Decimal>,
    /// Share of the market's traded value, in percent (two decimals).
    pub trade_weight: Option<Decimal>,
}

/// Daily market-wide trading totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrades {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Shares traded across the market.
    pub trade_volume: Option<Decimal>,
    /// Value traded across the market.
    pub trade_value: Option<Decimal>,
    /// Number of transactions.
    pub transaction: Option<Decimal>,
}

/// Daily open, high, low and close of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexHistorical {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Index code (`IX....`).
    pub symbol: String,
    /// Index display name.
    pub name: String,
    /// First level of the session.
    pub open: Option<Decimal>,
    /// Session high.
    pub high: Option<Decimal>,
    /// Session low.
    pub low: Option<Decimal>,
    /// Closing level.
    pub close: Option<Decimal>,
    /// Close minus the previous close.
    pub change: Option<Decimal>,
}
