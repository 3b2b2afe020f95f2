use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// End-of-day quote for one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Security code.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Opening price.
    pub open: Option<Decimal>,
    /// Session high.
    pub high: Option<Decimal>,
    /// Session low.
    pub low: Option<Decimal>,
    /// Closing price.
    pub close: Option<Decimal>,
    /// Shares traded.
    pub volume: Option<Decimal>,
    /// Traded value.
    pub turnover: Option<Decimal>,
    /// Number of transactions.
    pub transaction: Option<Decimal>,
    /// Signed change against the previous close.
    pub change: Option<Decimal>,
}
