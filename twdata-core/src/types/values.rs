use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// Daily valuation ratios of one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockValues {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Security code.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Price to earnings; `None` when earnings are negative or undisclosed.
    pub pe_ratio: Option<Decimal>,
    /// Price to book.
    pub pb_ratio: Option<Decimal>,
    /// Dividend yield, in percent.
    pub dividend_yield: Option<Decimal>,
    /// Western year of the dividend the yield is based on.
    pub dividend_year: Option<i32>,
}

/// Daily foreign-investor (FINI) shareholding of one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StockFiniHoldings {
    pub date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub issued_shares: Option<Decimal>,
    /// Shares foreign investors may still buy.
    pub available_shares: Option<Decimal>,
    pub shares_held: Option<Decimal>,
    pub available_percent: Option<Decimal>,
    pub held_percent: Option<Decimal>,
    /// Statutory ceiling on foreign holding, in percent.
    pub upper_limit_percent: Option<Decimal>,
}
