use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// Daily margin purchase and margin short balances of one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StockMargin {
    pub date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub margin_buy: Option<Decimal>,
    pub margin_sell: Option<Decimal>,
    pub margin_redeem: Option<Decimal>,
    pub margin_balance_prev: Option<Decimal>,
    pub margin_balance: Option<Decimal>,
    pub margin_quota: Option<Decimal>,
    pub short_buy: Option<Decimal>,
    pub short_sell: Option<Decimal>,
    pub short_redeem: Option<Decimal>,
    pub short_balance_prev: Option<Decimal>,
    pub short_balance: Option<Decimal>,
    pub short_quota: Option<Decimal>,
    /// Shares offset between margin purchases and short sales.
    pub offset: Option<Decimal>,
    /// Free-text remark column, trimmed.
    pub note: String,
}

/// Daily margin-short and securities-borrowing (SBL) short sale balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StockShortSales {
    pub date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub margin_short_balance_prev: Option<Decimal>,
    pub margin_short_sell: Option<Decimal>,
    pub margin_short_buy: Option<Decimal>,
    pub margin_short_redeem: Option<Decimal>,
    pub margin_short_balance: Option<Decimal>,
    pub margin_short_quota: Option<Decimal>,
    pub sbl_short_balance_prev: Option<Decimal>,
    pub sbl_short_sale: Option<Decimal>,
    pub sbl_short_return: Option<Decimal>,
    pub sbl_short_adjustment: Option<Decimal>,
    pub sbl_short_balance: Option<Decimal>,
    pub sbl_short_quota: Option<Decimal>,
    /// Free-text remark column, trimmed.
    pub note: String,
}
