use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

use super::InvestorCategory;

/// Market-wide buy/sell of one investor group.
///
/// `investor` keeps the portal's label (with `合計` spelled `三大法人`);
/// `category` is set when the label names a known [`InvestorCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFlow {
    /// Portal label, trimmed.
    pub investor: String,
    /// Normalized category of the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<InvestorCategory>,
    /// Value bought.
    pub total_buy: Option<Decimal>,
    /// Value sold.
    pub total_sell: Option<Decimal>,
    /// Net value bought.
    pub difference: Option<Decimal>,
}

impl MarketFlow {
    /// Flow labelled `label`, categorized when the label is recognized.
    #[must_use]
    pub fn new(
        label: &str,
        total_buy: Option<Decimal>,
        total_sell: Option<Decimal>,
        difference: Option<Decimal>,
    ) -> Self {
        let category = InvestorCategory::from_label(label);
        let investor = match category {
            Some(InvestorCategory::Total) => InvestorCategory::Total.label().to_string(),
            _ => label.trim().to_string(),
        };
        Self {
            investor,
            category,
            total_buy,
            total_sell,
            difference,
        }
    }
}

/// Market-wide institutional trading for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInstitutional {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Groups in the portal's order.
    pub institutional: Vec<MarketFlow>,
}

impl MarketInstitutional {
    /// Flow of one category, if reported.
    #[must_use]
    pub fn flow(&self, category: InvestorCategory) -> Option<&MarketFlow> {
        self.institutional
            .iter()
            .find(|f| f.category == Some(category))
    }
}

/// Market-wide margin purchase and short sale totals for one day.
///
/// Share counts are in trading units; the `_value` fields are the margin
/// purchase amounts in thousands of NTD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct MarketMargin {
    pub date: NaiveDate,
    pub exchange: Exchange,
    pub margin_buy: Option<Decimal>,
    pub margin_sell: Option<Decimal>,
    pub margin_redeem: Option<Decimal>,
    pub margin_balance_prev: Option<Decimal>,
    pub margin_balance: Option<Decimal>,
    pub short_buy: Option<Decimal>,
    pub short_sell: Option<Decimal>,
    pub short_redeem: Option<Decimal>,
    pub short_balance_prev: Option<Decimal>,
    pub short_balance: Option<Decimal>,
    pub margin_buy_value: Option<Decimal>,
    pub margin_sell_value: Option<Decimal>,
    pub margin_redeem_value: Option<Decimal>,
    pub margin_balance_prev_value: Option<Decimal>,
    pub margin_balance_value: Option<Decimal>,
}

/// Advancing, declining and unchanged issue counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBreadth {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Issues that closed higher.
    pub up: Option<Decimal>,
    /// Of which closed limit-up.
    pub limit_up: Option<Decimal>,
    /// Issues that closed lower.
    pub down: Option<Decimal>,
    /// Of which closed limit-down.
    pub limit_down: Option<Decimal>,
    /// Issues that closed flat.
    pub unchanged: Option<Decimal>,
    /// Issues without a match.
    pub unmatched: Option<Decimal>,
    /// Issues without a comparable price; only TWSE reports this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable: Option<Decimal>,
}
