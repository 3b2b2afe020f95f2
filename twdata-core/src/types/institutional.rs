use core::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// Institutional investor category as labelled by the portals.
///
/// Which categories appear, and in which order, depends on the row layout the
/// portal used for the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestorCategory {
    /// Foreign and mainland investors, excluding foreign dealers.
    #[serde(rename = "外資及陸資(不含外資自營商)")]
    ForeignExcludingDealers,
    /// Foreign dealers.
    #[serde(rename = "外資自營商")]
    ForeignDealers,
    /// Foreign and mainland investors.
    #[serde(rename = "外資及陸資")]
    Foreign,
    /// Investment trusts.
    #[serde(rename = "投信")]
    InvestmentTrust,
    /// Dealers (proprietary plus hedging).
    #[serde(rename = "自營商")]
    Dealers,
    /// Dealers trading on their own account.
    #[serde(rename = "自營商(自行買賣)")]
    DealersProprietary,
    /// Dealers hedging warrant positions.
    #[serde(rename = "自營商(避險)")]
    DealersHedging,
    /// The three major institutional investors combined.
    #[serde(rename = "三大法人")]
    Total,
}

impl InvestorCategory {
    /// Portal label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ForeignExcludingDealers => "外資及陸資(不含外資自營商)",
            Self::ForeignDealers => "外資自營商",
            Self::Foreign => "外資及陸資",
            Self::InvestmentTrust => "投信",
            Self::Dealers => "自營商",
            Self::DealersProprietary => "自營商(自行買賣)",
            Self::DealersHedging => "自營商(避險)",
            Self::Total => "三大法人",
        }
    }

    /// Category named by a portal label, including the `合計` spellings the
    /// market-wide summaries use. Full-width parentheses are accepted.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().replace('（', "(").replace('）', ")");
        let category = match label.as_str() {
            "外資及陸資(不含外資自營商)" | "外資及陸資(不含自營商)" => {
                Self::ForeignExcludingDealers
            }
            "外資自營商" => Self::ForeignDealers,
            "外資及陸資" | "外資及陸資合計" => Self::Foreign,
            "投信" => Self::InvestmentTrust,
            "自營商" | "自營商合計" => Self::Dealers,
            "自營商(自行買賣)" => Self::DealersProprietary,
            "自營商(避險)" => Self::DealersHedging,
            "三大法人" | "三大法人合計" | "合計" => Self::Total,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for InvestorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buy/sell flow of one investor category.
///
/// Aggregate entries carry only `difference`; their `total_buy` and
/// `total_sell` are `None` and omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorFlow {
    /// Category label.
    pub investor: InvestorCategory,
    /// Shares bought.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_buy: Option<Decimal>,
    /// Shares sold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sell: Option<Decimal>,
    /// Net shares bought.
    pub difference: Option<Decimal>,
}

impl InvestorFlow {
    /// Entry with buy, sell and net figures.
    #[must_use]
    pub const fn full(
        investor: InvestorCategory,
        total_buy: Option<Decimal>,
        total_sell: Option<Decimal>,
        difference: Option<Decimal>,
    ) -> Self {
        Self {
            investor,
            total_buy,
            total_sell,
            difference,
        }
    }

    /// Aggregate entry carrying only the net figure.
    #[must_use]
    pub const fn net_only(investor: InvestorCategory, difference: Option<Decimal>) -> Self {
        Self {
            investor,
            total_buy: None,
            total_sell: None,
            difference,
        }
    }
}

/// Daily institutional trading of one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInstitutional {
    /// Trading day.
    pub date: NaiveDate,
    /// Source portal.
    pub exchange: Exchange,
    /// Security code.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Flows in the portal's column order; the last entry is the total.
    pub institutional: Vec<InvestorFlow>,
}

impl StockInstitutional {
    /// Flow of one category, if the row layout reported it.
    #[must_use]
    pub fn flow(&self, investor: InvestorCategory) -> Option<&InvestorFlow> {
        self.institutional.iter().find(|f| f.investor == investor)
    }
}
