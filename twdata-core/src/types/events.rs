//! Corporate-event records: ex-right/ex-dividend, capital reductions and
//! par-value changes, each as a result over a date range and as an upcoming
//! announcement, together with the detail records that supplement them.
#![allow(missing_docs)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

use crate::normalize::ReportDate;
use crate::unify::MergeDetail;

/// Ex-right / ex-dividend result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDividend {
    /// Ex-right / ex-dividend day.
    pub date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub previous_close: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    /// Combined right and dividend value.
    pub dividend: Option<Decimal>,
    /// `權`, `息` or `權息`.
    pub dividend_type: String,
    pub limit_up_price: Option<Decimal>,
    pub limit_down_price: Option<Decimal>,
    pub opening_reference_price: Option<Decimal>,
    pub exdividend_reference_price: Option<Decimal>,
    pub latest_financial_report_date: Option<ReportDate>,
    pub latest_net_asset_value_per_share: Option<Decimal>,
    pub latest_earnings_per_share: Option<Decimal>,
    /// Capital increase right code (TPEx only).
    pub capital_increase_right: Option<String>,
    pub cash_dividend: Option<Decimal>,
    pub stock_dividend_shares: Option<Decimal>,
    pub employee_bonus_shares: Option<Decimal>,
    pub paid_capital_increase: Option<Decimal>,
    pub subscription_price: Option<Decimal>,
    pub public_offering: Option<Decimal>,
    pub employee_subscription: Option<Decimal>,
    pub existing_shareholder_subscription: Option<Decimal>,
    pub shares_per_thousand: Option<Decimal>,
}

/// Per-symbol dividend detail (TWSE `TWT49UDetail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendDetail {
    pub name: String,
    pub cash_dividend: Option<Decimal>,
    pub stock_dividend_shares: Option<Decimal>,
    pub employee_bonus_shares: Option<Decimal>,
    pub paid_capital_increase: Option<Decimal>,
    pub subscription_price: Option<Decimal>,
    pub public_offering: Option<Decimal>,
    pub employee_subscription: Option<Decimal>,
    pub existing_shareholder_subscription: Option<Decimal>,
    pub shares_per_thousand: Option<Decimal>,
}

/// Upcoming ex-right / ex-dividend announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendAnnouncement {
    pub exdividend_date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    /// `權`, `息` or `權息`.
    pub dividend_type: String,
    pub stock_dividend_ratio: Option<Decimal>,
    pub cash_capital_increase_ratio: Option<Decimal>,
    pub subscription_price: Option<Decimal>,
    pub cash_dividend: Option<Decimal>,
    pub latest_financial_report_date: Option<ReportDate>,
    pub latest_net_asset_value_per_share: Option<Decimal>,
    pub latest_earnings_per_share: Option<Decimal>,
    pub stock_dividend_shares: Option<Decimal>,
    pub employee_bonus_shares: Option<Decimal>,
    pub paid_capital_increase: Option<Decimal>,
    pub public_offering: Option<Decimal>,
    pub employee_subscription: Option<Decimal>,
    pub existing_shareholder_subscription: Option<Decimal>,
    pub shares_per_thousand: Option<Decimal>,
}

/// Capital reduction result (trading resumed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalReduction {
    pub resume_date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub previous_close: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    pub limit_up_price: Option<Decimal>,
    pub limit_down_price: Option<Decimal>,
    pub opening_reference_price: Option<Decimal>,
    pub exright_reference_price: Option<Decimal>,
    pub reason: String,
    pub halt_date: Option<NaiveDate>,
    /// New shares issued per thousand old shares.
    pub shares_per_thousand: Option<Decimal>,
    pub refund_per_share: Option<Decimal>,
}

/// Per-symbol capital reduction detail (TWSE `TWTAVUDetail`, TPEx embedded fragment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalReductionDetail {
    pub name: String,
    pub halt_date: Option<NaiveDate>,
    pub shares_per_thousand: Option<Decimal>,
    pub refund_per_share: Option<Decimal>,
}

/// Upcoming capital reduction announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalReductionAnnouncement {
    pub halt_date: NaiveDate,
    pub resume_date: Option<NaiveDate>,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub reduction_ratio: Option<Decimal>,
    pub reason: String,
    pub refund_per_share: Option<Decimal>,
    pub cash_increase_ratio_after_reduction: Option<Decimal>,
    pub subscription_price: Option<Decimal>,
    pub shares_per_thousand: Option<Decimal>,
    pub cash_dividend_per_share: Option<Decimal>,
    pub paid_capital_increase: Option<Decimal>,
    pub public_offering: Option<Decimal>,
    pub employee_subscription: Option<Decimal>,
    pub existing_shareholder_subscription: Option<Decimal>,
    pub shares_per_thousand_subscription: Option<Decimal>,
}

/// Per-symbol capital reduction announcement detail (TWSE `TWTAVUDetail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalReductionAnnouncementDetail {
    pub name: String,
    pub shares_per_thousand: Option<Decimal>,
    pub refund_per_share: Option<Decimal>,
    pub cash_dividend_per_share: Option<Decimal>,
    pub paid_capital_increase: Option<Decimal>,
    pub subscription_price: Option<Decimal>,
    pub public_offering: Option<Decimal>,
    pub employee_subscription: Option<Decimal>,
    pub existing_shareholder_subscription: Option<Decimal>,
    pub shares_per_thousand_subscription: Option<Decimal>,
}

/// Par-value change result (trading resumed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplit {
    pub resume_date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub previous_close: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    pub limit_up_price: Option<Decimal>,
    pub limit_down_price: Option<Decimal>,
    pub opening_reference_price: Option<Decimal>,
    pub halt_date: Option<NaiveDate>,
}

/// Upcoming par-value change announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitAnnouncement {
    pub halt_date: NaiveDate,
    pub resume_date: Option<NaiveDate>,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub split_ratio: Option<Decimal>,
    pub old_face_value: Option<Decimal>,
    pub new_face_value: Option<Decimal>,
    pub shares_per_old_share: Option<Decimal>,
}

/// Per-symbol par-value change detail (TWSE `TWTB7UDetail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitAnnouncementDetail {
    pub name: String,
    pub shares_per_old_share: Option<Decimal>,
    pub old_face_value: Option<Decimal>,
    pub new_face_value: Option<Decimal>,
}

/// Direction of an ETF unit split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EtfSplitKind {
    /// One unit becomes several.
    #[serde(rename = "分割")]
    Split,
    /// Several units become one.
    #[serde(rename = "反分割")]
    ReverseSplit,
}

impl EtfSplitKind {
    /// Portal label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Split => "分割",
            Self::ReverseSplit => "反分割",
        }
    }

    /// Kind named by a portal label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "分割" => Some(Self::Split),
            "反分割" => Some(Self::ReverseSplit),
            _ => None,
        }
    }
}

/// ETF split or reverse split result (trading resumed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfSplit {
    pub resume_date: NaiveDate,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub kind: EtfSplitKind,
    pub previous_close: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    pub limit_up_price: Option<Decimal>,
    pub limit_down_price: Option<Decimal>,
    pub opening_reference_price: Option<Decimal>,
}

/// Upcoming ETF split or reverse split.
///
/// Net asset values are published by TPEx only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfSplitAnnouncement {
    pub halt_date: NaiveDate,
    pub resume_date: Option<NaiveDate>,
    pub exchange: Exchange,
    pub symbol: String,
    pub name: String,
    pub kind: EtfSplitKind,
    /// New units per old unit.
    pub split_ratio: Option<Decimal>,
    pub previous_nav: Option<Decimal>,
    pub new_nav: Option<Decimal>,
}

impl MergeDetail for StockDividend {
    type Detail = DividendDetail;

    fn merge_detail(&mut self, d: DividendDetail) {
        self.name = d.name;
        self.cash_dividend = d.cash_dividend;
        self.stock_dividend_shares = d.stock_dividend_shares;
        self.employee_bonus_shares = d.employee_bonus_shares;
        self.paid_capital_increase = d.paid_capital_increase;
        self.subscription_price = d.subscription_price;
        self.public_offering = d.public_offering;
        self.employee_subscription = d.employee_subscription;
        self.existing_shareholder_subscription = d.existing_shareholder_subscription;
        self.shares_per_thousand = d.shares_per_thousand;
    }
}

impl MergeDetail for DividendAnnouncement {
    type Detail = DividendDetail;

    fn merge_detail(&mut self, d: DividendDetail) {
        self.name = d.name;
        self.cash_dividend = d.cash_dividend;
        self.stock_dividend_shares = d.stock_dividend_shares;
        self.employee_bonus_shares = d.employee_bonus_shares;
        self.paid_capital_increase = d.paid_capital_increase;
        self.subscription_price = d.subscription_price;
        self.public_offering = d.public_offering;
        self.employee_subscription = d.employee_subscription;
        self.existing_shareholder_subscription = d.existing_shareholder_subscription;
        self.shares_per_thousand = d.shares_per_thousand;
    }
}

impl MergeDetail for CapitalReduction {
    type Detail = CapitalReductionDetail;

    fn merge_detail(&mut self, d: CapitalReductionDetail) {
        self.name = d.name;
        self.halt_date = d.halt_date;
        self.shares_per_thousand = d.shares_per_thousand;
        self.refund_per_share = d.refund_per_share;
    }
}

impl MergeDetail for CapitalReductionAnnouncement {
    type Detail = CapitalReductionAnnouncementDetail;

    fn merge_detail(&mut self, d: CapitalReductionAnnouncementDetail) {
        self.name = d.name;
        self.shares_per_thousand = d.shares_per_thousand;
        self.refund_per_share = d.refund_per_share;
        self.cash_dividend_per_share = d.cash_dividend_per_share;
        self.paid_capital_increase = d.paid_capital_increase;
        self.subscription_price = d.subscription_price;
        self.public_offering = d.public_offering;
        self.employee_subscription = d.employee_subscription;
        self.existing_shareholder_subscription = d.existing_shareholder_subscription;
        self.shares_per_thousand_subscription = d.shares_per_thousand_subscription;
    }
}

impl MergeDetail for SplitAnnouncement {
    type Detail = SplitAnnouncementDetail;

    fn merge_detail(&mut self, d: SplitAnnouncementDetail) {
        self.name = d.name;
        self.shares_per_old_share = d.shares_per_old_share;
        self.old_face_value = d.old_face_value;
        self.new_face_value = d.new_face_value;
    }
}
