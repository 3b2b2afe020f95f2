//! Corporate-event bulletins.
//!
//! TPEx pages already carry the detail figures TWSE splits into separate
//! detail endpoints, so every decoder here returns complete records and no
//! detail look-up is ever made.

use rust_decimal::Decimal;
use twdata_core::decode::TpexEnvelope;
use twdata_core::{
    CapitalReduction, CapitalReductionAnnouncement, Cells, DecodeError, DividendAnnouncement,
    EtfSplit, EtfSplitAnnouncement, EtfSplitKind, Exchange, SplitAnnouncement, StockDividend,
    StockSplit, decode_rows, labelled_cell, roc_date,
};
use twdata_core::normalize::parse_numeric_str;
use twdata_types::TwdataError;

pub(crate) const EX_DAILY_Q: &str = "bulletin/exDailyQ";
pub(crate) const REVIVT: &str = "bulletin/revivt";
pub(crate) const PV_CHG_RSLT: &str = "bulletin/pvChgRslt";
pub(crate) const PRE_POST: &str = "bulletin/prePost";
pub(crate) const DECAP: &str = "bulletin/decap";
pub(crate) const PV_CHG_ANN: &str = "bulletin/pvChgAnn";
pub(crate) const ETF_SPLIT_RSLT: &str = "bulletin/etfSplitRslt";
pub(crate) const ETF_RVS_RSLT: &str = "bulletin/etfRvsRslt";
pub(crate) const ETF_SPLIT: &str = "bulletin/etfSplit";
pub(crate) const ETF_RVS: &str = "bulletin/etfRvs";

/// Marker TPEx uses for an inapplicable subscription term.
const NOT_APPLICABLE: &str = "不適用";

fn rows_of<'a>(env: &'a TpexEnvelope, endpoint: &str) -> Result<&'a [Vec<String>], TwdataError> {
    if env.tables.is_empty() {
        return Ok(&[]);
    }
    Ok(&env.table(endpoint, 0)?.data)
}

/// `除權息` style labels lose their leading `除`.
fn dividend_kind(c: &Cells<'_>, i: usize) -> Result<String, DecodeError> {
    Ok(c.text(i)?.replace('除', ""))
}

/// Decode `exDailyQ` ex-right/ex-dividend results.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_dividends(env: &TpexEnvelope) -> Result<Vec<StockDividend>, TwdataError> {
    decode_rows("exDailyQ", rows_of(env, "exDailyQ")?, |cells| {
        let (head, v) = cells.split(3)?;
        Ok(StockDividend {
            date: head.date(0)?,
            exchange: Exchange::Tpex,
            symbol: head.text(1)?,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            dividend: v.num(4)?,
            dividend_type: dividend_kind(&v, 5)?,
            limit_up_price: v.num(6)?,
            limit_down_price: v.num(7)?,
            opening_reference_price: v.num(8)?,
            exdividend_reference_price: v.num(9)?,
            latest_financial_report_date: None,
            latest_net_asset_value_per_share: None,
            latest_earnings_per_share: None,
            capital_increase_right: v.opt_text(2)?,
            cash_dividend: v.num(10)?,
            stock_dividend_shares: v.num(11)?,
            employee_bonus_shares: None,
            paid_capital_increase: v.num(12)?,
            subscription_price: v.num(13)?,
            public_offering: v.num(14)?,
            employee_subscription: v.num(15)?,
            existing_shareholder_subscription: v.num(16)?,
            shares_per_thousand: v.num(17)?,
        })
    })
}

/// Decode `revivt` capital reduction results.
///
/// The resume date is a compact ROC date (`1130102`). Cell 7 of the values,
/// when present, is an HTML table holding the halt date and the
/// per-share terms.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_capital_reductions(
    env: &TpexEnvelope,
) -> Result<Vec<CapitalReduction>, TwdataError> {
    decode_rows("revivt", rows_of(env, "revivt")?, |cells| {
        let (head, v) = cells.split(3)?;
        let fragment = v.get(7).filter(|s| !s.trim().is_empty());
        let labelled = |label: &str, unit: &str| {
            fragment
                .and_then(|html| labelled_cell(html, label))
                .and_then(|text| parse_numeric_str(&text.replace(unit, "")))
        };
        Ok(CapitalReduction {
            resume_date: head.date(0)?,
            exchange: Exchange::Tpex,
            symbol: head.text(1)?,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
            exright_reference_price: v.num(5)?,
            reason: v.text(6)?,
            halt_date: fragment
                .and_then(|html| labelled_cell(html, "停止買賣日期"))
                .and_then(|text| roc_date(&text)),
            shares_per_thousand: labelled("每壹仟股換發新股票", " 股"),
            refund_per_share: labelled("每股退還股款", " 元/股"),
        })
    })
}

/// Decode `pvChgRslt` par-value change results.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_splits(env: &TpexEnvelope) -> Result<Vec<StockSplit>, TwdataError> {
    decode_rows("pvChgRslt", rows_of(env, "pvChgRslt")?, |cells| {
        let (head, v) = cells.split(3)?;
        Ok(StockSplit {
            resume_date: head.date(0)?,
            exchange: Exchange::Tpex,
            symbol: head.text(1)?,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
            halt_date: None,
        })
    })
}

/// Decode `prePost` upcoming ex-right/ex-dividend announcements.
///
/// Bond rows (symbols ending in `B`) are left out.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_dividend_announcements(
    env: &TpexEnvelope,
) -> Result<Vec<DividendAnnouncement>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(Vec::new());
    }
    let rows: Vec<Vec<String>> = env
        .table("prePost", 0)?
        .data
        .iter()
        .filter(|row| !row.get(1).is_some_and(|s| s.trim().ends_with('B')))
        .cloned()
        .collect();
    decode_rows("prePost", &rows, |c| {
        Ok(DividendAnnouncement {
            exdividend_date: c.date(0)?,
            exchange: Exchange::Tpex,
            symbol: c.text(1)?,
            name: c.text(2)?,
            dividend_type: dividend_kind(&c, 3)?,
            stock_dividend_ratio: c.num(4)?,
            cash_capital_increase_ratio: c.num(5)?,
            subscription_price: c.num(6)?,
            cash_dividend: c.num(7)?,
            public_offering: c.num(8)?,
            employee_subscription: c.num(9)?,
            existing_shareholder_subscription: c.num(10)?,
            shares_per_thousand: c.num(11)?,
            latest_financial_report_date: None,
            latest_net_asset_value_per_share: None,
            latest_earnings_per_share: None,
            stock_dividend_shares: None,
            employee_bonus_shares: None,
            paid_capital_increase: None,
        })
    })
}

/// `不適用` is "not applicable"; anything else parses as a number.
fn applicable_num(c: &Cells<'_>, i: usize) -> Result<Option<Decimal>, DecodeError> {
    if c.raw(i)?.trim() == NOT_APPLICABLE {
        return Ok(None);
    }
    c.num(i)
}

/// Decode `decap` upcoming capital reduction announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_capital_reduction_announcements(
    env: &TpexEnvelope,
) -> Result<Vec<CapitalReductionAnnouncement>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(Vec::new());
    }
    decode_rows("decap", &env.table("decap", 0)?.data, |c| {
        Ok(CapitalReductionAnnouncement {
            halt_date: c.date(2)?,
            resume_date: c.opt_date(6)?,
            exchange: Exchange::Tpex,
            symbol: c.text(0)?,
            name: c.text(1)?,
            reduction_ratio: c.num(3)?,
            reason: c.text(5)?,
            refund_per_share: c.num(4)?,
            cash_increase_ratio_after_reduction: applicable_num(&c, 7)?,
            subscription_price: applicable_num(&c, 8)?,
            shares_per_thousand: None,
            cash_dividend_per_share: None,
            paid_capital_increase: None,
            public_offering: None,
            employee_subscription: None,
            existing_shareholder_subscription: None,
            shares_per_thousand_subscription: None,
        })
    })
}

/// Decode `pvChgAnn` upcoming par-value change announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_split_announcements(
    env: &TpexEnvelope,
) -> Result<Vec<SplitAnnouncement>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(Vec::new());
    }
    decode_rows("pvChgAnn", &env.table("pvChgAnn", 0)?.data, |c| {
        Ok(SplitAnnouncement {
            halt_date: c.date(2)?,
            resume_date: c.opt_date(6)?,
            exchange: Exchange::Tpex,
            symbol: c.text(0)?,
            name: c.text(1)?,
            split_ratio: c.num(3)?,
            old_face_value: c.num(4)?,
            new_face_value: c.num(5)?,
            shares_per_old_share: None,
        })
    })
}

/// Decode `etfSplitRslt` or `etfRvsRslt`; the page decides `kind`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_etf_splits(
    env: &TpexEnvelope,
    kind: EtfSplitKind,
) -> Result<Vec<EtfSplit>, TwdataError> {
    let endpoint = match kind {
        EtfSplitKind::Split => "etfSplitRslt",
        EtfSplitKind::ReverseSplit => "etfRvsRslt",
    };
    decode_rows(endpoint, rows_of(env, endpoint)?, |cells| {
        let (head, v) = cells.split(3)?;
        Ok(EtfSplit {
            resume_date: head.date(0)?,
            exchange: Exchange::Tpex,
            symbol: head.text(1)?,
            name: head.text(2)?,
            kind,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
        })
    })
}

/// Decode `etfSplit` or `etfRvs` announcements; the page decides `kind`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_etf_split_announcements(
    env: &TpexEnvelope,
    kind: EtfSplitKind,
) -> Result<Vec<EtfSplitAnnouncement>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(Vec::new());
    }
    let endpoint = match kind {
        EtfSplitKind::Split => "etfSplit",
        EtfSplitKind::ReverseSplit => "etfRvs",
    };
    decode_rows(endpoint, &env.table(endpoint, 0)?.data, |c| {
        Ok(EtfSplitAnnouncement {
            halt_date: c.date(2)?,
            resume_date: c.opt_date(6)?,
            exchange: Exchange::Tpex,
            symbol: c.text(0)?,
            name: c.text(1)?,
            kind,
            split_ratio: c.num(3)?,
            previous_nav: c.num(4)?,
            new_nav: c.num(5)?,
        })
    })
}
