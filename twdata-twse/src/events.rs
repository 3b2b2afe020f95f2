//! Corporate-event endpoints and their per-symbol detail pages.
//!
//! Summary decoders return [`Summary`] rows whose detail key is taken from
//! the row itself (`TWT49U`, `TWTAUU`) or built from the symbol and the
//! announcement's own date (`TWT48U`, `TWTAVU`, `TWTB7U`).

use chrono::NaiveDate;
use twdata_core::decode::TwseEnvelope;
use twdata_core::normalize::compact_western_date;
use twdata_core::{
    CapitalReduction, CapitalReductionAnnouncement, CapitalReductionAnnouncementDetail,
    CapitalReductionDetail, Cells, DecodeError, DetailKey, DividendAnnouncement, DividendDetail,
    EtfSplit, EtfSplitAnnouncement, EtfSplitKind, Exchange, SplitAnnouncement, SplitAnnouncementDetail, StockDividend, StockSplit, Summary,
    decode_rows, parse_financial_report_date,
};
use twdata_types::TwdataError;

pub(crate) const TWT49U: &str = "exRight/TWT49U";
pub(crate) const TWT49U_DETAIL: &str = "exRight/TWT49UDetail";
pub(crate) const TWT48U: &str = "exRight/TWT48U";
pub(crate) const TWTAUU: &str = "reducation/TWTAUU";
pub(crate) const TWTAVU: &str = "reducation/TWTAVU";
pub(crate) const TWTAVU_DETAIL: &str = "reducation/TWTAVUDetail";
pub(crate) const TWTB8U: &str = "change/TWTB8U";
pub(crate) const TWTB7U: &str = "change/TWTB7U";
pub(crate) const TWTB7U_DETAIL: &str = "change/TWTB7UDetail";
pub(crate) const TWTCAU: &str = "split/TWTCAU";
pub(crate) const TWTC9U: &str = "split/TWTC9U";

/// Decode `TWT49U` ex-right/ex-dividend results.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_dividends(env: &TwseEnvelope) -> Result<Vec<Summary<StockDividend>>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWT49U", &env.data, |cells| {
        let (head, v) = cells.split(3)?;
        let symbol = head.text(1)?;
        let key = v
            .embedded_date(8)?
            .map(|d| DetailKey::new(symbol.clone(), d));
        let record = StockDividend {
            date: head.date(0)?,
            exchange: Exchange::Twse,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            dividend: v.num(2)?,
            dividend_type: v.text(3)?,
            limit_up_price: v.num(4)?,
            limit_down_price: v.num(5)?,
            opening_reference_price: v.num(6)?,
            exdividend_reference_price: v.num(7)?,
            latest_financial_report_date: parse_financial_report_date(v.raw(9)?),
            latest_net_asset_value_per_share: v.num(10)?,
            latest_earnings_per_share: v.num(11)?,
            capital_increase_right: None,
            cash_dividend: None,
            stock_dividend_shares: None,
            employee_bonus_shares: None,
            paid_capital_increase: None,
            subscription_price: None,
            public_offering: None,
            employee_subscription: None,
            existing_shareholder_subscription: None,
            shares_per_thousand: None,
            symbol,
        };
        Ok(Summary::new(record, key))
    })
}

/// Decode a `TWT49UDetail` page (`stat` is lower-case `ok` here).
///
/// # Errors
/// `SchemaMismatch` when the detail row is short.
pub fn decode_dividend_detail(env: &TwseEnvelope) -> Result<Option<DividendDetail>, TwdataError> {
    first_row("TWT49UDetail", env, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(DividendDetail {
            name: head.text(1)?,
            cash_dividend: v.num(0)?,
            stock_dividend_shares: v.num(2)?,
            employee_bonus_shares: v.num(3)?,
            paid_capital_increase: v.num(4)?,
            subscription_price: v.num(5)?,
            public_offering: v.num(6)?,
            employee_subscription: v.num(7)?,
            existing_shareholder_subscription: v.num(8)?,
            shares_per_thousand: v.num(9)?,
        })
    })
}

/// Decode `TWT48U` upcoming ex-right/ex-dividend announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_dividend_announcements(
    env: &TwseEnvelope,
) -> Result<Vec<Summary<DividendAnnouncement>>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWT48U", &env.data, |c| {
        let exdividend_date = c.date(0)?;
        let symbol = c.text(1)?;
        let key = DetailKey::new(symbol.clone(), exdividend_date);
        let record = DividendAnnouncement {
            exdividend_date,
            exchange: Exchange::Twse,
            name: c.text(2)?,
            dividend_type: c.text(3)?,
            stock_dividend_ratio: c.num(4)?,
            cash_capital_increase_ratio: c.num(5)?,
            subscription_price: c.html_num(6)?,
            cash_dividend: c.html_num(7)?,
            latest_financial_report_date: parse_financial_report_date(c.raw(10)?),
            latest_net_asset_value_per_share: c.num(11)?,
            latest_earnings_per_share: c.num(12)?,
            stock_dividend_shares: None,
            employee_bonus_shares: None,
            paid_capital_increase: None,
            public_offering: None,
            employee_subscription: None,
            existing_shareholder_subscription: None,
            shares_per_thousand: None,
            symbol,
        };
        Ok(Summary::new(record, Some(key)))
    })
}

/// Decode `TWTAUU` capital reduction results.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_capital_reductions(
    env: &TwseEnvelope,
) -> Result<Vec<Summary<CapitalReduction>>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWTAUU", &env.data, |cells| {
        let (head, v) = cells.split(3)?;
        let symbol = head.text(1)?;
        let key = v
            .embedded_date(7)?
            .map(|d| DetailKey::new(symbol.clone(), d));
        let record = CapitalReduction {
            resume_date: head.date(0)?,
            exchange: Exchange::Twse,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
            exright_reference_price: v.num(5)?,
            reason: v.text(6)?,
            halt_date: None,
            shares_per_thousand: None,
            refund_per_share: None,
            symbol,
        };
        Ok(Summary::new(record, key))
    })
}

/// Decode a `TWTAVUDetail` page as capital reduction result detail.
///
/// # Errors
/// `SchemaMismatch` when the detail row is short.
pub fn decode_capital_reduction_detail(
    env: &TwseEnvelope,
) -> Result<Option<CapitalReductionDetail>, TwdataError> {
    first_row("TWTAVUDetail", env, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(CapitalReductionDetail {
            name: head.text(1)?,
            halt_date: v.opt_date(0)?,
            shares_per_thousand: v.num(1)?,
            refund_per_share: v.num(2)?,
        })
    })
}

/// Decode `TWTAVU` upcoming capital reduction announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_capital_reduction_announcements(
    env: &TwseEnvelope,
) -> Result<Vec<Summary<CapitalReductionAnnouncement>>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWTAVU", &env.data, |c| {
        let halt_date = c.date(0)?;
        let symbol = c.text(1)?;
        let key = DetailKey::new(symbol.clone(), halt_date);
        let record = CapitalReductionAnnouncement {
            halt_date,
            resume_date: c.opt_date(3)?,
            exchange: Exchange::Twse,
            name: c.text(2)?,
            reduction_ratio: c.num(4)?,
            reason: c.text(5)?,
            refund_per_share: c.num(6)?,
            cash_increase_ratio_after_reduction: c.num(7)?,
            subscription_price: c.num(8)?,
            shares_per_thousand: None,
            cash_dividend_per_share: None,
            paid_capital_increase: None,
            public_offering: None,
            employee_subscription: None,
            existing_shareholder_subscription: None,
            shares_per_thousand_subscription: None,
            symbol,
        };
        Ok(Summary::new(record, Some(key)))
    })
}

/// Decode a `TWTAVUDetail` page as announcement detail.
///
/// # Errors
/// `SchemaMismatch` when the detail row is short.
pub fn decode_capital_reduction_announcement_detail(
    env: &TwseEnvelope,
) -> Result<Option<CapitalReductionAnnouncementDetail>, TwdataError> {
    first_row("TWTAVUDetail", env, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(CapitalReductionAnnouncementDetail {
            name: head.text(1)?,
            shares_per_thousand: v.num(1)?,
            refund_per_share: v.num(2)?,
            cash_dividend_per_share: v.num(3)?,
            paid_capital_increase: v.num(4)?,
            subscription_price: v.num(5)?,
            public_offering: v.num(6)?,
            employee_subscription: v.num(7)?,
            existing_shareholder_subscription: v.num(8)?,
            shares_per_thousand_subscription: v.num(9)?,
        })
    })
}

/// Decode `TWTB8U` par-value change results.
///
/// The halt date comes from the optional reference cell
/// `"symbol,YYYYMMDD,YYYYMMDD"`; rows without it keep `halt_date: None`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_splits(env: &TwseEnvelope) -> Result<Vec<StockSplit>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWTB8U", &env.data, |cells| {
        let (head, v) = cells.split(3)?;
        Ok(StockSplit {
            resume_date: head.date(0)?,
            exchange: Exchange::Twse,
            symbol: head.text(1)?,
            name: head.text(2)?,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
            halt_date: v.get(5).and_then(split_halt_date),
        })
    })
}

fn split_halt_date(reference: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = reference.split(',').collect();
    if parts.len() < 3 {
        return None;
    }
    compact_western_date(parts[1])
}

/// Decode `TWTB7U` upcoming par-value change announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_split_announcements(
    env: &TwseEnvelope,
) -> Result<Vec<Summary<SplitAnnouncement>>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("TWTB7U", &env.data, |c| {
        let halt_date = c.date(0)?;
        let symbol = c.text(1)?;
        let key = DetailKey::new(symbol.clone(), halt_date);
        let record = SplitAnnouncement {
            halt_date,
            resume_date: c.opt_date(3)?,
            exchange: Exchange::Twse,
            name: c.text(2)?,
            split_ratio: c.num(4)?,
            old_face_value: c.num(5)?,
            new_face_value: c.num(6)?,
            shares_per_old_share: None,
            symbol,
        };
        Ok(Summary::new(record, Some(key)))
    })
}

/// Decode a `TWTB7UDetail` page.
///
/// # Errors
/// `SchemaMismatch` when the detail row is short.
pub fn decode_split_announcement_detail(
    env: &TwseEnvelope,
) -> Result<Option<SplitAnnouncementDetail>, TwdataError> {
    first_row("TWTB7UDetail", env, |cells| {
        let (head, v) = cells.split(2)?;
        Ok(SplitAnnouncementDetail {
            name: head.text(1)?,
            shares_per_old_share: v.num(1)?,
            old_face_value: v.num(2)?,
            new_face_value: v.num(3)?,
        })
    })
}

fn etf_split_kind(c: &Cells<'_>, i: usize) -> Result<Option<EtfSplitKind>, DecodeError> {
    let label = c.raw(i)?;
    let kind = EtfSplitKind::from_label(label);
    if kind.is_none() {
        tracing::debug!(target: "twdata::twse", label = %label.trim(), "unknown ETF split kind; row dropped");
    }
    Ok(kind)
}

/// Decode `TWTCAU` ETF split and reverse split results.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_etf_splits(env: &TwseEnvelope) -> Result<Vec<EtfSplit>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    let rows = decode_rows("TWTCAU", &env.data, |cells| {
        let (head, v) = cells.split(4)?;
        let Some(kind) = etf_split_kind(&head, 3)? else {
            return Ok(None);
        };
        Ok(Some(EtfSplit {
            resume_date: head.date(0)?,
            exchange: Exchange::Twse,
            symbol: head.text(1)?,
            name: head.text(2)?,
            kind,
            previous_close: v.num(0)?,
            reference_price: v.num(1)?,
            limit_up_price: v.num(2)?,
            limit_down_price: v.num(3)?,
            opening_reference_price: v.num(4)?,
        }))
    })?;
    Ok(rows.into_iter().flatten().collect())
}

/// Decode `TWTC9U` upcoming ETF split and reverse split announcements.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_etf_split_announcements(
    env: &TwseEnvelope,
) -> Result<Vec<EtfSplitAnnouncement>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    let rows = decode_rows("TWTC9U", &env.data, |c| {
        let Some(kind) = etf_split_kind(&c, 3)? else {
            return Ok(None);
        };
        Ok(Some(EtfSplitAnnouncement {
            halt_date: c.date(0)?,
            resume_date: c.opt_date(4)?,
            exchange: Exchange::Twse,
            symbol: c.text(1)?,
            name: c.text(2)?,
            kind,
            split_ratio: c.num(5)?,
            previous_nav: None,
            new_nav: None,
        }))
    })?;
    Ok(rows.into_iter().flatten().collect())
}

/// Detail pages carry one row; `None` when the page reports no data.
fn first_row<T>(
    endpoint: &str,
    env: &TwseEnvelope,
    f: impl FnMut(Cells<'_>) -> Result<T, DecodeError>,
) -> Result<Option<T>, TwdataError> {
    if !env.is_ok() {
        return Ok(None);
    }
    let Some(row) = env.data.first() else {
        return Ok(None);
    };
    Ok(decode_rows(endpoint, std::slice::from_ref(row), f)?.pop())
}
