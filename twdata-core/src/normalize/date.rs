use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Offset between the ROC (Minguo) calendar year and the Gregorian year.
const ROC_EPOCH_OFFSET: i32 = 1911;

static LONG_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)年(\d+)月(\d+)日").expect("valid regex"));
static SLASH_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").expect("valid regex"));
static COMPACT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})(\d{2})(\d{2})$").expect("valid regex"));
static ISO_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static QUARTER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+年第[1-4]季$").expect("valid regex"));

/// Outcome of converting a ROC-calendar date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocDate<'a> {
    /// Input matched a known ROC shape and names a real calendar day.
    Western(NaiveDate),
    /// Input was not recognized; carries the original text unchanged.
    Unrecognized(&'a str),
}

impl RocDate<'_> {
    /// The converted date, if the input was recognized.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Western(d) => Some(*d),
            Self::Unrecognized(_) => None,
        }
    }

    /// True when the input matched one of the ROC shapes.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Western(_))
    }
}

impl fmt::Display for RocDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Western(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Convert a ROC-calendar date to a Gregorian date.
///
/// Recognized shapes, in order of precedence:
/// - `Y年M月D日` anywhere in the text (surrounding text is ignored),
/// - `Y/M/D` as the whole (trimmed) input,
/// - `YYYMMDD`, exactly seven digits.
///
/// Components may omit leading zeros except in the compact form. A shape
/// that matches but names an impossible day (e.g. `113/02/30`) is reported
/// as unrecognized.
#[must_use]
pub fn roc_to_western(raw: &str) -> RocDate<'_> {
    let s = raw.trim();
    LONG_FORM
        .captures(s)
        .or_else(|| SLASH_FORM.captures(s))
        .or_else(|| COMPACT_FORM.captures(s))
        .and_then(|c| from_roc_parts(&c[1], &c[2], &c[3]))
        .map_or(RocDate::Unrecognized(raw), RocDate::Western)
}

/// Shorthand for `roc_to_western(raw).date()`.
#[must_use]
pub fn roc_date(raw: &str) -> Option<NaiveDate> {
    roc_to_western(raw).date()
}

/// Parse a compact Gregorian `YYYYMMDD` token, as embedded in detail keys.
#[must_use]
pub fn compact_western_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}

fn from_roc_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year.checked_add(ROC_EPOCH_OFFSET)?, month, day)
}

/// Output shape for [`western_to_roc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RocFormat {
    /// `113年06月28日`
    #[default]
    Chinese,
    /// `113/06/28`
    Slash,
}

/// Convert an ISO `YYYY-MM-DD` date to its ROC-calendar rendering.
///
/// Inputs that are not a valid ISO date, or that fall before ROC year 1
/// (1912), are returned unchanged.
#[must_use]
pub fn western_to_roc(iso: &str, format: RocFormat) -> Cow<'_, str> {
    if !ISO_FORM.is_match(iso) {
        return Cow::Borrowed(iso);
    }
    let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") else {
        return Cow::Borrowed(iso);
    };
    let roc_year = date.year() - ROC_EPOCH_OFFSET;
    if roc_year < 1 {
        return Cow::Borrowed(iso);
    }
    let (month, day) = (date.month(), date.day());
    Cow::Owned(match format {
        RocFormat::Chinese => format!("{roc_year}年{month:02}月{day:02}日"),
        RocFormat::Slash => format!("{roc_year}/{month:02}/{day:02}"),
    })
}

/// Reference to the latest financial report on an ex-dividend row.
///
/// The portal reports either a concrete date or a fiscal-quarter label such as
/// `114年第3季`; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportDate {
    /// A concrete day.
    Date(NaiveDate),
    /// A fiscal-quarter label, kept in its ROC form.
    Quarter(String),
    /// Unrecognized text.
    Unparsed(String),
}

impl ReportDate {
    /// The concrete day, when the report is referenced by date.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Quarter(s) | Self::Unparsed(s) => f.write_str(s),
        }
    }
}

impl Serialize for ReportDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReportDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let iso = ISO_FORM
            .is_match(&s)
            .then(|| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
            .flatten();
        if let Some(d) = iso {
            return Ok(Self::Date(d));
        }
        if QUARTER_LABEL.is_match(&s) {
            return Ok(Self::Quarter(s));
        }
        Ok(Self::Unparsed(s))
    }
}

/// Parse a latest-financial-report cell.
///
/// A trailing parenthesized link (`113年06月28日(https://...)`) is dropped.
/// Empty, whitespace-only and `N/A` cells yield `None`.
#[must_use]
pub fn parse_financial_report_date(raw: &str) -> Option<ReportDate> {
    let trimmed = raw.trim();
    let content = match trimmed.split_once('(') {
        Some((head, _)) if !head.trim().is_empty() => head.trim(),
        _ => trimmed,
    };
    if content.is_empty() || content.eq_ignore_ascii_case("N/A") {
        return None;
    }
    if QUARTER_LABEL.is_match(content) {
        return Some(ReportDate::Quarter(content.to_string()));
    }
    Some(match roc_to_western(content) {
        RocDate::Western(d) => ReportDate::Date(d),
        RocDate::Unrecognized(s) => ReportDate::Unparsed(s.to_string()),
    })
}
