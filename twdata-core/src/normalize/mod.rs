//! Locale-specific value normalizers.
//!
//! All functions here are pure and fail soft: an unparseable number becomes
//! `None` and an unrecognized date is reported as unrecognized rather than
//! raising an error.

mod date;
mod html;
mod numeric;

pub use date::{
    ReportDate, RocDate, RocFormat, compact_western_date, parse_financial_report_date, roc_date,
    roc_to_western, western_to_roc,
};
pub use html::{html_has_heading, html_table_rows, labelled_cell, strip_html_tags};
pub use numeric::{parse_numeric, parse_numeric_str};
