use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::DecodeError;
use crate::normalize::{compact_western_date, parse_numeric_str, roc_to_western, strip_html_tags};

/// Typed positional view over one upstream row.
///
/// Every accessor is bounds-checked: reading past the end is a
/// [`DecodeError::MissingCell`], never a silently shifted field.
#[derive(Debug, Clone, Copy)]
pub struct Cells<'a> {
    cells: &'a [String],
}

impl<'a> Cells<'a> {
    /// Wrap a row slice.
    #[must_use]
    pub const fn new(cells: &'a [String]) -> Self {
        Self { cells }
    }

    /// Number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for an empty row.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Split off `lead` identifying cells (symbol/name, or date/symbol/name)
    /// and return them together with the remaining value cells.
    ///
    /// # Errors
    /// `MissingCell` when the row is shorter than `lead`.
    pub fn split(&self, lead: usize) -> Result<(Self, Self), DecodeError> {
        if self.cells.len() < lead {
            return Err(DecodeError::MissingCell {
                needed: lead.saturating_sub(1),
                len: self.cells.len(),
            });
        }
        let (head, tail) = self.cells.split_at(lead);
        Ok((Self::new(head), Self::new(tail)))
    }

    /// Cells from `from` onwards (empty when `from` is past the end).
    #[must_use]
    pub fn tail(&self, from: usize) -> Self {
        Self::new(self.cells.get(from..).unwrap_or_default())
    }

    /// Untouched cell text, or `None` past the end.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&'a str> {
        self.cells.get(i).map(String::as_str)
    }

    /// Untouched cell text.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn raw(&self, i: usize) -> Result<&'a str, DecodeError> {
        self.get(i).ok_or(DecodeError::MissingCell {
            needed: i,
            len: self.cells.len(),
        })
    }

    /// Trimmed cell text.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn text(&self, i: usize) -> Result<String, DecodeError> {
        Ok(self.raw(i)?.trim().to_string())
    }

    /// Trimmed cell text, `None` when blank.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn opt_text(&self, i: usize) -> Result<Option<String>, DecodeError> {
        let s = self.raw(i)?.trim();
        Ok((!s.is_empty()).then(|| s.to_string()))
    }

    /// Numeric cell; unparseable text is `None`.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn num(&self, i: usize) -> Result<Option<Decimal>, DecodeError> {
        Ok(parse_numeric_str(self.raw(i)?))
    }

    /// Numeric cell wrapped in markup (`<p ...>12.5</p>`).
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn html_num(&self, i: usize) -> Result<Option<Decimal>, DecodeError> {
        Ok(parse_numeric_str(&strip_html_tags(Some(self.raw(i)?))))
    }

    /// Required ROC-calendar date.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range, `InvalidDate` when the text is
    /// not a recognizable ROC date.
    pub fn date(&self, i: usize) -> Result<NaiveDate, DecodeError> {
        let raw = self.raw(i)?;
        roc_to_western(raw).date().ok_or_else(|| DecodeError::InvalidDate {
            index: i,
            raw: raw.to_string(),
        })
    }

    /// Optional ROC-calendar milestone; blank or unrecognized text is `None`.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn opt_date(&self, i: usize) -> Result<Option<NaiveDate>, DecodeError> {
        Ok(roc_to_western(self.raw(i)?).date())
    }

    /// ROC year (`112`) as a western year; blank or non-numeric text is `None`.
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn roc_year(&self, i: usize) -> Result<Option<i32>, DecodeError> {
        Ok(self
            .raw(i)?
            .trim()
            .parse::<i32>()
            .ok()
            .map(|y| y + 1911))
    }

    /// Western date embedded as the second comma-separated token of a detail
    /// reference cell (`"2330,20240613"`).
    ///
    /// # Errors
    /// `MissingCell` when `i` is out of range.
    pub fn embedded_date(&self, i: usize) -> Result<Option<NaiveDate>, DecodeError> {
        Ok(self
            .raw(i)?
            .split(',')
            .nth(1)
            .and_then(compact_western_date))
    }
}
