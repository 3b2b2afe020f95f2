use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use twdata_types::TwdataError;

use super::MarketRecord;

/// Request for a single-day endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuery {
    /// Trading day.
    pub date: NaiveDate,
    /// Exact-match symbol filter, applied after the full page is decoded.
    pub symbol: Option<String>,
}

impl DailyQuery {
    /// All symbols for `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date, symbol: None }
    }

    /// Restrict the result to one symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Request for an endpoint that reports events over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
    /// Exact-match symbol filter.
    pub symbol: Option<String>,
    /// Whether to run per-row detail look-ups.
    ///
    /// `None` selects the endpoint's own default, which differs between
    /// endpoints.
    pub include_detail: Option<bool>,
}

impl RangeQuery {
    /// Build a range query.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TwdataError> {
        let q = Self {
            start,
            end,
            symbol: None,
            include_detail: None,
        };
        q.validate()?;
        Ok(q)
    }

    /// Restrict the result to one symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Force detail look-ups on or off.
    #[must_use]
    pub const fn with_detail(mut self, include: bool) -> Self {
        self.include_detail = Some(include);
        self
    }

    /// Check the range bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is after `end`.
    pub fn validate(&self) -> Result<(), TwdataError> {
        if self.start > self.end {
            return Err(TwdataError::InvalidArg(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// Request for an announcement feed (always the current list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementQuery {
    /// Exact-match symbol filter.
    pub symbol: Option<String>,
    /// Whether to run per-row detail look-ups; `None` uses the endpoint default.
    pub include_detail: Option<bool>,
}

impl AnnouncementQuery {
    /// Restrict the result to one symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Force detail look-ups on or off.
    #[must_use]
    pub const fn with_detail(mut self, include: bool) -> Self {
        self.include_detail = Some(include);
        self
    }
}

/// Request for listing applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Exact-match symbol filter.
    pub symbol: Option<String>,
    /// Application year; `None` asks for the portal's default listing.
    pub year: Option<i32>,
}

impl ListingQuery {
    /// Restrict the result to one symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Restrict the result to applications filed in `year`.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Keep only rows whose symbol equals `symbol` exactly; no-op for `None`.
pub fn retain_symbol<T: MarketRecord>(rows: &mut Vec<T>, symbol: Option<&str>) {
    if let Some(symbol) = symbol {
        rows.retain(|r| r.symbol() == symbol);
    }
}
