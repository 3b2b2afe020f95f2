use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with connector role traits and router endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Daily per-stock quotes.
    Quotes,
    /// Daily institutional-investor buy/sell flows.
    Institutional,
    /// Daily margin purchase and short sale balances.
    Margin,
    /// Daily margin short and securities-borrowing short sale balances.
    ShortSales,
    /// Daily valuation ratios (P/E, P/B, dividend yield).
    StockValues,
    /// Daily foreign-investor shareholding.
    FiniHoldings,

    /// Ex-right / ex-dividend results over a date range.
    Dividends,
    /// Upcoming ex-right / ex-dividend announcements.
    DividendAnnouncements,
    /// Capital reduction results over a date range.
    CapitalReductions,
    /// Upcoming capital reduction announcements.
    CapitalReductionAnnouncements,
    /// Par-value change results over a date range.
    Splits,
    /// Upcoming par-value change announcements.
    SplitAnnouncements,
    /// ETF split and reverse split results over a date range.
    EtfSplits,
    /// Upcoming ETF split and reverse split announcements.
    EtfSplitAnnouncements,

    /// Listing applications and their milestones.
    ListingApplications,

    /// Daily sector index trading volume, value and weight.
    IndexTrades,
    /// Daily index open/high/low/close.
    IndexHistorical,
    /// Daily market-wide trading totals.
    MarketTrades,
    /// Daily market-wide institutional trading.
    MarketInstitutional,
    /// Daily market-wide margin totals.
    MarketMargin,
    /// Daily advancing and declining issue counts.
    MarketBreadth,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quotes => "quotes",
            Self::Institutional => "institutional",
            Self::Margin => "margin",
            Self::ShortSales => "short-sales",
            Self::StockValues => "stock-values",
            Self::FiniHoldings => "fini-holdings",
            Self::Dividends => "dividends",
            Self::DividendAnnouncements => "dividend-announcements",
            Self::CapitalReductions => "capital-reductions",
            Self::CapitalReductionAnnouncements => "capital-reduction-announcements",
            Self::Splits => "splits",
            Self::SplitAnnouncements => "split-announcements",
            Self::EtfSplits => "etf-splits",
            Self::EtfSplitAnnouncements => "etf-split-announcements",
            Self::ListingApplications => "listing-applications",
            Self::IndexTrades => "index-trades",
            Self::IndexHistorical => "index-historical",
            Self::MarketTrades => "market-trades",
            Self::MarketInstitutional => "market-institutional",
            Self::MarketMargin => "market-margin",
            Self::MarketBreadth => "market-breadth",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
