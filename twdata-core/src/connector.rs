use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{
    AnnouncementQuery, CapitalReduction, CapitalReductionAnnouncement, DailyQuery,
    DividendAnnouncement, EtfSplit, EtfSplitAnnouncement, IndexHistorical, IndexTrades,
    ListingApplication, ListingQuery, MarketBreadth, MarketInstitutional, MarketMargin,
    MarketTrades, RangeQuery, SplitAnnouncement, StockDividend, StockFiniHoldings,
    StockInstitutional, StockMargin, StockQuote, StockShortSales, StockSplit, StockValues,
};
use twdata_types::{ConnectorKey, Exchange, TwdataError};

// Daily endpoints return `Ok(None)` when the portal reports no data for the
// day; range, announcement and listing endpoints return an empty `Vec`.

/// Focused role trait for connectors that provide daily quotes.
#[async_trait]
pub trait QuotesProvider: Send + Sync {
    /// Quotes for every security traded on `q.date`.
    async fn stock_quotes(&self, q: &DailyQuery) -> Result<Option<Vec<StockQuote>>, TwdataError>;
}

/// Focused role trait for connectors that provide institutional flows.
#[async_trait]
pub trait InstitutionalProvider: Send + Sync {
    /// Institutional buy/sell flows for `q.date`.
    async fn stock_institutional(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockInstitutional>>, TwdataError>;
}

/// Focused role trait for connectors that provide margin balances.
#[async_trait]
pub trait MarginProvider: Send + Sync {
    /// Margin purchase and short balances for `q.date`.
    async fn stock_margin(&self, q: &DailyQuery) -> Result<Option<Vec<StockMargin>>, TwdataError>;
}

/// Focused role trait for connectors that provide short sale balances.
#[async_trait]
pub trait ShortSalesProvider: Send + Sync {
    /// Margin-short and SBL short sale balances for `q.date`.
    async fn stock_short_sales(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockShortSales>>, TwdataError>;
}

/// Focused role trait for connectors that provide valuation ratios.
#[async_trait]
pub trait StockValuesProvider: Send + Sync {
    /// P/E, P/B and dividend yield for `q.date`.
    async fn stock_values(&self, q: &DailyQuery) -> Result<Option<Vec<StockValues>>, TwdataError>;
}

/// Focused role trait for connectors that provide foreign shareholding.
#[async_trait]
pub trait FiniHoldingsProvider: Send + Sync {
    /// Foreign-investor holdings for `q.date`.
    async fn stock_fini_holdings(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockFiniHoldings>>, TwdataError>;
}

/// Focused role trait for connectors that provide ex-right/ex-dividend results.
#[async_trait]
pub trait DividendsProvider: Send + Sync {
    /// Results between `q.start` and `q.end`.
    async fn stock_dividends(&self, q: &RangeQuery) -> Result<Vec<StockDividend>, TwdataError>;
}

/// Focused role trait for connectors that provide dividend announcements.
#[async_trait]
pub trait DividendAnnouncementsProvider: Send + Sync {
    /// Current announcement list.
    async fn dividend_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<DividendAnnouncement>, TwdataError>;
}

/// Focused role trait for connectors that provide capital reduction results.
#[async_trait]
pub trait CapitalReductionsProvider: Send + Sync {
    /// Results between `q.start` and `q.end`.
    async fn capital_reductions(&self, q: &RangeQuery)
    -> Result<Vec<CapitalReduction>, TwdataError>;
}

/// Focused role trait for connectors that provide capital reduction announcements.
#[async_trait]
pub trait CapitalReductionAnnouncementsProvider: Send + Sync {
    /// Current announcement list.
    async fn capital_reduction_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<CapitalReductionAnnouncement>, TwdataError>;
}

/// Focused role trait for connectors that provide par-value change results.
#[async_trait]
pub trait SplitsProvider: Send + Sync {
    /// Results between `q.start` and `q.end`.
    async fn stock_splits(&self, q: &RangeQuery) -> Result<Vec<StockSplit>, TwdataError>;
}

/// Focused role trait for connectors that provide par-value change announcements.
#[async_trait]
pub trait SplitAnnouncementsProvider: Send + Sync {
    /// Current announcement list.
    async fn split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<SplitAnnouncement>, TwdataError>;
}

/// Focused role trait for connectors that provide ETF split results.
#[async_trait]
pub trait EtfSplitsProvider: Send + Sync {
    /// Splits and reverse splits resumed between `q.start` and `q.end`.
    async fn etf_splits(&self, q: &RangeQuery) -> Result<Vec<EtfSplit>, TwdataError>;
}

/// Focused role trait for connectors that provide ETF split announcements.
#[async_trait]
pub trait EtfSplitAnnouncementsProvider: Send + Sync {
    /// Current split and reverse split announcements.
    async fn etf_split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<EtfSplitAnnouncement>, TwdataError>;
}

/// Focused role trait for connectors that provide listing applications.
#[async_trait]
pub trait ListingApplicationsProvider: Send + Sync {
    /// Applications matching `q`.
    async fn listing_applications(
        &self,
        q: &ListingQuery,
    ) -> Result<Vec<ListingApplication>, TwdataError>;
}

/// Focused role trait for connectors that provide sector index trading.
#[async_trait]
pub trait IndexTradesProvider: Send + Sync {
    /// Sector index trading for `q.date`, including synthesized aggregates.
    async fn index_trades(&self, q: &DailyQuery) -> Result<Option<Vec<IndexTrades>>, TwdataError>;
}

/// Focused role trait for connectors that provide index open/high/low/close.
#[async_trait]
pub trait IndexHistoricalProvider: Send + Sync {
    /// Index levels for `q.date`.
    async fn index_historical(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<IndexHistorical>>, TwdataError>;
}

/// Focused role trait for connectors that provide market-wide totals.
#[async_trait]
pub trait MarketTradesProvider: Send + Sync {
    /// Market totals for `date`.
    async fn market_trades(&self, date: NaiveDate) -> Result<Option<MarketTrades>, TwdataError>;
}

/// Focused role trait for connectors that provide market-wide institutional trading.
#[async_trait]
pub trait MarketInstitutionalProvider: Send + Sync {
    /// Institutional buy/sell across the market for `date`.
    async fn market_institutional(
        &self,
        date: NaiveDate,
    ) -> Result<Option<MarketInstitutional>, TwdataError>;
}

/// Focused role trait for connectors that provide market-wide margin totals.
#[async_trait]
pub trait MarketMarginProvider: Send + Sync {
    /// Margin totals for `date`.
    async fn market_margin(&self, date: NaiveDate) -> Result<Option<MarketMargin>, TwdataError>;
}

/// Focused role trait for connectors that provide market breadth.
#[async_trait]
pub trait MarketBreadthProvider: Send + Sync {
    /// Advancing and declining issue counts for `date`.
    async fn market_breadth(&self, date: NaiveDate) -> Result<Option<MarketBreadth>, TwdataError>;
}

/// Main connector trait: identity plus capability discovery.
///
/// Implementors override the `as_*_provider` accessors for the capabilities
/// they serve; everything else defaults to `None`.
pub trait ExchangeConnector: Send + Sync {
    /// A stable identifier (e.g. "twdata-twse").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Portal this connector decodes.
    fn exchange(&self) -> Exchange;

    /// Daily quotes capability.
    fn as_quotes_provider(&self) -> Option<&dyn QuotesProvider> {
        None
    }
    /// Institutional flows capability.
    fn as_institutional_provider(&self) -> Option<&dyn InstitutionalProvider> {
        None
    }
    /// Margin balances capability.
    fn as_margin_provider(&self) -> Option<&dyn MarginProvider> {
        None
    }
    /// Short sale balances capability.
    fn as_short_sales_provider(&self) -> Option<&dyn ShortSalesProvider> {
        None
    }
    /// Valuation ratios capability.
    fn as_stock_values_provider(&self) -> Option<&dyn StockValuesProvider> {
        None
    }
    /// Foreign shareholding capability.
    fn as_fini_holdings_provider(&self) -> Option<&dyn FiniHoldingsProvider> {
        None
    }
    /// Ex-right/ex-dividend results capability.
    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        None
    }
    /// Dividend announcements capability.
    fn as_dividend_announcements_provider(&self) -> Option<&dyn DividendAnnouncementsProvider> {
        None
    }
    /// Capital reduction results capability.
    fn as_capital_reductions_provider(&self) -> Option<&dyn CapitalReductionsProvider> {
        None
    }
    /// Capital reduction announcements capability.
    fn as_capital_reduction_announcements_provider(
        &self,
    ) -> Option<&dyn CapitalReductionAnnouncementsProvider> {
        None
    }
    /// Par-value change results capability.
    fn as_splits_provider(&self) -> Option<&dyn SplitsProvider> {
        None
    }
    /// Par-value change announcements capability.
    fn as_split_announcements_provider(&self) -> Option<&dyn SplitAnnouncementsProvider> {
        None
    }
    /// ETF split results capability.
    fn as_etf_splits_provider(&self) -> Option<&dyn EtfSplitsProvider> {
        None
    }
    /// ETF split announcements capability.
    fn as_etf_split_announcements_provider(&self) -> Option<&dyn EtfSplitAnnouncementsProvider> {
        None
    }
    /// Listing applications capability.
    fn as_listing_applications_provider(&self) -> Option<&dyn ListingApplicationsProvider> {
        None
    }
    /// Sector index trading capability.
    fn as_index_trades_provider(&self) -> Option<&dyn IndexTradesProvider> {
        None
    }
    /// Index levels capability.
    fn as_index_historical_provider(&self) -> Option<&dyn IndexHistoricalProvider> {
        None
    }
    /// Market-wide totals capability.
    fn as_market_trades_provider(&self) -> Option<&dyn MarketTradesProvider> {
        None
    }
    /// Market-wide institutional trading capability.
    fn as_market_institutional_provider(&self) -> Option<&dyn MarketInstitutionalProvider> {
        None
    }
    /// Market-wide margin totals capability.
    fn as_market_margin_provider(&self) -> Option<&dyn MarketMarginProvider> {
        None
    }
    /// Market breadth capability.
    fn as_market_breadth_provider(&self) -> Option<&dyn MarketBreadthProvider> {
        None
    }
}
