//! twdata-twse
//!
//! Connector for the Taiwan Stock Exchange `rwd/zh` data portal. Implements
//! every capability role trait of `twdata-core` on top of a [`Fetcher`]:
//! requests are built here, transport is the fetcher's business, and the
//! returned envelopes are decoded by the pure functions in [`daily`],
//! [`market`], [`events`], [`listing`] and [`indices`].
#![warn(missing_docs)]

/// Single-day endpoints.
pub mod daily;
/// Corporate-event endpoints and detail pages.
pub mod events;
/// Sector index trading and intraday index levels.
pub mod indices;
/// Listing applications.
pub mod listing;
/// Market-wide summaries.
pub mod market;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use twdata_core::connector::{
    CapitalReductionAnnouncementsProvider, CapitalReductionsProvider,
    DividendAnnouncementsProvider, DividendsProvider, EtfSplitAnnouncementsProvider,
    EtfSplitsProvider, ExchangeConnector, FiniHoldingsProvider, IndexHistoricalProvider,
    IndexTradesProvider, InstitutionalProvider, ListingApplicationsProvider, MarginProvider,
    MarketBreadthProvider, MarketInstitutionalProvider, MarketMarginProvider,
    MarketTradesProvider, QuotesProvider, ShortSalesProvider, SplitAnnouncementsProvider,
    SplitsProvider, StockValuesProvider,
};
use twdata_core::decode::{TwseEnvelope, parse_envelope};
use twdata_core::{
    AnnouncementQuery, CapitalReduction, CapitalReductionAnnouncement,
    CapitalReductionAnnouncementDetail, CapitalReductionDetail, DailyQuery, DetailKey,
    DividendAnnouncement, DividendDetail, EtfSplit, EtfSplitAnnouncement, Exchange, FetchRequest,
    Fetcher, IndexHistorical, IndexTrades, ListingApplication, ListingQuery, MarketBreadth,
    MarketInstitutional, MarketMargin, MarketRecord, MarketTrades, RangeQuery, SplitAnnouncement,
    SplitAnnouncementDetail, StockDividend, StockFiniHoldings, StockInstitutional, StockMargin,
    StockQuote, StockShortSales, StockSplit, StockValues, merge_details, retain_symbol,
};
use twdata_types::{ConnectorConfig, ConnectorKey, TwdataError};

/// Public connector type.
pub struct TwseConnector {
    fetcher: Arc<dyn Fetcher>,
    cfg: ConnectorConfig,
}

impl TwseConnector {
    /// Static connector key for logs and orchestrator reports.
    pub const KEY: ConnectorKey = ConnectorKey::new("twdata-twse");

    /// Portal root every endpoint path is appended to.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.twse.com.tw/rwd/zh";

    /// Build against the public portal.
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_config(fetcher, ConnectorConfig::new(Self::DEFAULT_BASE_URL))
    }

    /// Build with an explicit base URL and detail concurrency.
    #[must_use]
    pub const fn with_config(fetcher: Arc<dyn Fetcher>, cfg: ConnectorConfig) -> Self {
        Self { fetcher, cfg }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConnectorConfig {
        &self.cfg
    }

    fn request(&self, path: &str) -> FetchRequest {
        FetchRequest::get(self.cfg.url(path)).param("response", "json")
    }

    fn daily_request(&self, path: &str, date: NaiveDate) -> FetchRequest {
        self.request(path).param("date", compact(date))
    }

    fn range_request(&self, path: &str, q: &RangeQuery) -> FetchRequest {
        self.request(path)
            .param("startDate", compact(q.start))
            .param("endDate", compact(q.end))
    }

    fn detail_request(&self, path: &str, date_param: &str, key: &DetailKey) -> FetchRequest {
        self.request(path)
            .param("STK_NO", key.symbol.clone())
            .param(date_param, compact(key.date))
    }

    // Fetch failures are reported under this connector's name.
    fn normalize_error(e: TwdataError) -> TwdataError {
        match e {
            TwdataError::Connector { msg, .. } | TwdataError::Other(msg) => {
                TwdataError::connector(Self::KEY.as_str(), msg)
            }
            other => other,
        }
    }

    #[tracing::instrument(
        target = "twdata::twse",
        skip_all,
        fields(endpoint = %req.endpoint()),
    )]
    async fn envelope(&self, req: FetchRequest) -> Result<TwseEnvelope, TwdataError> {
        let payload = self
            .fetcher
            .fetch(&req)
            .await
            .map_err(Self::normalize_error)?;
        let env: TwseEnvelope = parse_envelope(req.endpoint(), payload)?;
        if !env.is_ok() {
            tracing::debug!(target: "twdata::twse", stat = %env.stat, "no data reported");
        }
        Ok(env)
    }

    async fn market_trades_on(&self, date: NaiveDate) -> Result<Option<MarketTrades>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::MI_INDEX, date)).await?;
        daily::decode_market_trades(&env, date)
    }

    async fn dividend_detail(&self, key: DetailKey) -> Result<Option<DividendDetail>, TwdataError> {
        let env = self
            .envelope(self.detail_request(events::TWT49U_DETAIL, "T1", &key))
            .await?;
        events::decode_dividend_detail(&env)
    }

    async fn capital_reduction_detail(
        &self,
        key: DetailKey,
    ) -> Result<Option<CapitalReductionDetail>, TwdataError> {
        let env = self
            .envelope(self.detail_request(events::TWTAVU_DETAIL, "FILE_DATE", &key))
            .await?;
        events::decode_capital_reduction_detail(&env)
    }

    async fn capital_reduction_announcement_detail(
        &self,
        key: DetailKey,
    ) -> Result<Option<CapitalReductionAnnouncementDetail>, TwdataError> {
        let env = self
            .envelope(self.detail_request(events::TWTAVU_DETAIL, "FILE_DATE", &key))
            .await?;
        events::decode_capital_reduction_announcement_detail(&env)
    }

    async fn split_announcement_detail(
        &self,
        key: DetailKey,
    ) -> Result<Option<SplitAnnouncementDetail>, TwdataError> {
        let env = self
            .envelope(self.detail_request(events::TWTB7U_DETAIL, "FILE_DATE", &key))
            .await?;
        events::decode_split_announcement_detail(&env)
    }
}

fn compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn filtered<T: MarketRecord>(mut rows: Vec<T>, symbol: Option<&str>) -> Vec<T> {
    retain_symbol(&mut rows, symbol);
    rows
}

#[async_trait]
impl QuotesProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_quotes(&self, q: &DailyQuery) -> Result<Option<Vec<StockQuote>>, TwdataError> {
        let req = self.daily_request(daily::MI_INDEX, q.date).param("type", "ALLBUT0999");
        let env = self.envelope(req).await?;
        Ok(daily::decode_quotes(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl InstitutionalProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_institutional(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockInstitutional>>, TwdataError> {
        let req = self.daily_request(daily::T86, q.date).param("selectType", "ALLBUT0999");
        let env = self.envelope(req).await?;
        Ok(daily::decode_institutional(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarginProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_margin(&self, q: &DailyQuery) -> Result<Option<Vec<StockMargin>>, TwdataError> {
        let req = self.daily_request(daily::MI_MARGN, q.date).param("selectType", "ALL");
        let env = self.envelope(req).await?;
        Ok(daily::decode_margin(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl ShortSalesProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_short_sales(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockShortSales>>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::TWT93U, q.date)).await?;
        Ok(daily::decode_short_sales(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl StockValuesProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_values(&self, q: &DailyQuery) -> Result<Option<Vec<StockValues>>, TwdataError> {
        let req = self.daily_request(daily::BWIBBU_D, q.date).param("selectType", "ALL");
        let env = self.envelope(req).await?;
        Ok(daily::decode_values(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl FiniHoldingsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn stock_fini_holdings(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockFiniHoldings>>, TwdataError> {
        let req = self.daily_request(daily::MI_QFIIS, q.date).param("selectType", "ALLBUT0999");
        let env = self.envelope(req).await?;
        Ok(daily::decode_fini_holdings(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl DividendsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(start = %q.start, end = %q.end))]
    async fn stock_dividends(&self, q: &RangeQuery) -> Result<Vec<StockDividend>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_request(events::TWT49U, q)).await?;
        let summaries = events::decode_dividends(&env)?;
        let rows = merge_details(
            summaries,
            q.include_detail.unwrap_or(true),
            self.cfg.detail_concurrency,
            |key| self.dividend_detail(key),
        )
        .await;
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl DividendAnnouncementsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn dividend_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<DividendAnnouncement>, TwdataError> {
        let env = self.envelope(self.request(events::TWT48U)).await?;
        let summaries = events::decode_dividend_announcements(&env)?;
        let rows = merge_details(
            summaries,
            q.include_detail.unwrap_or(false),
            self.cfg.detail_concurrency,
            |key| self.dividend_detail(key),
        )
        .await;
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl CapitalReductionsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(start = %q.start, end = %q.end))]
    async fn capital_reductions(
        &self,
        q: &RangeQuery,
    ) -> Result<Vec<CapitalReduction>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_request(events::TWTAUU, q)).await?;
        let summaries = events::decode_capital_reductions(&env)?;
        // detail is always fetched here; `include_detail` does not apply
        let rows = merge_details(summaries, true, self.cfg.detail_concurrency, |key| {
            self.capital_reduction_detail(key)
        })
        .await;
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl CapitalReductionAnnouncementsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn capital_reduction_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<CapitalReductionAnnouncement>, TwdataError> {
        let env = self.envelope(self.request(events::TWTAVU)).await?;
        let summaries = events::decode_capital_reduction_announcements(&env)?;
        let rows = merge_details(
            summaries,
            q.include_detail.unwrap_or(false),
            self.cfg.detail_concurrency,
            |key| self.capital_reduction_announcement_detail(key),
        )
        .await;
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl SplitsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(start = %q.start, end = %q.end))]
    async fn stock_splits(&self, q: &RangeQuery) -> Result<Vec<StockSplit>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_request(events::TWTB8U, q)).await?;
        Ok(filtered(events::decode_splits(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl SplitAnnouncementsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<SplitAnnouncement>, TwdataError> {
        let env = self.envelope(self.request(events::TWTB7U)).await?;
        let summaries = events::decode_split_announcements(&env)?;
        let rows = merge_details(
            summaries,
            q.include_detail.unwrap_or(false),
            self.cfg.detail_concurrency,
            |key| self.split_announcement_detail(key),
        )
        .await;
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl EtfSplitsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(start = %q.start, end = %q.end))]
    async fn etf_splits(&self, q: &RangeQuery) -> Result<Vec<EtfSplit>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_request(events::TWTCAU, q)).await?;
        Ok(filtered(events::decode_etf_splits(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl EtfSplitAnnouncementsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn etf_split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<EtfSplitAnnouncement>, TwdataError> {
        let env = self.envelope(self.request(events::TWTC9U)).await?;
        Ok(filtered(
            events::decode_etf_split_announcements(&env)?,
            q.symbol.as_deref(),
        ))
    }
}

#[async_trait]
impl ListingApplicationsProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn listing_applications(
        &self,
        q: &ListingQuery,
    ) -> Result<Vec<ListingApplication>, TwdataError> {
        let mut req = self.request(listing::APPLYLISTING);
        if let Some(year) = q.year {
            req = req.param("date", format!("{year}0101"));
        }
        let env = self.envelope(req).await?;
        Ok(filtered(
            listing::decode_listing_applications(&env)?,
            q.symbol.as_deref(),
        ))
    }
}

#[async_trait]
impl IndexTradesProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn index_trades(&self, q: &DailyQuery) -> Result<Option<Vec<IndexTrades>>, TwdataError> {
        let env = self.envelope(self.daily_request(indices::BFIAMU, q.date)).await?;
        if !env.is_ok() {
            return Ok(None);
        }
        let market = self.market_trades_on(q.date).await?;
        Ok(indices::decode_index_trades(&env, q.date, market.as_ref())?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarketTradesProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn market_trades(&self, date: NaiveDate) -> Result<Option<MarketTrades>, TwdataError> {
        self.market_trades_on(date).await
    }
}

#[async_trait]
impl IndexHistoricalProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self), fields(date = %q.date))]
    async fn index_historical(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<IndexHistorical>>, TwdataError> {
        let env = self.envelope(self.daily_request(indices::MI_5MINS_INDEX, q.date)).await?;
        Ok(indices::decode_index_historical(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarketInstitutionalProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn market_institutional(
        &self,
        date: NaiveDate,
    ) -> Result<Option<MarketInstitutional>, TwdataError> {
        let req = self
            .request(market::BFI82U)
            .param("dayDate", compact(date))
            .param("type", "day");
        let env = self.envelope(req).await?;
        market::decode_institutional(&env, date)
    }
}

#[async_trait]
impl MarketMarginProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn market_margin(&self, date: NaiveDate) -> Result<Option<MarketMargin>, TwdataError> {
        let req = self.daily_request(daily::MI_MARGN, date).param("selectType", "MS");
        let env = self.envelope(req).await?;
        market::decode_margin(&env, date)
    }
}

#[async_trait]
impl MarketBreadthProvider for TwseConnector {
    #[tracing::instrument(target = "twdata::twse", skip(self))]
    async fn market_breadth(&self, date: NaiveDate) -> Result<Option<MarketBreadth>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::MI_INDEX, date)).await?;
        market::decode_breadth(&env, date)
    }
}

impl ExchangeConnector for TwseConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn exchange(&self) -> Exchange {
        Exchange::Twse
    }

    fn as_quotes_provider(&self) -> Option<&dyn QuotesProvider> {
        Some(self as &dyn QuotesProvider)
    }
    fn as_institutional_provider(&self) -> Option<&dyn InstitutionalProvider> {
        Some(self as &dyn InstitutionalProvider)
    }
    fn as_margin_provider(&self) -> Option<&dyn MarginProvider> {
        Some(self as &dyn MarginProvider)
    }
    fn as_short_sales_provider(&self) -> Option<&dyn ShortSalesProvider> {
        Some(self as &dyn ShortSalesProvider)
    }
    fn as_stock_values_provider(&self) -> Option<&dyn StockValuesProvider> {
        Some(self as &dyn StockValuesProvider)
    }
    fn as_fini_holdings_provider(&self) -> Option<&dyn FiniHoldingsProvider> {
        Some(self as &dyn FiniHoldingsProvider)
    }
    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        Some(self as &dyn DividendsProvider)
    }
    fn as_dividend_announcements_provider(&self) -> Option<&dyn DividendAnnouncementsProvider> {
        Some(self as &dyn DividendAnnouncementsProvider)
    }
    fn as_capital_reductions_provider(&self) -> Option<&dyn CapitalReductionsProvider> {
        Some(self as &dyn CapitalReductionsProvider)
    }
    fn as_capital_reduction_announcements_provider(
        &self,
    ) -> Option<&dyn CapitalReductionAnnouncementsProvider> {
        Some(self as &dyn CapitalReductionAnnouncementsProvider)
    }
    fn as_splits_provider(&self) -> Option<&dyn SplitsProvider> {
        Some(self as &dyn SplitsProvider)
    }
    fn as_split_announcements_provider(&self) -> Option<&dyn SplitAnnouncementsProvider> {
        Some(self as &dyn SplitAnnouncementsProvider)
    }
    fn as_etf_splits_provider(&self) -> Option<&dyn EtfSplitsProvider> {
        Some(self as &dyn EtfSplitsProvider)
    }
    fn as_etf_split_announcements_provider(&self) -> Option<&dyn EtfSplitAnnouncementsProvider> {
        Some(self as &dyn EtfSplitAnnouncementsProvider)
    }
    fn as_listing_applications_provider(&self) -> Option<&dyn ListingApplicationsProvider> {
        Some(self as &dyn ListingApplicationsProvider)
    }
    fn as_index_trades_provider(&self) -> Option<&dyn IndexTradesProvider> {
        Some(self as &dyn IndexTradesProvider)
    }
    fn as_index_historical_provider(&self) -> Option<&dyn IndexHistoricalProvider> {
        Some(self as &dyn IndexHistoricalProvider)
    }
    fn as_market_trades_provider(&self) -> Option<&dyn MarketTradesProvider> {
        Some(self as &dyn MarketTradesProvider)
    }
    fn as_market_institutional_provider(&self) -> Option<&dyn MarketInstitutionalProvider> {
        Some(self as &dyn MarketInstitutionalProvider)
    }
    fn as_market_margin_provider(&self) -> Option<&dyn MarketMarginProvider> {
        Some(self as &dyn MarketMarginProvider)
    }
    fn as_market_breadth_provider(&self) -> Option<&dyn MarketBreadthProvider> {
        Some(self as &dyn MarketBreadthProvider)
    }
}
