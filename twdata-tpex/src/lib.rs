//! twdata-tpex
//!
//! Connector for the Taipei Exchange `www/zh-tw` portal. Daily pages are
//! fetched with GET, bulletins and the listing page with form POSTs. TPEx
//! event pages are complete on their own, so `include_detail` is accepted
//! and ignored.
#![warn(missing_docs)]

/// Single-day endpoints.
pub mod daily;
/// Corporate-event bulletins.
pub mod events;
/// MOPS foreign-holdings page.
pub mod fini;
/// Sector trading and closing levels.
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
use twdata_core::decode::{TpexEnvelope, parse_envelope};
use twdata_core::{
    AnnouncementQuery, CapitalReduction, CapitalReductionAnnouncement, DailyQuery,
    DividendAnnouncement, EtfSplit, EtfSplitAnnouncement, EtfSplitKind, Exchange, FetchRequest,
    Fetcher, IndexHistorical, IndexTrades, ListingApplication, ListingQuery, MarketBreadth,
    MarketInstitutional, MarketMargin, MarketRecord, MarketTrades, RangeQuery, SplitAnnouncement,
    StockDividend, StockFiniHoldings, StockInstitutional, StockMargin, StockQuote,
    StockShortSales, StockSplit, StockValues, retain_symbol,
};
use twdata_types::{ConnectorConfig, ConnectorKey, TwdataError};

/// Public connector type.
pub struct TpexConnector {
    fetcher: Arc<dyn Fetcher>,
    cfg: ConnectorConfig,
}

impl TpexConnector {
    /// Static connector key for logs and orchestrator reports.
    pub const KEY: ConnectorKey = ConnectorKey::new("twdata-tpex");

    /// Portal root every endpoint path is appended to.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.tpex.org.tw/www/zh-tw";

    /// Build against the public portal.
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_config(fetcher, ConnectorConfig::new(Self::DEFAULT_BASE_URL))
    }

    /// Build with an explicit base URL.
    #[must_use]
    pub const fn with_config(fetcher: Arc<dyn Fetcher>, cfg: ConnectorConfig) -> Self {
        Self { fetcher, cfg }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConnectorConfig {
        &self.cfg
    }

    fn daily_request(&self, path: &str, date: NaiveDate) -> FetchRequest {
        FetchRequest::get(self.cfg.url(path))
            .param("date", slashed(date))
            .param("response", "json")
    }

    fn range_form(&self, path: &str, q: &RangeQuery) -> FetchRequest {
        FetchRequest::post(self.cfg.url(path))
            .param("startDate", slashed(q.start))
            .param("endDate", slashed(q.end))
            .param("response", "json")
    }

    // The bulletin filter is advisory; rows are still filtered after decoding.
    fn announcement_form(&self, path: &str, q: &AnnouncementQuery) -> FetchRequest {
        FetchRequest::post(self.cfg.url(path))
            .param("id", q.symbol.clone().unwrap_or_default())
            .param("response", "json")
    }

    fn normalize_error(e: TwdataError) -> TwdataError {
        match e {
            TwdataError::Connector { msg, .. } | TwdataError::Other(msg) => {
                TwdataError::connector(Self::KEY.as_str(), msg)
            }
            other => other,
        }
    }

    #[tracing::instrument(
        target = "twdata::tpex",
        skip_all,
        fields(endpoint = %req.endpoint()),
    )]
    async fn envelope(&self, req: FetchRequest) -> Result<TpexEnvelope, TwdataError> {
        let payload = self
            .fetcher
            .fetch(&req)
            .await
            .map_err(Self::normalize_error)?;
        let env: TpexEnvelope = parse_envelope(req.endpoint(), payload)?;
        if env.tables.iter().all(|t| t.data.is_empty()) {
            tracing::debug!(target: "twdata::tpex", "no rows reported");
        }
        Ok(env)
    }

    #[tracing::instrument(
        target = "twdata::tpex",
        skip_all,
        fields(endpoint = %req.endpoint()),
    )]
    async fn page(&self, req: FetchRequest) -> Result<String, TwdataError> {
        self.fetcher
            .fetch(&req)
            .await
            .map_err(Self::normalize_error)?
            .into_text(req.endpoint())
    }
}

fn slashed(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

fn filtered<T: MarketRecord>(mut rows: Vec<T>, symbol: Option<&str>) -> Vec<T> {
    retain_symbol(&mut rows, symbol);
    rows
}

#[async_trait]
impl QuotesProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_quotes(&self, q: &DailyQuery) -> Result<Option<Vec<StockQuote>>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::DAILY_QUOTES, q.date)).await?;
        Ok(daily::decode_quotes(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl InstitutionalProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_institutional(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockInstitutional>>, TwdataError> {
        let req = self
            .daily_request(daily::DAILY_TRADE, q.date)
            .param("type", "Daily")
            .param("sect", "EW");
        let env = self.envelope(req).await?;
        Ok(daily::decode_institutional(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarginProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_margin(&self, q: &DailyQuery) -> Result<Option<Vec<StockMargin>>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::BALANCE, q.date)).await?;
        Ok(daily::decode_margin(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl StockValuesProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_values(&self, q: &DailyQuery) -> Result<Option<Vec<StockValues>>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::PE_QRY_DATE, q.date)).await?;
        Ok(daily::decode_values(&env, q.date)?.map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl FiniHoldingsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_fini_holdings(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockFiniHoldings>>, TwdataError> {
        let page = self.page(fini::fini_request(q.date)).await?;
        Ok(fini::decode_fini_holdings(&page, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl ShortSalesProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn stock_short_sales(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<StockShortSales>>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::SBL, q.date)).await?;
        Ok(daily::decode_short_sales(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl DividendsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(start = %q.start, end = %q.end))]
    async fn stock_dividends(&self, q: &RangeQuery) -> Result<Vec<StockDividend>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_form(events::EX_DAILY_Q, q)).await?;
        Ok(filtered(events::decode_dividends(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl DividendAnnouncementsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn dividend_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<DividendAnnouncement>, TwdataError> {
        let env = self.envelope(self.announcement_form(events::PRE_POST, q)).await?;
        Ok(filtered(
            events::decode_dividend_announcements(&env)?,
            q.symbol.as_deref(),
        ))
    }
}

#[async_trait]
impl CapitalReductionsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(start = %q.start, end = %q.end))]
    async fn capital_reductions(
        &self,
        q: &RangeQuery,
    ) -> Result<Vec<CapitalReduction>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_form(events::REVIVT, q)).await?;
        Ok(filtered(events::decode_capital_reductions(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl CapitalReductionAnnouncementsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn capital_reduction_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<CapitalReductionAnnouncement>, TwdataError> {
        let env = self.envelope(self.announcement_form(events::DECAP, q)).await?;
        Ok(filtered(
            events::decode_capital_reduction_announcements(&env)?,
            q.symbol.as_deref(),
        ))
    }
}

#[async_trait]
impl SplitsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(start = %q.start, end = %q.end))]
    async fn stock_splits(&self, q: &RangeQuery) -> Result<Vec<StockSplit>, TwdataError> {
        q.validate()?;
        let env = self.envelope(self.range_form(events::PV_CHG_RSLT, q)).await?;
        Ok(filtered(events::decode_splits(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl SplitAnnouncementsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<SplitAnnouncement>, TwdataError> {
        let env = self.envelope(self.announcement_form(events::PV_CHG_ANN, q)).await?;
        Ok(filtered(events::decode_split_announcements(&env)?, q.symbol.as_deref()))
    }
}

#[async_trait]
impl EtfSplitsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(start = %q.start, end = %q.end))]
    async fn etf_splits(&self, q: &RangeQuery) -> Result<Vec<EtfSplit>, TwdataError> {
        q.validate()?;
        let splits = self.envelope(self.range_form(events::ETF_SPLIT_RSLT, q)).await?;
        let reverse = self.envelope(self.range_form(events::ETF_RVS_RSLT, q)).await?;
        let mut rows = events::decode_etf_splits(&splits, EtfSplitKind::Split)?;
        rows.extend(events::decode_etf_splits(&reverse, EtfSplitKind::ReverseSplit)?);
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl EtfSplitAnnouncementsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn etf_split_announcements(
        &self,
        q: &AnnouncementQuery,
    ) -> Result<Vec<EtfSplitAnnouncement>, TwdataError> {
        let splits = self.envelope(self.announcement_form(events::ETF_SPLIT, q)).await?;
        let reverse = self.envelope(self.announcement_form(events::ETF_RVS, q)).await?;
        let mut rows = events::decode_etf_split_announcements(&splits, EtfSplitKind::Split)?;
        rows.extend(events::decode_etf_split_announcements(
            &reverse,
            EtfSplitKind::ReverseSplit,
        )?);
        Ok(filtered(rows, q.symbol.as_deref()))
    }
}

#[async_trait]
impl ListingApplicationsProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn listing_applications(
        &self,
        q: &ListingQuery,
    ) -> Result<Vec<ListingApplication>, TwdataError> {
        let req = FetchRequest::post(self.cfg.url(listing::APPLICANT))
            .param("code", q.symbol.clone().unwrap_or_default())
            .param("date", q.year.map_or_else(|| "ALL".to_string(), |y| y.to_string()))
            .param("id", "")
            .param("response", "json");
        let env = self.envelope(req).await?;
        Ok(filtered(
            listing::decode_listing_applications(&env)?,
            q.symbol.as_deref(),
        ))
    }
}

#[async_trait]
impl IndexTradesProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn index_trades(&self, q: &DailyQuery) -> Result<Option<Vec<IndexTrades>>, TwdataError> {
        let env = self.envelope(self.daily_request(indices::SECT_RATIO, q.date)).await?;
        Ok(indices::decode_index_trades(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarketTradesProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn market_trades(&self, date: NaiveDate) -> Result<Option<MarketTrades>, TwdataError> {
        let req = self.daily_request(daily::MARKET_STATS, date).param("type", "Daily");
        let env = self.envelope(req).await?;
        daily::decode_market_trades(&env, date)
    }
}

#[async_trait]
impl IndexHistoricalProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self), fields(date = %q.date))]
    async fn index_historical(
        &self,
        q: &DailyQuery,
    ) -> Result<Option<Vec<IndexHistorical>>, TwdataError> {
        let env = self.envelope(self.daily_request(indices::SECTINX, q.date)).await?;
        Ok(indices::decode_index_historical(&env, q.date)?
            .map(|rows| filtered(rows, q.symbol.as_deref())))
    }
}

#[async_trait]
impl MarketInstitutionalProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn market_institutional(
        &self,
        date: NaiveDate,
    ) -> Result<Option<MarketInstitutional>, TwdataError> {
        let req = self.daily_request(market::INSTI_SUMMARY, date).param("type", "Daily");
        let env = self.envelope(req).await?;
        market::decode_institutional(&env, date)
    }
}

#[async_trait]
impl MarketMarginProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn market_margin(&self, date: NaiveDate) -> Result<Option<MarketMargin>, TwdataError> {
        let env = self.envelope(self.daily_request(daily::BALANCE, date)).await?;
        market::decode_margin(&env, date)
    }
}

#[async_trait]
impl MarketBreadthProvider for TpexConnector {
    #[tracing::instrument(target = "twdata::tpex", skip(self))]
    async fn market_breadth(&self, date: NaiveDate) -> Result<Option<MarketBreadth>, TwdataError> {
        let env = self.envelope(self.daily_request(market::HIGHLIGHT, date)).await?;
        market::decode_breadth(&env, date)
    }
}

impl ExchangeConnector for TpexConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn exchange(&self) -> Exchange {
        Exchange::Tpex
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
