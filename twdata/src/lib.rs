//! twdata routes requests for Taiwanese daily market data to the connector of
//! the exchange that publishes it.
//!
//! Overview
//! - One connector per [`Exchange`]; each implements the role traits of
//!   `twdata_core::connector` for the endpoints its portal offers.
//! - Per-exchange methods (`stock_quotes(Exchange::Twse, &q)`) call exactly one
//!   connector and surface its error unchanged, tagged with the connector name.
//! - Fan-out methods (`stock_quotes_all(&q)`) call every registered connector
//!   concurrently and return a [`FetchReport`]: rows in registration order plus
//!   the failures of connectors that did not answer. Only when every attempted
//!   connector fails is the call itself an error.
//! - Singular helpers (`stock_quote`) look up one symbol and return `None` when
//!   the exchange has no row for it.
//!
//! Null versus empty follows the connectors: daily endpoints answer
//! `Option<Vec<_>>` (`None` when the portal reports no data for the day),
//! range and listing endpoints answer a possibly empty `Vec`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use twdata::{DailyQuery, Exchange, Twdata};
//!
//! let twdata = Twdata::builder()
//!     .with_connector(Arc::new(twdata_twse::TwseConnector::new(fetcher.clone())))
//!     .with_connector(Arc::new(twdata_tpex::TpexConnector::new(fetcher)))
//!     .provider_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let tsmc = twdata.stock_quote(Exchange::Twse, day, "2330").await?;
//! let report = twdata.stock_quotes_all(&DailyQuery::new(day)).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Twdata, TwdataBuilder, tag_err};
pub use router::util::{IntoRows, collapse_errors};

pub use twdata_core::{
    AnnouncementQuery, CapitalReduction, CapitalReductionAnnouncement, DailyQuery,
    DividendAnnouncement, EtfSplit, EtfSplitAnnouncement, EtfSplitKind, ExchangeConnector,
    Fetcher, IndexHistorical, IndexTrades, InvestorCategory, InvestorFlow, ListingApplication,
    ListingQuery, MarketBreadth, MarketFlow, MarketInstitutional, MarketMargin, MarketTrades,
    RangeQuery, SplitAnnouncement, StockDividend, StockFiniHoldings, StockInstitutional,
    StockMargin, StockQuote, StockShortSales, StockSplit, StockValues,
};
pub use twdata_types::{
    Capability, ConnectorConfig, Exchange, FetchReport, TwdataConfig, TwdataError,
};
