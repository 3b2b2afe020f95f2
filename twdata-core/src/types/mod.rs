//! Normalized record and query types.
//!
//! Every record carries its `exchange`, `symbol` and `name`, plus the date (or
//! dates) that key it. Numeric fields are `Option<Decimal>`: `None` means the
//! portal reported the value as not applicable or not yet disclosed, while
//! `Some(0)` is a real zero.

mod balance;
mod events;
mod index;
mod institutional;
mod listing;
mod market;
mod query;
mod quote;
mod values;

pub use balance::{StockMargin, StockShortSales};
pub use events::{
    CapitalReduction, CapitalReductionAnnouncement, CapitalReductionAnnouncementDetail,
    CapitalReductionDetail, DividendAnnouncement, DividendDetail, EtfSplit, EtfSplitAnnouncement,
    EtfSplitKind, SplitAnnouncement, SplitAnnouncementDetail, StockDividend, StockSplit,
};
pub use index::{IndexHistorical, IndexTrades, MarketTrades};
pub use institutional::{InvestorCategory, InvestorFlow, StockInstitutional};
pub use listing::ListingApplication;
pub use market::{MarketBreadth, MarketFlow, MarketInstitutional, MarketMargin};
pub use query::{AnnouncementQuery, DailyQuery, ListingQuery, RangeQuery, retain_symbol};
pub use quote::StockQuote;
pub use values::{StockFiniHoldings, StockValues};

pub use twdata_types::Exchange;

/// Common accessors shared by every per-symbol record.
pub trait MarketRecord {
    /// Exchange-assigned security code.
    fn symbol(&self) -> &str;
    /// Portal the record was decoded from.
    fn exchange(&self) -> Exchange;
}

macro_rules! market_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MarketRecord for $ty {
                fn symbol(&self) -> &str {
                    &self.symbol
                }

                fn exchange(&self) -> Exchange {
                    self.exchange
                }
            }
        )+
    };
}

market_record!(
    StockQuote,
    StockInstitutional,
    StockMargin,
    StockShortSales,
    StockDividend,
    DividendAnnouncement,
    CapitalReduction,
    CapitalReductionAnnouncement,
    StockSplit,
    SplitAnnouncement,
    ListingApplication,
    IndexTrades,
    IndexHistorical,
    StockValues,
    StockFiniHoldings,
    EtfSplit,
    EtfSplitAnnouncement,
);
