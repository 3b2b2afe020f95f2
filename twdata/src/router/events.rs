use twdata_core::{
    AnnouncementQuery, CapitalReduction, CapitalReductionAnnouncement, DividendAnnouncement,
    EtfSplit, EtfSplitAnnouncement, RangeQuery, SplitAnnouncement, StockDividend, StockSplit,
};
use twdata_types::Capability;

use crate::Twdata;
use crate::router::macros::twdata_router_method;

impl Twdata {
    twdata_router_method! {
        /// Ex-right / ex-dividend results between `q.start` and `q.end`.
        ///
        /// Whether per-symbol detail is fetched when `q.include_detail` is
        /// unset is decided by each exchange.
        method: stock_dividends,
        fan_out: stock_dividends_all,
        arg: q: &RangeQuery,
        returns: Vec<StockDividend>,
        accessor: as_dividends_provider,
        capability: Capability::Dividends,
        call: stock_dividends
    }

    twdata_router_method! {
        /// Upcoming ex-right / ex-dividend announcements.
        method: dividend_announcements,
        fan_out: dividend_announcements_all,
        arg: q: &AnnouncementQuery,
        returns: Vec<DividendAnnouncement>,
        accessor: as_dividend_announcements_provider,
        capability: Capability::DividendAnnouncements,
        call: dividend_announcements
    }

    twdata_router_method! {
        /// Capital reduction results between `q.start` and `q.end`.
        method: capital_reductions,
        fan_out: capital_reductions_all,
        arg: q: &RangeQuery,
        returns: Vec<CapitalReduction>,
        accessor: as_capital_reductions_provider,
        capability: Capability::CapitalReductions,
        call: capital_reductions
    }

    twdata_router_method! {
        /// Upcoming capital reduction announcements.
        method: capital_reduction_announcements,
        fan_out: capital_reduction_announcements_all,
        arg: q: &AnnouncementQuery,
        returns: Vec<CapitalReductionAnnouncement>,
        accessor: as_capital_reduction_announcements_provider,
        capability: Capability::CapitalReductionAnnouncements,
        call: capital_reduction_announcements
    }

    twdata_router_method! {
        /// Par-value change results between `q.start` and `q.end`.
        method: stock_splits,
        fan_out: stock_splits_all,
        arg: q: &RangeQuery,
        returns: Vec<StockSplit>,
        accessor: as_splits_provider,
        capability: Capability::Splits,
        call: stock_splits
    }

    twdata_router_method! {
        /// Upcoming par-value change announcements.
        method: split_announcements,
        fan_out: split_announcements_all,
        arg: q: &AnnouncementQuery,
        returns: Vec<SplitAnnouncement>,
        accessor: as_split_announcements_provider,
        capability: Capability::SplitAnnouncements,
        call: split_announcements
    }

    twdata_router_method! {
        /// ETF split and reverse split results between `q.start` and `q.end`.
        method: etf_splits,
        fan_out: etf_splits_all,
        arg: q: &RangeQuery,
        returns: Vec<EtfSplit>,
        accessor: as_etf_splits_provider,
        capability: Capability::EtfSplits,
        call: etf_splits
    }

    twdata_router_method! {
        /// Upcoming ETF split and reverse split announcements.
        method: etf_split_announcements,
        fan_out: etf_split_announcements_all,
        arg: q: &AnnouncementQuery,
        returns: Vec<EtfSplitAnnouncement>,
        accessor: as_etf_split_announcements_provider,
        capability: Capability::EtfSplitAnnouncements,
        call: etf_split_announcements
    }
}
