use chrono::NaiveDate;
use twdata_core::{
    DailyQuery, IndexHistorical, IndexTrades, MarketBreadth, MarketInstitutional, MarketMargin,
    MarketTrades,
};
use twdata_types::{Capability, Exchange, TwdataError};

use crate::Twdata;
use crate::router::macros::twdata_router_method;

impl Twdata {
    twdata_router_method! {
        /// Sector index trading, including the indices derived from it.
        method: index_trades,
        fan_out: index_trades_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<IndexTrades>>,
        accessor: as_index_trades_provider,
        capability: Capability::IndexTrades,
        call: index_trades
    }

    twdata_router_method! {
        /// Daily open, high, low and close of every catalogued index.
        method: index_historical,
        fan_out: index_historical_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<IndexHistorical>>,
        accessor: as_index_historical_provider,
        capability: Capability::IndexHistorical,
        call: index_historical
    }

    twdata_router_method! {
        /// Market-wide trading totals for the day.
        method: market_trades,
        fan_out: market_trades_all,
        arg: date: NaiveDate,
        returns: Option<MarketTrades>,
        accessor: as_market_trades_provider,
        capability: Capability::MarketTrades,
        call: market_trades
    }

    twdata_router_method! {
        /// Market-wide institutional-investor flows for the day.
        method: market_institutional,
        fan_out: market_institutional_all,
        arg: date: NaiveDate,
        returns: Option<MarketInstitutional>,
        accessor: as_market_institutional_provider,
        capability: Capability::MarketInstitutional,
        call: market_institutional
    }

    twdata_router_method! {
        /// Market-wide margin and short balances for the day.
        method: market_margin,
        fan_out: market_margin_all,
        arg: date: NaiveDate,
        returns: Option<MarketMargin>,
        accessor: as_market_margin_provider,
        capability: Capability::MarketMargin,
        call: market_margin
    }

    twdata_router_method! {
        /// Advancing, declining and unchanged stock counts for the day.
        method: market_breadth,
        fan_out: market_breadth_all,
        arg: date: NaiveDate,
        returns: Option<MarketBreadth>,
        accessor: as_market_breadth_provider,
        capability: Capability::MarketBreadth,
        call: market_breadth
    }

    /// Trading of one index on one day, looked up by its `IX` code.
    ///
    /// # Errors
    /// As [`Self::index_trades`].
    pub async fn index_trade(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<IndexTrades>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(self
            .index_trades(exchange, &q)
            .await?
            .and_then(|rows| rows.into_iter().find(|r| r.symbol == symbol)))
    }
}
