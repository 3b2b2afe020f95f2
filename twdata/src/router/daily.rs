use chrono::NaiveDate;
use twdata_core::{
    DailyQuery, MarketRecord, StockFiniHoldings, StockInstitutional, StockMargin, StockQuote,
    StockShortSales, StockValues,
};
use twdata_types::{Capability, Exchange, TwdataError};

use crate::Twdata;
use crate::router::macros::twdata_router_method;

/// The row for `symbol`, if the day has data and the symbol traded.
fn single<T: MarketRecord>(rows: Option<Vec<T>>, symbol: &str) -> Option<T> {
    rows?.into_iter().find(|r| r.symbol() == symbol)
}

impl Twdata {
    twdata_router_method! {
        /// Daily quotes of every stock on `exchange`, or `None` when the
        /// exchange reports no trading for the day.
        method: stock_quotes,
        fan_out: stock_quotes_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockQuote>>,
        accessor: as_quotes_provider,
        capability: Capability::Quotes,
        call: stock_quotes
    }

    twdata_router_method! {
        /// Daily institutional-investor flows per stock.
        method: stock_institutional,
        fan_out: stock_institutional_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockInstitutional>>,
        accessor: as_institutional_provider,
        capability: Capability::Institutional,
        call: stock_institutional
    }

    twdata_router_method! {
        /// Daily margin purchase and short sale balances per stock.
        method: stock_margin,
        fan_out: stock_margin_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockMargin>>,
        accessor: as_margin_provider,
        capability: Capability::Margin,
        call: stock_margin
    }

    twdata_router_method! {
        /// Daily margin short and securities-borrowing short sale balances.
        method: stock_short_sales,
        fan_out: stock_short_sales_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockShortSales>>,
        accessor: as_short_sales_provider,
        capability: Capability::ShortSales,
        call: stock_short_sales
    }

    twdata_router_method! {
        /// Daily P/E, P/B and dividend yield per stock.
        method: stock_values,
        fan_out: stock_values_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockValues>>,
        accessor: as_stock_values_provider,
        capability: Capability::StockValues,
        call: stock_values
    }

    twdata_router_method! {
        /// Foreign and mainland investor holdings per stock.
        method: stock_fini_holdings,
        fan_out: stock_fini_holdings_all,
        arg: q: &DailyQuery,
        returns: Option<Vec<StockFiniHoldings>>,
        accessor: as_fini_holdings_provider,
        capability: Capability::FiniHoldings,
        call: stock_fini_holdings
    }

    /// Quote of one stock on one day; `None` when there is none.
    ///
    /// # Errors
    /// As [`Self::stock_quotes`].
    pub async fn stock_quote(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<StockQuote>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(single(self.stock_quotes(exchange, &q).await?, symbol))
    }

    /// Institutional flows of one stock on one day; `None` when there are none.
    ///
    /// # Errors
    /// As [`Self::stock_institutional`].
    pub async fn stock_flows(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<StockInstitutional>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(single(self.stock_institutional(exchange, &q).await?, symbol))
    }

    /// Margin balances of one stock on one day.
    ///
    /// # Errors
    /// As [`Self::stock_margin`].
    pub async fn stock_margin_balance(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<StockMargin>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(single(self.stock_margin(exchange, &q).await?, symbol))
    }

    /// Short sale balances of one stock on one day.
    ///
    /// # Errors
    /// As [`Self::stock_short_sales`].
    pub async fn stock_short_sale_balance(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<StockShortSales>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(single(self.stock_short_sales(exchange, &q).await?, symbol))
    }

    /// Valuation ratios of one stock on one day.
    ///
    /// # Errors
    /// As [`Self::stock_values`].
    pub async fn stock_value(
        &self,
        exchange: Exchange,
        date: NaiveDate,
        symbol: &str,
    ) -> Result<Option<StockValues>, TwdataError> {
        let q = DailyQuery::new(date).with_symbol(symbol);
        Ok(single(self.stock_values(exchange, &q).await?, symbol))
    }
}
