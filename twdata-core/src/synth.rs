//! Derived-Index Synthesizer.
//!
//! Builds aggregate sector rows that a portal leaves out, either by summing a
//! fixed basket of sibling rows or by subtracting siblings from a market-wide
//! total. Sums propagate `None`: one missing input value makes the derived
//! value `None` rather than an undercount.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{IndexTrades, MarketTrades};

/// An aggregate defined as the sum of fixed members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basket {
    /// Symbol of the synthesized row.
    pub target: &'static str,
    /// Display name of the synthesized row.
    pub name: &'static str,
    /// Symbols whose rows are summed.
    pub members: &'static [&'static str],
}

/// An aggregate defined as the market total minus some siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complement {
    /// Symbol of the synthesized row.
    pub target: &'static str,
    /// Display name of the synthesized row.
    pub name: &'static str,
    /// Symbols subtracted from the total.
    pub subtract: &'static [&'static str],
}

/// Append `basket.target` to `rows` when it can be derived.
///
/// Nothing happens when the target is already present or when any member is
/// missing. Volume and value are exact sums; weight is the sum of member
/// weights rounded to two decimals, half away from zero.
///
/// Returns whether a row was appended.
pub fn synthesize_basket(rows: &mut Vec<IndexTrades>, basket: &Basket) -> bool {
    if rows.iter().any(|r| r.symbol == basket.target) {
        return false;
    }
    let members: Option<Vec<&IndexTrades>> = basket
        .members
        .iter()
        .map(|m| rows.iter().find(|r| r.symbol == *m))
        .collect();
    let Some(members) = members else {
        return false;
    };
    let Some(first) = members.first() else {
        return false;
    };

    let row = IndexTrades {
        date: first.date,
        exchange: first.exchange,
        symbol: basket.target.to_string(),
        name: basket.name.to_string(),
        trade_volume: sum(members.iter().map(|r| r.trade_volume)),
        trade_value: sum(members.iter().map(|r| r.trade_value)),
        trade_weight: sum(members.iter().map(|r| r.trade_weight)).map(round2),
    };
    rows.push(row);
    true
}

/// Derive complement rows from the market total.
///
/// Returns `None` when `market` is `None`: without the market total no
/// complement is computed at all. Otherwise the sector total is the sum of
/// every row whose symbol is not in `base_exclusions`, each complement is that
/// total minus its `subtract` rows, and its weight is its value over the
/// market value. A complement whose siblings are not all present is skipped,
/// and so is one whose target the page already carries; such rows are never
/// counted in the sector total either.
#[must_use]
pub fn synthesize_complements(
    rows: &[IndexTrades],
    market: Option<&MarketTrades>,
    base_exclusions: &[&str],
    complements: &[Complement],
) -> Option<Vec<IndexTrades>> {
    let market = market?;
    let base: Vec<&IndexTrades> = rows
        .iter()
        .filter(|r| !base_exclusions.contains(&r.symbol.as_str()))
        .filter(|r| !complements.iter().any(|c| c.target == r.symbol))
        .collect();
    let total_volume = sum(base.iter().map(|r| r.trade_volume));
    let total_value = sum(base.iter().map(|r| r.trade_value));

    let mut out = Vec::with_capacity(complements.len());
    for c in complements {
        if rows.iter().any(|r| r.symbol == c.target) {
            continue;
        }
        let siblings: Option<Vec<&IndexTrades>> = c
            .subtract
            .iter()
            .map(|s| rows.iter().find(|r| r.symbol == *s))
            .collect();
        let Some(siblings) = siblings else {
            tracing::debug!(target: "twdata::synth", target_symbol = c.target, "sibling missing; skipping complement");
            continue;
        };
        let value = minus(total_value, sum(siblings.iter().map(|r| r.trade_value)));
        out.push(IndexTrades {
            date: market.date,
            exchange: market.exchange,
            symbol: c.target.to_string(),
            name: c.name.to_string(),
            trade_volume: minus(total_volume, sum(siblings.iter().map(|r| r.trade_volume))),
            trade_value: value,
            trade_weight: market_weight(value, market.trade_value),
        });
    }
    Some(out)
}

/// `value / market_value * 100`, rounded to two decimals half away from zero.
///
/// `None` when either side is missing or the market value is zero.
#[must_use]
pub fn market_weight(value: Option<Decimal>, market_value: Option<Decimal>) -> Option<Decimal> {
    let (value, market_value) = (value?, market_value?);
    if market_value.is_zero() {
        return None;
    }
    value
        .checked_div(market_value)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(round2)
}

fn sum(mut values: impl Iterator<Item = Option<Decimal>>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v?))
}

fn minus(total: Option<Decimal>, less: Option<Decimal>) -> Option<Decimal> {
    total?.checked_sub(less?)
}

fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
