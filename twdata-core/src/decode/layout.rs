//! Institutional-flow row layouts.
//!
//! The portals never tag which layout a row uses; the variant is inferred from
//! the number of value columns after symbol and name. Each known variant is a
//! [`FlowLayout`] entry in a [`LayoutTable`], so supporting a new upstream
//! layout means adding one entry.

use super::{Cells, DecodeError};
use crate::types::{InvestorCategory, InvestorFlow};

use InvestorCategory::{
    Dealers, DealersHedging, DealersProprietary, Foreign, ForeignDealers,
    ForeignExcludingDealers, InvestmentTrust, Total,
};

/// One category's columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Buy, sell and net columns.
    Full(InvestorCategory),
    /// A single net column (aggregates).
    NetOnly(InvestorCategory),
}

impl Slot {
    /// Number of value columns the slot consumes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Full(_) => 3,
            Self::NetOnly(_) => 1,
        }
    }

    /// Category the slot decodes into.
    #[must_use]
    pub const fn category(self) -> InvestorCategory {
        match self {
            Self::Full(c) | Self::NetOnly(c) => c,
        }
    }
}

/// A row layout: its column count and the ordered slots that consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    /// Number of value columns a row of this layout has.
    pub columns: usize,
    /// Slots in column order.
    pub slots: &'static [Slot],
}

impl FlowLayout {
    /// Decode a value row into flows, in slot order.
    ///
    /// # Errors
    /// `SchemaMismatch` when the row is not exactly `columns` wide.
    pub fn decode(&self, values: Cells<'_>) -> Result<Vec<InvestorFlow>, DecodeError> {
        if values.len() != self.columns {
            return Err(DecodeError::SchemaMismatch {
                columns: values.len(),
                known: vec![self.columns],
            });
        }
        let mut at = 0;
        let mut flows = Vec::with_capacity(self.slots.len());
        for slot in self.slots {
            flows.push(match *slot {
                Slot::Full(c) => InvestorFlow::full(
                    c,
                    values.num(at)?,
                    values.num(at + 1)?,
                    values.num(at + 2)?,
                ),
                Slot::NetOnly(c) => InvestorFlow::net_only(c, values.num(at)?),
            });
            at += slot.width();
        }
        Ok(flows)
    }

    /// Slot widths add up to `columns` and the row ends in the net-only total.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let width: usize = self.slots.iter().map(|s| s.width()).sum();
        width == self.columns && self.slots.last() == Some(&Slot::NetOnly(Total))
    }
}

/// The set of layouts one endpoint is known to have used.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTable {
    layouts: &'static [FlowLayout],
}

impl LayoutTable {
    /// Build a table from layout entries.
    #[must_use]
    pub const fn new(layouts: &'static [FlowLayout]) -> Self {
        Self { layouts }
    }

    /// All entries.
    #[must_use]
    pub const fn layouts(&self) -> &'static [FlowLayout] {
        self.layouts
    }

    /// The layout for a row of `columns` value columns.
    #[must_use]
    pub fn select(&self, columns: usize) -> Option<&'static FlowLayout> {
        self.layouts.iter().find(|l| l.columns == columns)
    }

    /// Column counts of every entry.
    #[must_use]
    pub fn known_columns(&self) -> Vec<usize> {
        self.layouts.iter().map(|l| l.columns).collect()
    }

    /// Select the layout by row width and decode.
    ///
    /// # Errors
    /// `SchemaMismatch` when no entry has the row's width.
    pub fn decode(&self, values: Cells<'_>) -> Result<Vec<InvestorFlow>, DecodeError> {
        self.select(values.len())
            .ok_or_else(|| DecodeError::SchemaMismatch {
                columns: values.len(),
                known: self.known_columns(),
            })?
            .decode(values)
    }
}

/// TWSE `T86` layouts.
///
/// - 17: foreign investors split from foreign dealers (current).
/// - 14: combined foreign investors, dealers split into proprietary and hedging.
/// - 10: dealers reported as a single category.
pub const TWSE_INSTITUTIONAL: LayoutTable = LayoutTable::new(&[
    FlowLayout {
        columns: 17,
        slots: &[
            Slot::Full(ForeignExcludingDealers),
            Slot::Full(ForeignDealers),
            Slot::Full(InvestmentTrust),
            Slot::NetOnly(Dealers),
            Slot::Full(DealersProprietary),
            Slot::Full(DealersHedging),
            Slot::NetOnly(Total),
        ],
    },
    FlowLayout {
        columns: 14,
        slots: &[
            Slot::Full(Foreign),
            Slot::Full(InvestmentTrust),
            Slot::NetOnly(Dealers),
            Slot::Full(DealersProprietary),
            Slot::Full(DealersHedging),
            Slot::NetOnly(Total),
        ],
    },
    FlowLayout {
        columns: 10,
        slots: &[
            Slot::Full(Foreign),
            Slot::Full(InvestmentTrust),
            Slot::Full(Dealers),
            Slot::NetOnly(Total),
        ],
    },
]);

/// TPEx `insti/dailyTrade` layouts.
///
/// - 22: foreign investors split from foreign dealers, plus the combined
///   foreign figure and a full dealers row (current).
/// - 14: same shape as the TWSE 14-column layout.
pub const TPEX_INSTITUTIONAL: LayoutTable = LayoutTable::new(&[
    FlowLayout {
        columns: 22,
        slots: &[
            Slot::Full(ForeignExcludingDealers),
            Slot::Full(ForeignDealers),
            Slot::Full(Foreign),
            Slot::Full(InvestmentTrust),
            Slot::Full(DealersProprietary),
            Slot::Full(DealersHedging),
            Slot::Full(Dealers),
            Slot::NetOnly(Total),
        ],
    },
    FlowLayout {
        columns: 14,
        slots: &[
            Slot::Full(Foreign),
            Slot::Full(InvestmentTrust),
            Slot::NetOnly(Dealers),
            Slot::Full(DealersProprietary),
            Slot::Full(DealersHedging),
            Slot::NetOnly(Total),
        ],
    },
]);
