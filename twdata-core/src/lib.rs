//! twdata-core
//!
//! Core types, traits, and normalization utilities shared across the twdata
//! workspace.
//!
//! - `types`: normalized record types (quotes, institutional flows, balances,
//!   valuations, foreign holdings, corporate events, listing applications,
//!   index trades and levels, market-wide summaries) and query types.
//! - `connector`: the `ExchangeConnector` trait and capability provider traits.
//! - `fetch`: the contract of the external fetch collaborator.
//! - `normalize`: ROC-calendar dates, locale numerics and HTML cell and table
//!   extraction.
//! - `decode`: positional row decoding, envelope models and the
//!   institutional-flow layout tables selected by row length.
//! - `unify`: summary + detail merging with partial-failure isolation.
//! - `synth`: derived sector-index aggregates.
//!
//! Async runtime
//! -------------
//! Nothing here spawns tasks. Detail look-ups are driven with `futures`
//! combinators inside the caller's future, so any executor works; the
//! connectors and orchestrator are exercised under Tokio.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ExchangeConnector` interface.
pub mod connector;
/// Positional row decoding and upstream envelope models.
pub mod decode;
/// Fetch collaborator contract.
pub mod fetch;
/// Sector index name to symbol catalog.
pub mod index_catalog;
/// Pure normalizers for dates, numbers and HTML cells.
pub mod normalize;
/// Derived-index synthesis.
pub mod synth;
pub mod types;
/// Summary + detail merging.
pub mod unify;

pub use connector::ExchangeConnector;
pub use decode::{Cells, DecodeError, FlowLayout, LayoutTable, Slot, decode_rows};
pub use fetch::{FetchRequest, Fetcher, Method, Payload};
pub use index_catalog::index_symbol;
pub use normalize::{
    ReportDate, RocDate, RocFormat, labelled_cell, parse_financial_report_date, parse_numeric,
    roc_date, roc_to_western, strip_html_tags, western_to_roc,
};
pub use synth::{Basket, Complement, market_weight, synthesize_basket, synthesize_complements};
pub use types::*;
pub use unify::{DetailKey, MergeDetail, Summary, merge_details};
