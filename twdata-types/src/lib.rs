//! Shared data transfer objects and configuration primitives for the twdata workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod exchange;
mod reports;

pub use capability::Capability;
pub use config::{ConnectorConfig, TwdataConfig};
pub use connector::ConnectorKey;
pub use error::TwdataError;
pub use exchange::Exchange;
pub use reports::FetchReport;
