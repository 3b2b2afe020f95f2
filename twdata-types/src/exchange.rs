use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TwdataError;

/// The two Taiwanese data portals a record can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exchange {
    /// Taiwan Stock Exchange (listed market).
    #[serde(rename = "TWSE")]
    Twse,
    /// Taipei Exchange (over-the-counter market).
    #[serde(rename = "TPEx")]
    Tpex,
}

impl Exchange {
    /// Every supported exchange, in canonical order.
    pub const ALL: [Self; 2] = [Self::Twse, Self::Tpex];

    /// Display code used by both portals and in serialized records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twse => "TWSE",
            Self::Tpex => "TPEx",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = TwdataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TWSE" => Ok(Self::Twse),
            "TPEX" => Ok(Self::Tpex),
            other => Err(TwdataError::InvalidArg(format!("unknown exchange: {other}"))),
        }
    }
}
