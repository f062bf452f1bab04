//! Market segments and listings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Market segment an ETF is listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Korean exchange listing
    Domestic,
    /// Foreign listing
    Overseas,
}

impl FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "domestic" => Ok(Market::Domestic),
            "overseas" => Ok(Market::Overseas),
            other => Err(Error::ValidationError(format!("Unknown market: {}", other))),
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Domestic => f.write_str("domestic"),
            Market::Overseas => f.write_str("overseas"),
        }
    }
}

/// Searchable ETF listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct EtfListing {
    /// Ticker or code
    pub ticker: String,
    /// Display name
    pub name: String,
}
