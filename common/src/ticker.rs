//! Domestic ticker validation

use std::fmt;

use crate::error::{Error, Result};

/// Number of digits in a domestic instrument code
pub const TICKER_LEN: usize = 6;

/// Check that `raw` is exactly six ASCII digits
pub fn is_valid_ticker(raw: &str) -> bool {
    raw.len() == TICKER_LEN && raw.bytes().all(|b| b.is_ascii_digit())
}

/// A validated six digit domestic ticker (e.g. `069500`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Validate and wrap a raw ticker
    pub fn parse(raw: &str) -> Result<Self> {
        if is_valid_ticker(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidTicker(raw.to_string()))
        }
    }

    /// The ticker as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
