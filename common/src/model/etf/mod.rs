//! ETF price and holdings snapshots

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Rate, Weight, Won};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Date format used for `updateDate`
pub const UPDATE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Point-in-time quote for an ETF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtfPriceSnapshot {
    /// Six digit ticker
    pub ticker: String,
    /// Instrument name
    pub name: String,
    /// Current price
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub current_price: Won,
    /// Change versus the previous close
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub change_price: Won,
    /// Change versus the previous close, in percent
    #[cfg_attr(feature = "utoipa", schema(value_type = f64))]
    pub change_rate: Rate,
    /// Accumulated volume
    pub volume: i64,
    /// Accumulated trading value
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub trading_value: Won,
    /// Session high
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub high: Won,
    /// Session low
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub low: Won,
    /// Session open
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub open: Won,
    /// Previous close
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub previous_close: Won,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

/// Single constituent of an ETF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Constituent code
    pub stock_code: String,
    /// Constituent name
    pub stock_name: String,
    /// Weight in the basket, in percent
    #[cfg_attr(feature = "utoipa", schema(value_type = f64))]
    pub weight: Weight,
    /// Shares held
    pub shares: i64,
    /// Market value held
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub value: Won,
}

impl Holding {
    /// Create a holding row
    pub fn new(stock_code: &str, stock_name: &str, weight: Weight, shares: i64, value: Won) -> Self {
        Self {
            stock_code: stock_code.to_string(),
            stock_name: stock_name.to_string(),
            weight,
            shares,
            value,
        }
    }
}

/// Composition of an ETF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtfHoldingsSnapshot {
    /// Six digit ticker
    pub ticker: String,
    /// ETF name
    pub etf_name: String,
    /// Net asset value per unit
    pub nav: Decimal,
    /// Number of constituents
    pub total_holdings: i64,
    /// Date the composition was published
    pub update_date: String,
    /// Constituents, in the order reported
    pub holdings: Vec<Holding>,
}

impl EtfHoldingsSnapshot {
    /// Zeroed snapshot for a ticker with no known composition
    pub fn unknown(ticker: &str, today: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            etf_name: "Unknown ETF".to_string(),
            nav: Decimal::ZERO,
            total_holdings: 0,
            update_date: today.format(UPDATE_DATE_FORMAT).to_string(),
            holdings: Vec::new(),
        }
    }
}

/// Price snapshot merged with the holdings fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtfInfo {
    /// Price fields
    #[serde(flatten)]
    pub price: EtfPriceSnapshot,
    /// Constituents
    pub holdings: Vec<Holding>,
    /// Net asset value per unit
    pub nav: Decimal,
    /// Number of constituents
    pub total_holdings: i64,
    /// Date the composition was published
    pub update_date: String,
}

impl EtfInfo {
    /// Merge a price snapshot with the holdings of the same ETF
    pub fn merge(price: EtfPriceSnapshot, holdings: EtfHoldingsSnapshot) -> Self {
        Self {
            price,
            holdings: holdings.holdings,
            nav: holdings.nav,
            total_holdings: holdings.total_holdings,
            update_date: holdings.update_date,
        }
    }
}
