//! Daily price history

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Period requested when none is given
pub const DEFAULT_HISTORY_PERIOD: &str = "3m";

/// Days looked back for `period` (`1m`, `3m`, `6m`, `1y`), three months otherwise
pub fn lookback_days(period: &str) -> i64 {
    match period {
        "1m" => 30,
        "3m" => 90,
        "6m" => 180,
        "1y" => 365,
        _ => 90,
    }
}

/// One daily candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct PricePoint {
    /// Business date as reported (`YYYYMMDD` from the vendor, `YYYY-MM-DD` for mock data)
    pub date: String,
    /// Open
    pub open: Decimal,
    /// High
    pub high: Decimal,
    /// Low
    pub low: Decimal,
    /// Close
    pub close: Decimal,
    /// Accumulated volume
    pub volume: i64,
}

/// Daily candles of an ETF over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtfPriceHistory {
    /// Six digit ticker
    pub ticker: String,
    /// Period as requested
    pub period: String,
    /// Candles, oldest first for mock data, vendor order otherwise
    pub price_history: Vec<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::dec;

    #[test]
    fn test_lookback_days() {
        assert_eq!(lookback_days("1m"), 30);
        assert_eq!(lookback_days("6m"), 180);
        assert_eq!(lookback_days("1y"), 365);
        assert_eq!(lookback_days("5y"), 90);
        assert_eq!(lookback_days(DEFAULT_HISTORY_PERIOD), 90);
    }

    #[test]
    fn test_history_serializes_price_history_key() {
        let history = EtfPriceHistory {
            ticker: "069500".to_string(),
            period: "1m".to_string(),
            price_history: vec![PricePoint {
                date: "20251001".to_string(),
                open: dec!(35200),
                high: dec!(35300),
                low: dec!(35005),
                close: dec!(35120),
                volume: 4_123_456,
            }],
        };
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json["period"], "1m");
        assert_eq!(json["priceHistory"][0]["date"], "20251001");
        assert_eq!(json["priceHistory"][0]["close"].as_f64(), Some(35120.0));
        assert_eq!(json["priceHistory"][0]["volume"], 4_123_456);
        assert!(json.get("price_history").is_none());
    }
}
