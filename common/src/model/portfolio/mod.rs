//! Portfolio models and related types
//!
//! A portfolio is built in two steps: an investment plan (lump sum or
//! dollar-cost averaging) followed by an allocation across ETFs. The
//! allocation is either a ratio (values are percentages that must sum to
//! 100) or an amount (values are won that must fit inside the seed).
//!
//! Amounts are written as decimal strings so stored values keep every digit;
//! they are read back from either strings or JSON numbers.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::market::Market;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// How the portfolio is funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum InvestmentMethod {
    /// Single up-front investment
    #[serde(rename = "lumpSum")]
    LumpSum,
    /// Dollar-cost averaging
    #[serde(rename = "dca")]
    Dca,
}

/// How asset values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Values are percentages
    #[default]
    Ratio,
    /// Values are amounts
    Amount,
}

/// One allocation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct PortfolioAsset {
    /// Listing segment
    pub market: Market,
    /// Ticker or code
    pub ticker: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Percentage or amount depending on the allocation mode
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub value: Decimal,
}

/// Portfolio as submitted by the builder, before it is assigned an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDraft {
    /// Portfolio name
    pub name: String,
    /// Funding method
    pub method: InvestmentMethod,
    /// Up-front seed, required for lump sum plans
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::str_option::serialize"
    )]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub total_seed: Option<Decimal>,
    /// Periodic contribution, required for DCA plans
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::str_option::serialize"
    )]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub dca_amount: Option<Decimal>,
    /// Days between contributions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dca_interval_days: Option<u32>,
    /// Plan length in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dca_years: Option<u32>,
    /// How asset values are interpreted
    #[serde(default)]
    pub allocation_mode: AllocationMode,
    /// Allocation rows
    pub assets: Vec<PortfolioAsset>,
}

/// Stored portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Unique portfolio ID
    pub id: String,
    /// Submitted fields
    #[serde(flatten)]
    pub draft: PortfolioDraft,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl PortfolioDraft {
    /// Sum of all asset values
    pub fn allocated_total(&self) -> Decimal {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Check the plan and allocation the same way the builder does
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError("Portfolio name is required".to_string()));
        }

        match self.method {
            InvestmentMethod::LumpSum if self.total_seed.is_none() => {
                return Err(Error::ValidationError("Lump sum plans require a total seed".to_string()));
            }
            InvestmentMethod::Dca
                if self.dca_amount.is_none() || self.dca_interval_days.is_none() || self.dca_years.is_none() =>
            {
                return Err(Error::ValidationError(
                    "DCA plans require an amount, an interval and a duration".to_string(),
                ));
            }
            _ => {}
        }

        if self.assets.iter().any(|a| a.ticker.trim().is_empty()) {
            return Err(Error::ValidationError("Every asset needs a ticker".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.assets.iter().find(|a| !seen.insert(a.ticker.as_str())) {
            return Err(Error::ValidationError(format!("Duplicate ticker: {}", dup.ticker)));
        }

        let total = self.allocated_total();
        match self.allocation_mode {
            AllocationMode::Ratio if total != Decimal::ONE_HUNDRED => Err(Error::ValidationError(format!(
                "Ratio allocation must sum to 100, got {}",
                total
            ))),
            AllocationMode::Amount => {
                let target = self.total_seed.unwrap_or(Decimal::ZERO);
                if total <= Decimal::ZERO || total > target {
                    Err(Error::ValidationError(format!(
                        "Amount allocation must be positive and at most {}, got {}",
                        target, total
                    )))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::dec;

    fn asset(ticker: &str, value: Decimal) -> PortfolioAsset {
        PortfolioAsset {
            market: Market::Domestic,
            ticker: ticker.to_string(),
            name: String::new(),
            value,
        }
    }

    fn draft(assets: Vec<PortfolioAsset>) -> PortfolioDraft {
        PortfolioDraft {
            name: "Core".to_string(),
            method: InvestmentMethod::LumpSum,
            total_seed: Some(dec!(1000000)),
            dca_amount: None,
            dca_interval_days: None,
            dca_years: None,
            allocation_mode: AllocationMode::Ratio,
            assets,
        }
    }

    #[test]
    fn test_ratio_must_sum_to_hundred() {
        assert!(draft(vec![asset("069500", dec!(60)), asset("360750", dec!(40))]).validate().is_ok());

        let err = draft(vec![asset("069500", dec!(33.3)), asset("360750", dec!(33.3)), asset("091230", dec!(33.3))])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn test_rejects_duplicate_and_empty_tickers() {
        let dup = draft(vec![asset("069500", dec!(50)), asset("069500", dec!(50))]);
        assert!(dup.validate().unwrap_err().to_string().contains("Duplicate ticker"));

        let empty = draft(vec![asset("", dec!(100))]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_amount_mode_fits_inside_seed() {
        let mut d = draft(vec![asset("069500", dec!(600000)), asset("360750", dec!(400000))]);
        d.allocation_mode = AllocationMode::Amount;
        assert!(d.validate().is_ok());

        d.assets[0].value = dec!(700000);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_dca_requires_schedule() {
        let mut d = draft(vec![asset("069500", dec!(100))]);
        d.method = InvestmentMethod::Dca;
        assert!(d.validate().is_err());

        d.dca_amount = Some(dec!(100000));
        d.dca_interval_days = Some(30);
        d.dca_years = Some(5);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_builder_json_is_accepted() {
        // value arrives as a string when the builder pre-fills equal weights
        let raw = r#"{
            "name": "Two funds",
            "method": "lumpSum",
            "totalSeed": 5000000,
            "allocationMode": "ratio",
            "assets": [
                {"market": "domestic", "ticker": "069500", "name": "KODEX 200", "value": "50.0"},
                {"market": "overseas", "ticker": "QQQ", "name": "Invesco QQQ Trust", "value": 50}
            ]
        }"#;
        let d: PortfolioDraft = serde_json::from_str(raw).unwrap();
        assert_eq!(d.assets[0].value, dec!(50));
        assert_eq!(d.assets[1].market, Market::Overseas);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_amounts_keep_every_digit() {
        let mut d = draft(vec![asset("069500", dec!(33.333333333333333333))]);
        d.dca_amount = Some(dec!(100000.25));

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["assets"][0]["value"], "33.333333333333333333");
        assert_eq!(json["totalSeed"], "1000000");
        assert_eq!(json["dcaAmount"], "100000.25");

        let back: PortfolioDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back.assets[0].value, dec!(33.333333333333333333));
        assert_eq!(back, d);
    }
}
