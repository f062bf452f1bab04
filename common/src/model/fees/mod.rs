//! Fee, dividend and performance summary of an ETF

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Won;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Annual and per-trade costs, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    pub management_fee: Decimal,
    pub custody_fee: Decimal,
    pub total_expense_ratio: Decimal,
    pub trading_fee: Decimal,
    pub redemption_fee: Decimal,
}

/// Distribution history and schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DividendInfo {
    /// Trailing yield, in percent
    pub dividend_yield: Decimal,
    /// Last distribution per unit
    #[cfg_attr(feature = "utoipa", schema(value_type = i64))]
    pub last_dividend: Won,
    pub dividend_date: String,
    /// e.g. `quarterly`
    pub payment_frequency: String,
    pub next_dividend_date: String,
}

/// Trailing returns, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub ytd_return: Decimal,
    pub one_year_return: Decimal,
    pub three_year_return: Decimal,
    pub five_year_return: Decimal,
}

/// Fees, dividends and performance of one ETF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtfFeesDividend {
    /// Six digit ticker
    pub ticker: String,
    /// ETF name
    pub etf_name: String,
    pub fees: FeeSchedule,
    pub dividend: DividendInfo,
    pub performance: PerformanceSummary,
    /// Date the figures were published
    pub update_date: String,
}
