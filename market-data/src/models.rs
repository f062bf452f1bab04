//! Vendor wire models
//!
//! The vendor answers with Korean field abbreviations and string-encoded
//! numbers. Every field is optional here; coercion into the public snapshot
//! types happens in the `into_*` conversions with default-to-zero semantics.

use chrono::{DateTime, NaiveDate, Utc};
use common::decimal::coerce::{decimal_or_zero, int_or_zero};
use common::model::etf::{EtfHoldingsSnapshot, EtfPriceSnapshot, Holding, UPDATE_DATE_FORMAT};
use common::model::history::{EtfPriceHistory, PricePoint};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string or a number, anything else reads as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Non-empty text or `None`
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Body of the client-credentials token exchange
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    /// Always `client_credentials`
    pub grant_type: &'static str,
    /// Application key
    pub appkey: &'a str,
    /// Application secret
    pub appsecret: &'a str,
}

/// Token exchange response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Issued bearer token
    pub access_token: Option<String>,
    /// Vendor message, when present
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Quotation envelope shared by the price and holdings lookups
#[derive(Debug, Deserialize)]
pub struct QuotationEnvelope<T> {
    /// Result code, `"0"` on success
    #[serde(default, deserialize_with = "lenient_string")]
    pub rt_cd: Option<String>,
    /// Vendor message
    #[serde(default)]
    pub msg1: Option<String>,
    /// Payload
    pub output: Option<T>,
}

/// Price quotation output (`FHKST01010100`)
#[derive(Debug, Default, Deserialize)]
pub struct PriceOutput {
    /// Korean instrument name
    #[serde(default, deserialize_with = "lenient_string")]
    pub hts_kor_isnm: Option<String>,
    /// Current price
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_prpr: Option<String>,
    /// Change versus previous day
    #[serde(default, deserialize_with = "lenient_string")]
    pub prdy_vrss: Option<String>,
    /// Change rate versus previous day
    #[serde(default, deserialize_with = "lenient_string")]
    pub prdy_ctrt: Option<String>,
    /// Accumulated volume
    #[serde(default, deserialize_with = "lenient_string")]
    pub acml_vol: Option<String>,
    /// Accumulated trading value
    #[serde(default, deserialize_with = "lenient_string")]
    pub acml_tr_pbmn: Option<String>,
    /// High
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_hgpr: Option<String>,
    /// Low
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_lwpr: Option<String>,
    /// Open
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_oprc: Option<String>,
    /// Base price (previous close)
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_sdpr: Option<String>,
}

impl PriceOutput {
    /// Map into the public snapshot
    pub fn into_snapshot(self, ticker: &str, timestamp: DateTime<Utc>) -> EtfPriceSnapshot {
        EtfPriceSnapshot {
            ticker: ticker.to_string(),
            name: non_empty(&self.hts_kor_isnm).unwrap_or("Unknown").to_string(),
            current_price: int_or_zero(self.stck_prpr.as_deref()),
            change_price: int_or_zero(self.prdy_vrss.as_deref()),
            change_rate: decimal_or_zero(self.prdy_ctrt.as_deref()),
            volume: int_or_zero(self.acml_vol.as_deref()),
            trading_value: int_or_zero(self.acml_tr_pbmn.as_deref()),
            high: int_or_zero(self.stck_hgpr.as_deref()),
            low: int_or_zero(self.stck_lwpr.as_deref()),
            open: int_or_zero(self.stck_oprc.as_deref()),
            previous_close: int_or_zero(self.stck_sdpr.as_deref()),
            timestamp,
        }
    }
}

/// Holdings quotation output (`FHKST03030100`)
#[derive(Debug, Default, Deserialize)]
pub struct HoldingsOutput {
    /// Korean ETF name
    #[serde(default, deserialize_with = "lenient_string")]
    pub hts_kor_isnm: Option<String>,
    /// Net asset value
    #[serde(default, deserialize_with = "lenient_string")]
    pub nav: Option<String>,
    /// Constituent count
    #[serde(default, deserialize_with = "lenient_string")]
    pub tot_cnt: Option<String>,
    /// Composition date
    #[serde(default, deserialize_with = "lenient_string")]
    pub updt_dt: Option<String>,
    /// Constituent rows
    #[serde(default)]
    pub output1: Option<Vec<HoldingRow>>,
}

/// Constituent row, accepting both the vendor's and the snapshot's field names
#[derive(Debug, Default, Deserialize)]
pub struct HoldingRow {
    /// Constituent code
    #[serde(default, alias = "stockCode", deserialize_with = "lenient_string")]
    pub stck_shrn_iscd: Option<String>,
    /// Constituent name
    #[serde(default, alias = "stockName", deserialize_with = "lenient_string")]
    pub hts_kor_isnm: Option<String>,
    /// Weight in percent
    #[serde(default, alias = "weight", deserialize_with = "lenient_string")]
    pub etf_cnfg_issu_rlim: Option<String>,
    /// Shares held
    #[serde(default, alias = "shares", deserialize_with = "lenient_string")]
    pub etf_cnfg_issu_cnt: Option<String>,
    /// Value held
    #[serde(default, alias = "value", deserialize_with = "lenient_string")]
    pub etf_vltn_amt: Option<String>,
}

impl From<HoldingRow> for Holding {
    fn from(row: HoldingRow) -> Self {
        Holding {
            stock_code: row.stck_shrn_iscd.unwrap_or_default(),
            stock_name: row.hts_kor_isnm.unwrap_or_default(),
            weight: decimal_or_zero(row.etf_cnfg_issu_rlim.as_deref()),
            shares: int_or_zero(row.etf_cnfg_issu_cnt.as_deref()),
            value: int_or_zero(row.etf_vltn_amt.as_deref()),
        }
    }
}

impl HoldingsOutput {
    /// Map into the public snapshot, dating it `today` when the vendor omits a date
    pub fn into_snapshot(self, ticker: &str, today: NaiveDate) -> EtfHoldingsSnapshot {
        EtfHoldingsSnapshot {
            ticker: ticker.to_string(),
            etf_name: non_empty(&self.hts_kor_isnm).unwrap_or("Unknown").to_string(),
            nav: decimal_or_zero(self.nav.as_deref()),
            total_holdings: int_or_zero(self.tot_cnt.as_deref()),
            update_date: non_empty(&self.updt_dt)
                .map(str::to_string)
                .unwrap_or_else(|| today.format(UPDATE_DATE_FORMAT).to_string()),
            holdings: self
                .output1
                .unwrap_or_default()
                .into_iter()
                .map(Holding::from)
                .collect(),
        }
    }
}

/// Daily chart response (`FHKST03010100`); candles sit at the top level in `output1`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryOutput {
    /// Result code, `"0"` on success
    #[serde(default, deserialize_with = "lenient_string")]
    pub rt_cd: Option<String>,
    /// Vendor message
    #[serde(default)]
    pub msg1: Option<String>,
    /// Daily candles
    #[serde(default)]
    pub output1: Option<Vec<HistoryRow>>,
}

/// One daily candle
#[derive(Debug, Default, Deserialize)]
pub struct HistoryRow {
    /// Business date, `YYYYMMDD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_bsop_date: Option<String>,
    /// Open
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_oprc: Option<String>,
    /// High
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_hgpr: Option<String>,
    /// Low
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_lwpr: Option<String>,
    /// Close
    #[serde(default, deserialize_with = "lenient_string")]
    pub stck_clpr: Option<String>,
    /// Accumulated volume
    #[serde(default, deserialize_with = "lenient_string")]
    pub acml_vol: Option<String>,
}

impl From<HistoryRow> for PricePoint {
    fn from(row: HistoryRow) -> Self {
        PricePoint {
            date: row.stck_bsop_date.unwrap_or_default(),
            open: decimal_or_zero(row.stck_oprc.as_deref()),
            high: decimal_or_zero(row.stck_hgpr.as_deref()),
            low: decimal_or_zero(row.stck_lwpr.as_deref()),
            close: decimal_or_zero(row.stck_clpr.as_deref()),
            volume: int_or_zero(row.acml_vol.as_deref()),
        }
    }
}

impl HistoryOutput {
    /// Whether the vendor reported success
    pub fn is_success(&self) -> bool {
        self.rt_cd.as_deref() == Some("0")
    }

    /// Map into the public history, keeping the vendor's row order
    pub fn into_history(self, ticker: &str, period: &str) -> EtfPriceHistory {
        EtfPriceHistory {
            ticker: ticker.to_string(),
            period: period.to_string(),
            price_history: self
                .output1
                .unwrap_or_default()
                .into_iter()
                .map(PricePoint::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_price_output_maps_vendor_fields() {
        let raw = r#"{
            "rt_cd": "0",
            "msg1": "정상처리 되었습니다.",
            "output": {
                "hts_kor_isnm": "KODEX 200",
                "stck_prpr": "35120",
                "prdy_vrss": "-85",
                "prdy_ctrt": "-0.24",
                "acml_vol": "4123456",
                "acml_tr_pbmn": "144872000000",
                "stck_hgpr": "35300",
                "stck_lwpr": "35005",
                "stck_oprc": "35200",
                "stck_sdpr": "35205"
            }
        }"#;
        let envelope: QuotationEnvelope<PriceOutput> = serde_json::from_str(raw).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        let snapshot = envelope.output.unwrap().into_snapshot("069500", now);

        assert_eq!(snapshot.name, "KODEX 200");
        assert_eq!(snapshot.current_price, 35120);
        assert_eq!(snapshot.change_price, -85);
        assert_eq!(snapshot.change_rate, dec!(-0.24));
        assert_eq!(snapshot.trading_value, 144_872_000_000);
        assert_eq!(snapshot.previous_close, 35205);
        assert_eq!(snapshot.timestamp, now);
    }

    #[test]
    fn test_missing_price_fields_default() {
        let envelope: QuotationEnvelope<PriceOutput> =
            serde_json::from_str(r#"{"output": {"stck_prpr": 1200, "prdy_ctrt": null}}"#).unwrap();
        let snapshot = envelope.output.unwrap().into_snapshot("000001", Utc::now());

        assert_eq!(snapshot.name, "Unknown");
        assert_eq!(snapshot.current_price, 1200);
        assert_eq!(snapshot.change_rate, Decimal::ZERO);
        assert_eq!(snapshot.volume, 0);
        assert_eq!(snapshot.high, 0);
    }

    #[test]
    fn test_holdings_output_defaults_date_and_rows() {
        let envelope: QuotationEnvelope<HoldingsOutput> =
            serde_json::from_str(r#"{"output": {"hts_kor_isnm": "TIGER 200", "nav": "35110.52", "tot_cnt": "200"}}"#)
                .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let snapshot = envelope.output.unwrap().into_snapshot("102110", today);

        assert_eq!(snapshot.etf_name, "TIGER 200");
        assert_eq!(snapshot.nav, dec!(35110.52));
        assert_eq!(snapshot.total_holdings, 200);
        assert_eq!(snapshot.update_date, "2025-10-02");
        assert!(snapshot.holdings.is_empty());
    }

    #[test]
    fn test_holding_rows_accept_both_spellings() {
        let raw = r#"{"output": {"output1": [
            {"stck_shrn_iscd": "005930", "hts_kor_isnm": "삼성전자", "etf_cnfg_issu_rlim": "25.5", "etf_cnfg_issu_cnt": "12345", "etf_vltn_amt": "892345000"},
            {"stockCode": "000660", "stockName": "SK하이닉스", "weight": 20.1, "shares": 54321, "value": 789012000}
        ]}}"#;
        let envelope: QuotationEnvelope<HoldingsOutput> = serde_json::from_str(raw).unwrap();
        let snapshot = envelope.output.unwrap().into_snapshot("396500", NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());

        assert_eq!(snapshot.holdings.len(), 2);
        assert_eq!(snapshot.holdings[0].stock_code, "005930");
        assert_eq!(snapshot.holdings[0].weight, dec!(25.5));
        assert_eq!(snapshot.holdings[1].stock_name, "SK하이닉스");
        assert_eq!(snapshot.holdings[1].shares, 54321);
        assert_eq!(snapshot.holdings[1].value, 789_012_000);
    }

    #[test]
    fn test_history_rows_map_to_candles() {
        let raw = r#"{
            "rt_cd": "0",
            "msg1": "정상처리 되었습니다.",
            "output1": [
                {"stck_bsop_date": "20251001", "stck_oprc": "35200", "stck_hgpr": "35300", "stck_lwpr": "35005", "stck_clpr": "35120", "acml_vol": "4123456"},
                {"stck_bsop_date": "20250930", "stck_clpr": 35205}
            ]
        }"#;
        let output: HistoryOutput = serde_json::from_str(raw).unwrap();
        assert!(output.is_success());

        let history = output.into_history("069500", "1m");
        assert_eq!(history.period, "1m");
        assert_eq!(history.price_history.len(), 2);
        assert_eq!(history.price_history[0].date, "20251001");
        assert_eq!(history.price_history[0].low, dec!(35005));
        assert_eq!(history.price_history[0].volume, 4_123_456);
        assert_eq!(history.price_history[1].close, dec!(35205));
        assert_eq!(history.price_history[1].open, Decimal::ZERO);
    }

    #[test]
    fn test_history_error_code_is_not_success() {
        let output: HistoryOutput =
            serde_json::from_str(r#"{"rt_cd": "1", "msg1": "조회할 자료가 없습니다."}"#).unwrap();
        assert!(!output.is_success());
        assert!(output.into_history("069500", "3m").price_history.is_empty());
    }
}
