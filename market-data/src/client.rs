//! KIS vendor HTTP client
//!
//! Wraps the brokerage's OAuth token exchange and the domestic quotation
//! and daily chart endpoints. The client knows nothing about mock data; that policy lives in
//! [`EtfService`](crate::EtfService).

use common::error::{Error, IntoError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::config::VendorConfig;
use crate::models::{HistoryOutput, HoldingsOutput, PriceOutput, QuotationEnvelope, TokenRequest, TokenResponse};
use crate::token::TokenCache;

/// Token returned when credentials are not provisioned
pub const MOCK_ACCESS_TOKEN: &str = "mock_access_token";

const TOKEN_PATH: &str = "/oauth2/tokenP";
const QUOTATION_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-price";
const DAILY_CHART_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-daily-itemchartprice";

/// Date format of the daily chart range parameters
pub(crate) const CHART_DATE_FORMAT: &str = "%Y%m%d";

/// Transaction id of the price quotation
pub const PRICE_TR_ID: &str = "FHKST01010100";
/// Transaction id of the holdings quotation
pub const HOLDINGS_TR_ID: &str = "FHKST03030100";
/// Transaction id of the daily chart
pub const HISTORY_TR_ID: &str = "FHKST03010100";

/// Failure of a single quotation call
#[derive(Debug, thiserror::Error)]
pub(crate) enum QuotationError {
    #[error("{0}")]
    Token(Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("vendor returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("vendor response has no output ({0})")]
    MissingOutput(String),

    #[error("vendor rejected the request ({0})")]
    Rejected(String),
}

/// Client for the KIS open API
pub struct KisClient {
    http: Client,
    config: VendorConfig,
    tokens: TokenCache,
}

impl KisClient {
    /// Create a new client. `tokens` is owned by the client from here on.
    pub fn new(config: VendorConfig, tokens: TokenCache) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| e.into_error("Failed to build HTTP client"))?;

        Ok(Self { http, config, tokens })
    }

    /// Client configuration
    pub fn config(&self) -> &VendorConfig {
        &self.config
    }

    /// Token cache
    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Whether real credentials are configured
    pub fn is_provisioned(&self) -> bool {
        self.config.credentials.is_provisioned()
    }

    /// Valid access token, exchanging credentials only when the cached one is absent or expired
    pub async fn access_token(&self) -> Result<String> {
        if !self.is_provisioned() {
            debug!("Credentials not provisioned, returning mock token");
            return Ok(MOCK_ACCESS_TOKEN.to_string());
        }

        self.tokens.get_or_refresh(|| self.issue_token()).await
    }

    async fn issue_token(&self) -> Result<String> {
        let creds = &self.config.credentials;
        let url = format!("{}{}", creds.base_url, TOKEN_PATH);

        let request = TokenRequest {
            grant_type: "client_credentials",
            appkey: &creds.app_key,
            appsecret: &creds.app_secret,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Token request failed: {}", e);
                Error::TokenAcquisition(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token endpoint returned {}: {}", status, body);
            return Err(Error::TokenAcquisition(format!("vendor returned {}: {}", status, body)));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::TokenAcquisition(format!("invalid token response: {}", e)))?;

        match body.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                info!("Vendor access token issued");
                Ok(token)
            }
            None => Err(Error::TokenAcquisition(
                body.error_description
                    .unwrap_or_else(|| "response has no access_token".to_string()),
            )),
        }
    }

    /// Price quotation output for `ticker`
    pub(crate) async fn price_output(&self, ticker: &str) -> std::result::Result<PriceOutput, QuotationError> {
        self.quotation(PRICE_TR_ID, ticker).await
    }

    /// Holdings quotation output for `ticker`
    pub(crate) async fn holdings_output(&self, ticker: &str) -> std::result::Result<HoldingsOutput, QuotationError> {
        self.quotation(HOLDINGS_TR_ID, ticker).await
    }

    /// Daily candles for `ticker` between `start` and `end` (`YYYYMMDD`, inclusive)
    pub(crate) async fn history_output(
        &self,
        ticker: &str,
        start: &str,
        end: &str,
    ) -> std::result::Result<HistoryOutput, QuotationError> {
        let query = [
            ("FID_COND_MRKT_DIV_CODE", "J"),
            ("FID_INPUT_ISCD", ticker),
            ("FID_INPUT_DATE_1", start),
            ("FID_INPUT_DATE_2", end),
            ("FID_PERIOD_DIV_CODE", "D"),
        ];
        let output: HistoryOutput = self.vendor_get(DAILY_CHART_PATH, HISTORY_TR_ID, &query).await?;

        if !output.is_success() {
            return Err(QuotationError::Rejected(
                output
                    .msg1
                    .or(output.rt_cd.map(|code| format!("rt_cd {}", code)))
                    .unwrap_or_else(|| "no result code".to_string()),
            ));
        }
        Ok(output)
    }

    async fn quotation<T: DeserializeOwned>(
        &self,
        tr_id: &str,
        ticker: &str,
    ) -> std::result::Result<T, QuotationError> {
        let query = [("FID_COND_MRKT_DIV_CODE", "J"), ("FID_INPUT_ISCD", ticker)];
        let envelope: QuotationEnvelope<T> = self.vendor_get(QUOTATION_PATH, tr_id, &query).await?;

        envelope.output.ok_or_else(|| {
            QuotationError::MissingOutput(
                envelope
                    .msg1
                    .or(envelope.rt_cd.map(|code| format!("rt_cd {}", code)))
                    .unwrap_or_else(|| "no message".to_string()),
            )
        })
    }

    /// Authenticated GET against a quotation endpoint, decoding the whole body
    async fn vendor_get<T: DeserializeOwned>(
        &self,
        path: &str,
        tr_id: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, QuotationError> {
        if !self.is_provisioned() {
            return Err(QuotationError::Token(Error::ConfigurationUnprovisioned));
        }

        let token = self.access_token().await.map_err(QuotationError::Token)?;
        let creds = &self.config.credentials;
        let url = format!("{}{}", creds.base_url, path);

        debug!("Vendor request {} {:?}", tr_id, query);

        let response = self
            .http
            .get(&url)
            .header("content-type", "application/json; charset=utf-8")
            .header("authorization", format!("Bearer {}", token))
            .header("appkey", &creds.app_key)
            .header("appsecret", &creds.app_secret)
            .header("tr_id", tr_id)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuotationError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
