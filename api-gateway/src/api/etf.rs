//! ETF API handlers
//!
//! Every `:ticker` route extracts a [`TickerPath`], so a malformed ticker is
//! answered with a 400 before the service is touched and never reaches the
//! vendor.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    Json,
};
use common::model::etf::{EtfHoldingsSnapshot, EtfInfo, EtfPriceSnapshot};
use common::model::fees::EtfFeesDividend;
use common::model::history::{EtfPriceHistory, DEFAULT_HISTORY_PERIOD};
use common::model::market::EtfListing;
use common::Ticker;
use market_data::catalogue;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

const PRICE_FAILURE: &str = "Failed to fetch ETF price";
const HOLDINGS_FAILURE: &str = "Failed to fetch ETF holdings";
const INFO_FAILURE: &str = "Failed to fetch ETF info";
const HISTORY_FAILURE: &str = "Failed to fetch ETF price history";

/// Validated ticker from the `:ticker` path segment.
///
/// Segments that do not decode at all (e.g. percent-encoded invalid UTF-8)
/// are rejected the same way as well-formed strings that are not six digits.
pub struct TickerPath(pub Ticker);

#[async_trait]
impl<S> FromRequestParts<S> for TickerPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidTicker(rejection.body_text()))?;

        Ticker::parse(&raw).map(TickerPath).map_err(|_| ApiError::InvalidTicker(raw))
    }
}

/// Price history query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// `1m`, `3m` (default), `6m` or `1y`
    pub period: Option<String>,
}

/// Get the current quote of an ETF
#[utoipa::path(
    get,
    path = "/api/etf/{ticker}/price",
    params(
        ("ticker" = String, Path, description = "Six digit ticker", example = "069500")
    ),
    responses(
        (status = 200, description = "Quote retrieved successfully", body = EtfPriceSnapshot),
        (status = 400, description = "Invalid ticker format", body = ErrorResponse),
        (status = 500, description = "Vendor lookup failed", body = ErrorResponse)
    ),
    tag = "etf"
)]
pub async fn get_etf_price(
    State(state): State<Arc<AppState>>,
    TickerPath(ticker): TickerPath,
) -> Result<Json<EtfPriceSnapshot>, ApiError> {
    let price = state
        .etf_service
        .etf_price(ticker.as_str())
        .await
        .map_err(ApiError::upstream(PRICE_FAILURE))?;

    Ok(Json(price))
}

/// Get the composition of an ETF
#[utoipa::path(
    get,
    path = "/api/etf/{ticker}/holdings",
    params(
        ("ticker" = String, Path, description = "Six digit ticker", example = "396500")
    ),
    responses(
        (status = 200, description = "Holdings retrieved successfully", body = EtfHoldingsSnapshot),
        (status = 400, description = "Invalid ticker format", body = ErrorResponse),
        (status = 500, description = "Vendor lookup failed", body = ErrorResponse)
    ),
    tag = "etf"
)]
pub async fn get_etf_holdings(
    State(state): State<Arc<AppState>>,
    TickerPath(ticker): TickerPath,
) -> Result<Json<EtfHoldingsSnapshot>, ApiError> {
    let holdings = state
        .etf_service
        .etf_holdings(ticker.as_str())
        .await
        .map_err(ApiError::upstream(HOLDINGS_FAILURE))?;

    Ok(Json(holdings))
}

/// Get the quote and composition of an ETF in one document
#[utoipa::path(
    get,
    path = "/api/etf/{ticker}/full",
    params(
        ("ticker" = String, Path, description = "Six digit ticker", example = "069500")
    ),
    responses(
        (status = 200, description = "ETF info retrieved successfully", body = EtfInfo),
        (status = 400, description = "Invalid ticker format", body = ErrorResponse),
        (status = 500, description = "Vendor lookup failed", body = ErrorResponse)
    ),
    tag = "etf"
)]
pub async fn get_etf_info(
    State(state): State<Arc<AppState>>,
    TickerPath(ticker): TickerPath,
) -> Result<Json<EtfInfo>, ApiError> {
    let info = state
        .etf_service
        .etf_info(ticker.as_str())
        .await
        .map_err(ApiError::upstream(INFO_FAILURE))?;

    Ok(Json(info))
}

/// Get the daily candles of an ETF
#[utoipa::path(
    get,
    path = "/api/etf/{ticker}/price-history",
    params(
        ("ticker" = String, Path, description = "Six digit ticker", example = "069500"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Price history retrieved successfully", body = EtfPriceHistory),
        (status = 400, description = "Invalid ticker format", body = ErrorResponse),
        (status = 500, description = "Vendor lookup failed", body = ErrorResponse)
    ),
    tag = "etf"
)]
pub async fn get_etf_price_history(
    State(state): State<Arc<AppState>>,
    TickerPath(ticker): TickerPath,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<EtfPriceHistory>, ApiError> {
    let period = query
        .period
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_HISTORY_PERIOD);

    let history = state
        .etf_service
        .etf_price_history(ticker.as_str(), period)
        .await
        .map_err(ApiError::upstream(HISTORY_FAILURE))?;

    Ok(Json(history))
}

/// Get the fees, dividends and trailing returns of an ETF
#[utoipa::path(
    get,
    path = "/api/etf/{ticker}/fees-dividend",
    params(
        ("ticker" = String, Path, description = "Six digit ticker", example = "069500")
    ),
    responses(
        (status = 200, description = "Fee and dividend figures", body = EtfFeesDividend),
        (status = 400, description = "Invalid ticker format", body = ErrorResponse)
    ),
    tag = "etf"
)]
pub async fn get_etf_fees_dividend(
    State(state): State<Arc<AppState>>,
    TickerPath(ticker): TickerPath,
) -> Json<EtfFeesDividend> {
    Json(state.etf_service.etf_fees_dividend(ticker.as_str()))
}

/// List the ETFs highlighted on the dashboard
#[utoipa::path(
    get,
    path = "/api/etf/featured",
    responses(
        (status = 200, description = "Featured listings", body = [EtfListing])
    ),
    tag = "etf"
)]
pub async fn get_featured_etfs() -> Json<Vec<EtfListing>> {
    Json(catalogue::featured())
}
