//! HTTP gateway for ETF price, holdings and price history data

pub mod api;
pub mod error;
pub mod config;

use std::sync::Arc;

use axum::{routing::get, Router};
use market_data::EtfService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    docs::api_docs,
    etf::{
        get_etf_fees_dividend, get_etf_holdings, get_etf_info, get_etf_price, get_etf_price_history,
        get_featured_etfs,
    },
    health::health,
    not_found,
    search::search_etfs,
};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health,
        api::docs::api_docs,
        api::etf::get_etf_price,
        api::etf::get_etf_holdings,
        api::etf::get_etf_info,
        api::etf::get_etf_price_history,
        api::etf::get_etf_fees_dividend,
        api::etf::get_featured_etfs,
        api::search::search_etfs,
    ),
    components(
        schemas(
            common::model::etf::EtfPriceSnapshot,
            common::model::etf::EtfHoldingsSnapshot,
            common::model::etf::EtfInfo,
            common::model::etf::Holding,
            common::model::history::EtfPriceHistory,
            common::model::history::PricePoint,
            common::model::fees::EtfFeesDividend,
            common::model::fees::FeeSchedule,
            common::model::fees::DividendInfo,
            common::model::fees::PerformanceSummary,
            common::model::market::EtfListing,
            common::model::market::Market,
            api::health::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "etf", description = "ETF price, holdings and search endpoints"),
        (name = "system", description = "Health and documentation endpoints")
    ),
    info(
        title = "ETF Holic Backend API",
        version = "1.0.0",
        description = "ETF price and holdings API backed by the Korea Investment & Securities open API"
    )
)]
pub struct ApiDoc;

/// App state shared across handlers
pub struct AppState {
    /// ETF lookups
    pub etf_service: Arc<EtfService>,
}

impl AppState {
    /// Wrap a service for sharing across handlers
    pub fn new(etf_service: EtfService) -> Arc<Self> {
        Arc::new(Self {
            etf_service: Arc::new(etf_service),
        })
    }
}

/// Build the full router: API routes, Swagger UI, 404 fallback, CORS and request tracing
pub fn app_router(state: Arc<AppState>, log_level: Level) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Set up Swagger UI
    let swagger_ui = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/health", get(health))
        .route("/api/etf/:ticker/price", get(get_etf_price))
        .route("/api/etf/:ticker/holdings", get(get_etf_holdings))
        .route("/api/etf/:ticker/full", get(get_etf_info))
        .route("/api/etf/:ticker/price-history", get(get_etf_price_history))
        .route("/api/etf/:ticker/fees-dividend", get(get_etf_fees_dividend))
        .route("/api/etf/featured", get(get_featured_etfs))
        .route("/api/search", get(search_etfs))
        .route("/api/docs", get(api_docs))
        .merge(swagger_ui)
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        )
        .with_state(state)
}
