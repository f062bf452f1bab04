//! Static endpoint catalogue

use axum::Json;
use serde_json::{json, Value};

use crate::api::health::SERVICE_NAME;

/// Endpoint catalogue with example paths and sample tickers
pub fn catalogue() -> Value {
    json!({
        "title": SERVICE_NAME,
        "version": "1.0.0",
        "description": "한국투자증권 OpenAPI를 사용한 ETF 데이터 API",
        "endpoints": {
            "GET /health": "서버 상태 확인",
            "GET /api/etf/:ticker/price": "ETF 현재가 및 거래량 조회",
            "GET /api/etf/:ticker/holdings": "ETF 종목 구성 조회",
            "GET /api/etf/:ticker/full": "통합 ETF 정보 조회",
            "GET /api/etf/:ticker/price-history": "ETF 주가 히스토리 조회 (period: 1m, 3m, 6m, 1y)",
            "GET /api/etf/:ticker/fees-dividend": "ETF 수수료 및 배당금 정보 조회",
            "GET /api/etf/featured": "주요 ETF 목록",
            "GET /api/search": "ETF 검색 (keyword, market)",
            "GET /api/docs": "API 문서"
        },
        "examples": {
            "ETF 가격 조회": "/api/etf/069500/price",
            "ETF 종목 구성": "/api/etf/069500/holdings",
            "통합 정보": "/api/etf/069500/full",
            "주가 히스토리": "/api/etf/069500/price-history?period=3m",
            "수수료 및 배당금": "/api/etf/069500/fees-dividend",
            "ETF 검색": "/api/search?keyword=KODEX&market=domestic"
        },
        "sampleTickers": {
            "KODEX 200": "069500",
            "TIGER 미국S&P500": "360750",
            "KODEX 반도체": "091230"
        }
    })
}

/// Describe the available endpoints
#[utoipa::path(
    get,
    path = "/api/docs",
    responses(
        (status = 200, description = "Endpoint catalogue", content_type = "application/json")
    ),
    tag = "system"
)]
pub async fn api_docs() -> Json<Value> {
    Json(catalogue())
}
