//! ETF search over the built-in catalogue

use axum::{extract::Query, Json};
use common::model::market::{EtfListing, Market};
use market_data::catalogue;
use serde::Deserialize;
use utoipa::IntoParams;

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive fragment of a ticker or name
    pub keyword: Option<String>,
    /// `domestic` (default) or `overseas`
    pub market: Option<String>,
}

/// Search ETFs by ticker or name
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching listings, possibly empty", body = [EtfListing])
    ),
    tag = "etf"
)]
pub async fn search_etfs(Query(query): Query<SearchQuery>) -> Json<Vec<EtfListing>> {
    let market = match query.market.as_deref() {
        None | Some("") => Market::Domestic,
        Some(raw) => match raw.parse::<Market>() {
            Ok(market) => market,
            Err(e) => {
                tracing::debug!("{}", e);
                return Json(Vec::new());
            }
        },
    };

    Json(catalogue::search(query.keyword.as_deref().unwrap_or_default(), market))
}
