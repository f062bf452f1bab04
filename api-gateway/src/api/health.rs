//! Liveness probe

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported by the health probe
pub const SERVICE_NAME: &str = "ETF Holic Backend API";

/// Health probe body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `OK` while the process serves requests
    pub status: String,
    /// Time the probe was answered
    pub timestamp: DateTime<Utc>,
    /// Service name
    pub service: String,
}

/// Check that the gateway is up
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Gateway is up", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
    })
}
