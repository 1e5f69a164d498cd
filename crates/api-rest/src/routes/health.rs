//! Health check and service descriptor endpoints.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Seconds since the service started
    pub uptime_seconds: u64,
}

/// Service descriptor returned by `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,

    /// Service version
    pub version: String,

    /// Available endpoints as `METHOD path`
    pub endpoints: Vec<String>,

    /// Supported test identifiers
    pub test_types: Vec<String>,
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
}

/// Basic health check
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Describe the service and its endpoints
async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: state.config.telemetry.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET /".to_string(),
            "GET /health".to_string(),
            "POST /api/analyze".to_string(),
        ],
        test_types: llm_significance_domain::TestType::ALL
            .iter()
            .map(|t| t.as_str().to_string())
            .collect(),
    })
}
