use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn live() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(live))
}
