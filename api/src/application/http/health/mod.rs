use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
