// src/api/handlers/system_handler.rs
use crate::api::AppState;
use crate::types::ApiResponse;
use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    pub is_production: bool,
    pub is_development: bool,
}

pub async fn health_check_handler() -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn about_handler(State(app_state): State<AppState>) -> ApiResponse<AboutResponse> {
    let config = &app_state.config;

    ApiResponse::success(AboutResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Sales management: departments, sellers and sales records".to_string(),
        environment: config.environment.clone(),
        is_production: config.is_production(),
        is_development: config.is_development(),
    })
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .route("/about", get(about_handler))
        .with_state(app_state)
}
