pub mod cors;
pub mod tasks;
pub mod webhook;

use crate::config::Config;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(tasks::get_tasks).head(not_found).fallback(not_found),
        )
        .route(
            "/api/webhook",
            post(webhook::receive_webhook).fallback(not_found),
        )
        .fallback(not_found)
        .layer(axum::middleware::from_fn(cors::preflight))
        .layer(cors::allow_origin())
        .layer(cors::allow_methods())
        .layer(cors::allow_headers())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
