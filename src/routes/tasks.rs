use crate::clickup_client::{ClickUpClient, ClickUpError};
use crate::config::Config;
use crate::models::TaskReport;
use crate::normalizer::normalize_tasks;
use crate::routes::AppState;
use crate::summary::compute_summary;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::error::Error;
use tracing::{debug, error, warn};

const UNEXPECTED_ERROR: &str = "Unexpected error fetching tasks from ClickUp.";

pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<TaskReport>, ClickUpError> {
    let report = fetch_report(&state.http, &state.config).await?;
    Ok(Json(report))
}

/// One upstream fetch, then normalize and summarize. Nothing is kept
/// between calls.
pub async fn fetch_report(
    http: &reqwest::Client,
    config: &Config,
) -> Result<TaskReport, ClickUpError> {
    let client = ClickUpClient::new(http.clone(), config)?;
    let tasks = normalize_tasks(client.get_list_tasks().await?);
    let summary = compute_summary(&tasks);

    debug!(
        "Summarized {} tasks across {} developers",
        summary.total_tasks,
        summary.developers.len()
    );

    Ok(TaskReport { tasks, summary })
}

impl IntoResponse for ClickUpError {
    fn into_response(self) -> Response {
        let body = if self.is_unexpected() {
            error!("Unexpected error fetching tasks: {}", self);
            let details = self
                .source()
                .map(ToString::to_string)
                .unwrap_or_else(|| self.to_string());
            json!({ "error": UNEXPECTED_ERROR, "details": details })
        } else {
            warn!("Could not fetch tasks: {}", self);
            json!({ "error": self.to_string() })
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
