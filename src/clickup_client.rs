use crate::config::Config;
use crate::models::*;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClickUpError {
    #[error("Missing CLICKUP_API_TOKEN environment variable.")]
    MissingToken,
    #[error("Missing CLICKUP_LIST_ID environment variable.")]
    MissingListId,
    #[error("ClickUp API request failed with {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode ClickUp response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClickUpError {
    /// Configuration and upstream status errors are reported as-is; the
    /// rest are surprises from the transport or the payload.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ClickUpError::Transport(_) | ClickUpError::Decode(_))
    }
}

pub struct ClickUpClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    list_id: String,
}

impl ClickUpClient {
    /// Binds a shared HTTP client to the configured credentials, failing
    /// fast when either the token or the list id is missing.
    pub fn new(client: reqwest::Client, config: &Config) -> Result<Self, ClickUpError> {
        let token = config
            .clickup_api_token
            .clone()
            .ok_or(ClickUpError::MissingToken)?;
        let list_id = config
            .clickup_list_id
            .clone()
            .ok_or(ClickUpError::MissingListId)?;

        Ok(Self {
            client,
            base_url: config.clickup_api_url.clone(),
            token,
            list_id,
        })
    }

    async fn _get(&self, path: &str) -> Result<Value, ClickUpError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, self.token.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClickUpError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches the tasks of the configured list. A response without a
    /// `tasks` array counts as an empty list; a `null` element is a
    /// decode failure.
    pub async fn get_list_tasks(&self) -> Result<Vec<RawTask>, ClickUpError> {
        let mut response = self._get(&format!("/list/{}/task", self.list_id)).await?;

        match response.get_mut("tasks").map(Value::take) {
            Some(Value::Array(tasks)) => tasks
                .into_iter()
                .map(|task| match task {
                    // Any other non-object element reads as a task with no fields.
                    Value::Object(_) | Value::Null => {
                        serde_json::from_value(task).map_err(ClickUpError::from)
                    }
                    _ => Ok(RawTask::default()),
                })
                .collect(),
            _ => Ok(Vec::new()),
        }
    }
}
