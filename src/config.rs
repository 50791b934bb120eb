use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_CLICKUP_API_URL: &str = "https://api.clickup.com/api/v2";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Process configuration, read once at startup and handed to the router.
///
/// The ClickUp token and list id stay optional here: their absence is
/// reported per request by the tasks endpoint, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub clickup_api_token: Option<String>,
    pub clickup_list_id: Option<String>,
    pub clickup_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let clickup_api_url = non_empty("CLICKUP_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_CLICKUP_API_URL.to_string());

        Ok(Self {
            port,
            clickup_api_token: non_empty("CLICKUP_API_TOKEN"),
            clickup_list_id: non_empty("CLICKUP_LIST_ID"),
            clickup_api_url,
        })
    }
}
