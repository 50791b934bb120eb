mod clickup_client;
mod config;
mod models;
mod normalizer;
mod numeric;
mod routes;
mod summary;

use anyhow::Context;
use config::Config;
use routes::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.clickup_api_token.is_none() {
        warn!("CLICKUP_API_TOKEN is not set; /api/tasks will answer with an error");
    }
    if config.clickup_list_id.is_none() {
        warn!("CLICKUP_LIST_ID is not set; /api/tasks will answer with an error");
    }

    let port = config.port;
    let http = reqwest::Client::builder()
        .build()
        .context("Could not build HTTP client")?;
    let app = routes::router(AppState::new(config, http));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Could not bind to port {}", port))?;
    info!("Backend server listening on port {}", port);

    axum::serve(listener, app)
        .await
        .context("Could not start server")?;
    Ok(())
}
