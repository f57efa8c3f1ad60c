//! scrum-api server entry point

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrum_api::api::{AppState, run_server};
use scrum_api::config::Config;
use scrum_api::service::{ScrumUpdateService, SystemClock};
use scrum_api::views::Views;
use scrum_extract::LlmScrumExtractor;

#[tokio::main]
async fn main() -> Result<()> {
  // .env is optional
  let _ = dotenvy::dotenv();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,scrum_api=debug,scrum_extract=debug,tower_http=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env().context("Failed to load configuration")?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    templates_dir = %config.templates_dir.display(),
    extract_timeout_secs = config.extract_timeout.as_secs(),
    "Configuration loaded"
  );

  let views = Views::load(&config.templates_dir).context("Failed to load templates")?;

  let extractor = LlmScrumExtractor::from_env().context("Failed to configure extractor")?;
  tracing::info!(model = %extractor.config().model, "Extractor initialized");

  let service = ScrumUpdateService::new(
    Arc::new(extractor),
    Arc::new(SystemClock),
    config.extract_timeout,
  );

  let state = AppState::new(config, Arc::new(service), Arc::new(views));

  run_server(state).await.context("Server error")?;

  Ok(())
}
