// crates/scrum-extract/src/config.rs

//! Configuration for the LLM-backed extractor.

use crate::errors::{ExtractError, ExtractResult};

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";

/// Environment variable overriding the model name
pub const ENV_MODEL: &str = "SCRUM_EXTRACT_MODEL";

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct ExtractorConfig {
  /// Bearer token sent with every request
  pub api_key: String,
  /// Base URL without the trailing `/chat/completions`
  pub base_url: String,
  /// Model name
  pub model: String,
  /// Sampling temperature; `None` leaves the server default
  pub temperature: Option<f32>,
}

impl std::fmt::Debug for ExtractorConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ExtractorConfig")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .finish()
  }
}

impl ExtractorConfig {
  /// Creates a configuration with the default endpoint and model
  #[must_use]
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      base_url: DEFAULT_BASE_URL.to_string(),
      model: DEFAULT_MODEL.to_string(),
      temperature: Some(0.0),
    }
  }

  /// Sets a custom base URL (proxies, Azure, local servers)
  #[must_use]
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// Sets the model name
  #[must_use]
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  /// URL of the chat-completions endpoint
  #[must_use]
  pub fn completions_url(&self) -> String {
    format!("{}/chat/completions", self.base_url)
  }

  /// Loads configuration from environment variables.
  ///
  /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL` and `SCRUM_EXTRACT_MODEL`
  /// fall back to the defaults.
  ///
  /// # Errors
  /// Returns [`ExtractError::Config`] if the API key is missing or blank
  pub fn from_env() -> ExtractResult<Self> {
    let api_key = std::env::var(ENV_API_KEY)
      .ok()
      .filter(|key| !key.trim().is_empty())
      .ok_or_else(|| ExtractError::config(format!("{ENV_API_KEY} not set")))?;

    let mut config = Self::new(api_key);

    if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
      config = config.with_base_url(base_url);
    }
    if let Ok(model) = std::env::var(ENV_MODEL) {
      config = config.with_model(model);
    }

    Ok(config)
  }
}
