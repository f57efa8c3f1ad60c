//! LLM-backed scrum update extractor
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint and asks for a
//! JSON object response.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ScrumExtractor;
use super::prompt::{system_prompt, user_prompt};
use crate::config::ExtractorConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::models::ScrumUpdate;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: Vec<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  temperature: Option<f32>,
  response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
  role: &'static str,
  content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
  #[serde(rename = "type")]
  kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

/// Extractor backed by an OpenAI-compatible chat model.
#[derive(Clone)]
pub struct LlmScrumExtractor {
  http_client: Client,
  config: ExtractorConfig,
}

impl LlmScrumExtractor {
  /// Creates an extractor with a fresh HTTP client
  #[must_use]
  pub fn new(config: ExtractorConfig) -> Self {
    Self {
      http_client: Client::new(),
      config,
    }
  }

  /// Creates an extractor from environment variables
  ///
  /// # Errors
  /// Returns [`ExtractError::Config`] if `OPENAI_API_KEY` is not set
  pub fn from_env() -> ExtractResult<Self> {
    Ok(Self::new(ExtractorConfig::from_env()?))
  }

  /// Current configuration
  #[must_use]
  pub fn config(&self) -> &ExtractorConfig {
    &self.config
  }

  fn build_request<'a>(&'a self, text: &str, reference_date: &str) -> ChatRequest<'a> {
    ChatRequest {
      model: &self.config.model,
      messages: vec![
        Message {
          role: "system",
          content: system_prompt(reference_date),
        },
        Message {
          role: "user",
          content: user_prompt(text),
        },
      ],
      temperature: self.config.temperature,
      response_format: ResponseFormat {
        kind: "json_object",
      },
    }
  }
}

#[async_trait]
impl ScrumExtractor for LlmScrumExtractor {
  async fn extract(&self, text: &str, reference_date: &str) -> ExtractResult<ScrumUpdate> {
    let start = Instant::now();
    let request = self.build_request(text, reference_date);

    let response = self
      .http_client
      .post(self.config.completions_url())
      .bearer_auth(&self.config.api_key)
      .json(&request)
      .send()
      .await
      .map_err(|e| {
        warn!(error = %e, "LLM request failed");
        ExtractError::Network(e.to_string())
      })?;

    let status = response.status();
    if !status.is_success() {
      let error_text = response.text().await.unwrap_or_default();
      warn!(status = %status, error = %error_text, "LLM API error");
      return Err(ExtractError::Api {
        status: status.as_u16(),
        message: error_text,
      });
    }

    let raw: ChatResponseRaw = response
      .json()
      .await
      .map_err(|e| ExtractError::parse(format!("invalid completion response: {e}")))?;

    let content = raw
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .ok_or_else(|| ExtractError::parse("completion response contained no message content"))?;

    let update = parse_content(&content)?;

    debug!(
      model = %self.config.model,
      fields = update.len(),
      elapsed = ?start.elapsed(),
      "scrum update extracted"
    );

    Ok(update)
  }
}

/// Parses model output into a [`ScrumUpdate`].
///
/// Tolerates a surrounding Markdown code fence (```` ```json ... ``` ````),
/// which some models emit even in JSON mode.
///
/// # Errors
/// Returns [`ExtractError::Parse`] if the content is not a JSON object
pub fn parse_content(content: &str) -> ExtractResult<ScrumUpdate> {
  let body = strip_code_fence(content.trim());
  let value: serde_json::Value = serde_json::from_str(body)
    .map_err(|e| ExtractError::parse(format!("model output is not valid JSON: {e}")))?;
  ScrumUpdate::from_value(value)
}

fn strip_code_fence(content: &str) -> &str {
  let Some(rest) = content.strip_prefix("```") else {
    return content;
  };
  // drop the info string ("json") on the opening fence line
  let rest = rest.split_once('\n').map_or("", |(_, body)| body);
  rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
