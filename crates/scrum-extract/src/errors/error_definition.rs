//! Error definitions for the extraction client

use thiserror::Error;

/// Errors raised while extracting a scrum update.
///
/// Callers are expected to surface only the [`Display`](std::fmt::Display)
/// text; the variants exist for logging and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
  /// Missing or invalid configuration (API key, base URL, ...)
  #[error("configuration error: {0}")]
  Config(String),

  /// The LLM endpoint could not be reached
  #[error("network error: {0}")]
  Network(String),

  /// The LLM endpoint answered with a non-success status
  #[error("LLM API error (status {status}): {message}")]
  Api {
    /// HTTP status code returned by the endpoint
    status: u16,
    /// Response body or error description
    message: String,
  },

  /// The model output was not a usable JSON object
  #[error("failed to parse extraction result: {0}")]
  Parse(String),

  /// Free-form failure; displays the message as-is
  #[error("{0}")]
  Message(String),
}

impl ExtractError {
  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates a parse error
  #[must_use]
  pub fn parse(message: impl Into<String>) -> Self {
    Self::Parse(message.into())
  }

  /// Creates a free-form error whose display text is exactly `message`
  #[must_use]
  pub fn message(message: impl Into<String>) -> Self {
    Self::Message(message.into())
  }
}

/// Result type alias
pub type ExtractResult<T> = Result<T, ExtractError>;
