//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use scrum_extract::ExtractError;

/// Error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Input is invalid (empty `input_data`)
  InvalidInput,
  /// The extraction call failed or timed out
  Extraction,
  /// No route matched
  NotFound,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Stable machine-readable code, used as a log field
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Extraction => "extraction_failed",
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Extraction | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// The `Display` text is what clients see, both in the JSON `detail` field and
/// in the HTML error fragment.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Input is invalid
  #[error("{0}")]
  InvalidInput(String),

  /// Extraction failed; carries the collaborator's message verbatim
  #[error("{0}")]
  Extraction(String),

  /// No route matched
  #[error("Not Found")]
  NotFound,

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Gets the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Extraction(_) => ApiErrorKind::Extraction,
      Self::NotFound => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Gets the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Gets the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates an extraction error
  #[must_use]
  pub fn extraction(message: impl Into<String>) -> Self {
    Self::Extraction(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON error body: `{"detail": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
  detail: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      detail: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from ExtractError to ApiError
///
/// Every extractor failure collapses into one kind; only the message survives.
impl From<ExtractError> for ApiError {
  fn from(err: ExtractError) -> Self {
    ApiError::extraction(err.to_string())
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
