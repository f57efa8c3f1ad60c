//! HTTP handler definitions

use axum::{
  Form, Json,
  extract::State,
  response::Html,
};
use tracing::{debug, warn};

use scrum_extract::ScrumUpdate;

use crate::errors::ApiError;
use crate::models::{HealthResponse, ScrumUpdateRequest};

use super::state::AppState;

/// GET / endpoint
///
/// Serves the HTMX form page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
  Html(state.views.index().to_owned())
}

/// POST /process-scrum endpoint
///
/// Form submit from the HTMX page. Returns an HTML fragment for in-place swap.
///
/// # Form Fields
/// - `input_data`: free-text scrum update
///
/// # Response
/// - 200 OK: success fragment, or error fragment starting with
///   `Failed to process scrum update:`. Processing and rendering failures
///   never change the status code.
pub async fn process_scrum(
  State(state): State<AppState>,
  Form(request): Form<ScrumUpdateRequest>,
) -> Html<String> {
  debug!(input_len = request.input_data.len(), "Form scrum update received");

  let outcome = state.service.process(&request.input_data).await;
  if let Err(err) = &outcome {
    warn!(code = err.code(), error = %err, "Rendering error fragment");
  }

  Html(state.views.render_outcome(&outcome))
}

/// POST /scrum-update endpoint
///
/// JSON API.
///
/// # Request Body
/// ```json
/// { "input_data": "Today I fixed a bug" }
/// ```
///
/// # Response
/// - 200 OK: the extracted scrum update, as returned by the extractor
/// - 422 Unprocessable Entity: empty `input_data`
/// - 500 Internal Server Error: extraction failed, `{"detail": "<message>"}`
pub async fn scrum_update(
  State(state): State<AppState>,
  Json(request): Json<ScrumUpdateRequest>,
) -> Result<Json<ScrumUpdate>, ApiError> {
  debug!(input_len = request.input_data.len(), "JSON scrum update received");

  let update = state.service.process(&request.input_data).await?;

  Ok(Json(update))
}

/// Health check endpoint
///
/// Does not touch the extractor.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::healthy())
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
  ApiError::NotFound
}
