//! Router definition

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, index, not_found, process_scrum, scrum_update};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/process-scrum", post(process_scrum))
    .route("/scrum-update", post(scrum_update))
    .route("/health", get(health_check))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  let port = listener.local_addr().map(|local| local.port()).unwrap_or_default();
  tracing::info!("Starting server: http://{}", addr);
  tracing::info!("Open your browser to: http://localhost:{}", port);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
