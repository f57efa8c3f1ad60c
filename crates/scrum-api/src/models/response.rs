//! Response Model Definition

use serde::Serialize;

use crate::config::SERVICE_NAME;

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
  /// Always "healthy"
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
}

impl HealthResponse {
  /// The fixed healthy response
  #[must_use]
  pub fn healthy() -> Self {
    Self {
      status: "healthy",
      service: SERVICE_NAME,
    }
  }
}
