//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::ScrumUpdateService;
use crate::views::Views;

/// Application State
///
/// State shared across the entire server. Everything behind the `Arc`s is
/// immutable after startup, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Scrum update processing service
  ///
  /// - Production: wraps `LlmScrumExtractor` and `SystemClock`
  /// - Test: wraps a stub extractor and `FixedClock`
  pub service: Arc<ScrumUpdateService>,
  /// Template renderer
  pub views: Arc<Views>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<ScrumUpdateService>, views: Arc<Views>) -> Self {
    Self {
      config,
      service,
      views,
    }
  }
}
