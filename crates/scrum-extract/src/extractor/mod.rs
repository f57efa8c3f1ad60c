//! extractor module
//!
//! [`ScrumExtractor`] is the seam between the HTTP layer and the language
//! model. Production code uses [`LlmScrumExtractor`]; tests inject stubs.

use async_trait::async_trait;

use crate::errors::ExtractResult;
use crate::models::ScrumUpdate;

pub mod llm_extractor;
pub mod prompt;

pub use llm_extractor::LlmScrumExtractor;

/// Converts free text plus a reference date into a structured scrum update.
#[async_trait]
pub trait ScrumExtractor: Send + Sync {
  /// Extracts a scrum update from `text`.
  ///
  /// `reference_date` is an ISO `YYYY-MM-DD` date used to resolve relative
  /// expressions such as "yesterday" or "by Friday".
  ///
  /// # Errors
  /// Any failure of the underlying model call, carrying a human-readable message
  async fn extract(&self, text: &str, reference_date: &str) -> ExtractResult<ScrumUpdate>;
}
