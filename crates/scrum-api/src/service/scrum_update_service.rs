//! Scrum update processing service

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use scrum_extract::{ScrumExtractor, ScrumUpdate};

use super::clock::Clock;
use crate::errors::{ApiError, Result};

/// Date format handed to the extractor
const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates input, stamps it with today's date and calls the extractor.
///
/// Built once at startup; both processing endpoints share it and differ only
/// in how they render the returned `Result`.
pub struct ScrumUpdateService {
  extractor: Arc<dyn ScrumExtractor>,
  clock: Arc<dyn Clock>,
  extract_timeout: Duration,
}

impl ScrumUpdateService {
  /// Creates the service
  ///
  /// # Arguments
  /// * `extractor` - Extraction backend (`LlmScrumExtractor` in production)
  /// * `clock` - Source of the reference date
  /// * `extract_timeout` - Upper bound for one extraction call
  #[must_use]
  pub fn new(
    extractor: Arc<dyn ScrumExtractor>,
    clock: Arc<dyn Clock>,
    extract_timeout: Duration,
  ) -> Self {
    Self {
      extractor,
      clock,
      extract_timeout,
    }
  }

  /// Today's date as `YYYY-MM-DD`
  #[must_use]
  pub fn reference_date(&self) -> String {
    self.clock.today().format(REFERENCE_DATE_FORMAT).to_string()
  }

  /// Processes one scrum update
  ///
  /// # Errors
  /// - `InvalidInput` if the text is empty
  /// - `Extraction` if the extractor fails or exceeds the timeout
  pub async fn process(&self, input_data: &str) -> Result<ScrumUpdate> {
    validate_input(input_data)?;

    let date = self.reference_date();
    info!(date = %date, input_len = input_data.len(), "Processing scrum update");

    match tokio::time::timeout(self.extract_timeout, self.extractor.extract(input_data, &date)).await
    {
      Ok(Ok(update)) => {
        debug!(fields = update.len(), "Scrum update extracted");
        Ok(update)
      }
      Ok(Err(err)) => {
        error!(error = %err, "Error processing scrum update");
        Err(err.into())
      }
      Err(_) => {
        error!(timeout = ?self.extract_timeout, "Extraction timed out");
        Err(ApiError::extraction(format!(
          "extraction timed out after {:?}",
          self.extract_timeout
        )))
      }
    }
  }
}

/// Only the empty string is refused; whitespace and long text go to the
/// extractor unchanged.
fn validate_input(input_data: &str) -> Result<()> {
  if input_data.is_empty() {
    return Err(ApiError::invalid_input("input_data must not be empty"));
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;
  use chrono::NaiveDate;
  use scrum_extract::{ExtractError, ExtractResult};
  use serde_json::json;

  use super::*;
  use crate::errors::ApiErrorKind;
  use crate::service::FixedClock;

  /// Records the arguments of the last call and replays a fixed outcome
  struct RecordingExtractor {
    outcome: ExtractResult<serde_json::Value>,
    calls: Mutex<Vec<(String, String)>>,
  }

  impl RecordingExtractor {
    fn new(outcome: ExtractResult<serde_json::Value>) -> Self {
      Self {
        outcome,
        calls: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl ScrumExtractor for RecordingExtractor {
    async fn extract(&self, text: &str, reference_date: &str) -> ExtractResult<ScrumUpdate> {
      self.calls.lock().unwrap().push((text.to_string(), reference_date.to_string()));
      self.outcome.clone().and_then(ScrumUpdate::from_value)
    }
  }

  struct SlowExtractor;

  #[async_trait]
  impl ScrumExtractor for SlowExtractor {
    async fn extract(&self, _text: &str, _reference_date: &str) -> ExtractResult<ScrumUpdate> {
      tokio::time::sleep(Duration::from_secs(5)).await;
      Ok(ScrumUpdate::default())
    }
  }

  fn service_with(extractor: Arc<dyn ScrumExtractor>, timeout: Duration) -> ScrumUpdateService {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    ScrumUpdateService::new(extractor, Arc::new(clock), timeout)
  }

  #[test]
  fn reference_date_is_iso_formatted() {
    let service = service_with(Arc::new(SlowExtractor), Duration::from_secs(1));
    assert_eq!(service.reference_date(), "2024-01-15");
  }

  #[tokio::test]
  async fn process_passes_text_and_date() {
    let extractor = Arc::new(RecordingExtractor::new(Ok(json!({"tasks": ["fix bug"]}))));
    let service = service_with(extractor.clone(), Duration::from_secs(1));

    let update = service.process("Today I fixed a bug").await.unwrap();

    assert_eq!(update.into_value(), json!({"tasks": ["fix bug"]}));
    let calls = extractor.calls.lock().unwrap();
    assert_eq!(
      calls.as_slice(),
      &[("Today I fixed a bug".to_string(), "2024-01-15".to_string())]
    );
  }

  #[tokio::test]
  async fn process_maps_extractor_failure() {
    let extractor = Arc::new(RecordingExtractor::new(Err(ExtractError::message("rate limited"))));
    let service = service_with(extractor, Duration::from_secs(1));

    let err = service.process("Today I fixed a bug").await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Extraction);
    assert_eq!(err.to_string(), "rate limited");
  }

  #[tokio::test]
  async fn process_rejects_empty_input_without_calling_extractor() {
    let extractor = Arc::new(RecordingExtractor::new(Ok(json!({}))));
    let service = service_with(extractor.clone(), Duration::from_secs(1));

    let err = service.process("").await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
    assert!(extractor.calls.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn process_forwards_whitespace_input() {
    let extractor = Arc::new(RecordingExtractor::new(Ok(json!({}))));
    let service = service_with(extractor.clone(), Duration::from_secs(1));

    service.process(" \n ").await.unwrap();

    let calls = extractor.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, " \n ");
  }

  #[tokio::test]
  async fn process_forwards_long_input() {
    let extractor = Arc::new(RecordingExtractor::new(Ok(json!({}))));
    let service = service_with(extractor.clone(), Duration::from_secs(1));

    service.process(&"a".repeat(100_001)).await.unwrap();

    assert_eq!(extractor.calls.lock().unwrap()[0].0.len(), 100_001);
  }

  #[tokio::test]
  async fn process_times_out_slow_extractor() {
    let service = service_with(Arc::new(SlowExtractor), Duration::from_millis(50));

    let err = service.process("Today I fixed a bug").await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Extraction);
    assert_eq!(err.to_string(), "extraction timed out after 50ms");
  }
}
