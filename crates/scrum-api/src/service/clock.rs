//! Source of the reference date passed to the extractor

use chrono::{Local, NaiveDate};

/// Supplies "today"
///
/// - Production: [`SystemClock`]
/// - Test: [`FixedClock`]
pub trait Clock: Send + Sync {
  /// Current local date
  fn today(&self) -> NaiveDate;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    self.0
  }
}
