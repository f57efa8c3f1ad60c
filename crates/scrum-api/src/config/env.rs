//! Config loading from environment variables

use std::path::PathBuf;
use std::time::Duration;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_EXTRACT_TIMEOUT_SECS, DEFAULT_TEMPLATES_DIR};
use crate::errors::ApiError;

const ENV_BIND_ADDR: &str = "SCRUM_API_BIND_ADDR";
const ENV_TEMPLATES_DIR: &str = "SCRUM_TEMPLATES_DIR";
const ENV_EXTRACT_TIMEOUT_SECS: &str = "SCRUM_EXTRACT_TIMEOUT_SECS";

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8000")
  pub bind_addr: String,
  /// Directory holding `index.html` and `scrum_response.html`
  pub templates_dir: PathBuf,
  /// Upper bound for a single extraction call
  pub extract_timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
      extract_timeout: Duration::from_secs(DEFAULT_EXTRACT_TIMEOUT_SECS),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a map instead of mutating the
  /// process environment.
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let bind_addr = lookup(ENV_BIND_ADDR)
      .filter(|v| !v.trim().is_empty())
      .unwrap_or(defaults.bind_addr);

    let templates_dir = lookup(ENV_TEMPLATES_DIR)
      .filter(|v| !v.trim().is_empty())
      .map_or(defaults.templates_dir, PathBuf::from);

    let extract_timeout = match lookup(ENV_EXTRACT_TIMEOUT_SECS) {
      Some(raw) => parse_timeout_secs(&raw)?,
      None => defaults.extract_timeout,
    };

    Ok(Self {
      bind_addr,
      templates_dir,
      extract_timeout,
    })
  }
}

fn parse_timeout_secs(raw: &str) -> crate::errors::Result<Duration> {
  let secs: u64 = raw.trim().parse().map_err(|_| {
    ApiError::config(format!(
      "{ENV_EXTRACT_TIMEOUT_SECS} must be a positive integer, got {raw:?}"
    ))
  })?;

  if secs == 0 {
    return Err(ApiError::config(format!(
      "{ENV_EXTRACT_TIMEOUT_SECS} must be at least 1"
    )));
  }

  Ok(Duration::from_secs(secs))
}
