//! scrum-extract
//!
//! Turns free-text scrum updates into structured records with the help of a
//! large language model.
//!
//! The HTTP front-end only ever sees the [`ScrumExtractor`] trait, so the
//! production client ([`LlmScrumExtractor`]) can be swapped for a stub in tests.
//!
//! ```rust,ignore
//! use scrum_extract::{LlmScrumExtractor, ScrumExtractor};
//!
//! let extractor = LlmScrumExtractor::from_env()?;
//! let update = extractor.extract("Yesterday I fixed the login bug", "2024-01-15").await?;
//! println!("{}", serde_json::to_string_pretty(&update)?);
//! ```

/// Extractor configuration (API key, endpoint, model)
pub mod config;

/// Error types - ExtractError, ExtractResult
pub mod errors;

/// Extraction trait and the LLM-backed implementation
pub mod extractor;

/// Data models - ScrumUpdate
pub mod models;

/// Re-exports
pub use config::ExtractorConfig;
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{LlmScrumExtractor, ScrumExtractor};
pub use models::ScrumUpdate;
