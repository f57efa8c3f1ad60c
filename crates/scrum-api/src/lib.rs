//! scrum-api crate
//!
//! Web server that turns free-text scrum updates into structured records.
//!
//! ## Endpoints
//! - `GET /` - HTMX form page
//! - `POST /process-scrum` - Form submit, returns an HTML fragment (always 200)
//! - `POST /scrum-update` - JSON API
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/scrum-update \
//!   -H "Content-Type: application/json" \
//!   -d '{"input_data": "Yesterday I fixed the login bug, today I start on billing. Blocked on API keys."}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod views;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HealthResponse, ScrumUpdateRequest};
pub use service::{Clock, FixedClock, ScrumUpdateService, SystemClock};
pub use views::Views;
