//! Models module

mod request;
mod response;

pub use request::ScrumUpdateRequest;
pub use response::HealthResponse;
