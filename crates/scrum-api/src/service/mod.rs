//! Service module

mod clock;
mod scrum_update_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use scrum_update_service::ScrumUpdateService;
