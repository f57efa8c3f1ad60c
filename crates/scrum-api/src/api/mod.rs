//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, index, not_found, process_scrum, scrum_update};
pub use routes::{create_router, run_server};
pub use state::AppState;
