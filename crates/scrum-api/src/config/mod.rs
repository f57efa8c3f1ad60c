//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_EXTRACT_TIMEOUT_SECS, DEFAULT_TEMPLATES_DIR, SERVICE_NAME,
};
pub use env::Config;
