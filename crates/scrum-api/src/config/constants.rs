//! API configuration constants

/// Default bind address (all interfaces, port 8000)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default template directory (the `templates/` folder shipped with this crate)
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Default upper bound for a single extraction call, in seconds
pub const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 60;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "Scrum Update Processor";
