//! View module

mod renderer;

pub use renderer::{INDEX_TEMPLATE, RESPONSE_TEMPLATE, Views};
