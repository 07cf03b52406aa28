pub mod config;
pub mod core;
pub mod utils;

pub use config::{debug_enabled, GreeterConfig, WalkConfig};
pub use utils::error::{DemoError, Result};
