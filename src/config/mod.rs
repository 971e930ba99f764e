//! Configuration loading and management.

mod store;
mod types;
mod validate;

pub use store::{config_dir, config_file_path};
pub use types::{Config, OverlayConfig};
pub use validate::validate_config;
