//! Configuration module for the preview generator
//!
//! Provides types and parsing for the optional TOML configuration file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::*;
