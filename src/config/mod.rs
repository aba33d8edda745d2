//! Configuration module for skinmash
//!
//! Provides types, discovery and parsing for the optional `skinmash.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;
