//! Configuration loading and discovery for `skinmash.toml`

use super::schema::SkinmashConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up by discovery.
pub const CONFIG_FILE: &str = "skinmash.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse skinmash.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output image path
    pub output: Option<PathBuf>,
}

/// Find skinmash.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find skinmash.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from `path`, or from a discovered skinmash.toml.
///
/// Returns the default configuration when no file is given or found.
pub fn load_config(path: Option<&Path>) -> Result<SkinmashConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(SkinmashConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<SkinmashConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SkinmashConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration. CLI arguments win.
pub fn merge_cli_overrides(config: &mut SkinmashConfig, overrides: &CliOverrides) {
    if let Some(ref output) = overrides.output {
        config.output.path = output.clone();
    }
}
