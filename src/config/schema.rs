//! Configuration schema types for `skinmash.toml`
//!
//! Every section and field is optional; a missing file is equivalent to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output image path.
pub const DEFAULT_OUTPUT: &str = "output.png";
/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "skinmash> ";

/// Output section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the composed skin is written
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Mojang API endpoints used to resolve player names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Username lookup endpoint; the username is appended
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
    /// Session profile endpoint; the profile id is appended
    #[serde(default = "default_session_url")]
    pub session_url: String,
    /// Per-request timeout in seconds (0 keeps the HTTP client default)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            profile_url: default_profile_url(),
            session_url: default_session_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_profile_url() -> String {
    "https://api.mojang.com/users/profiles/minecraft/".to_string()
}

fn default_session_url() -> String {
    "https://sessionserver.mojang.com/session/minecraft/profile/".to_string()
}

fn default_timeout_secs() -> u64 {
    0
}

/// Interactive mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self { prompt: default_prompt() }
    }
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

/// Root configuration structure for `skinmash.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkinmashConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub interactive: InteractiveConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "api.profile_url")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skinmash.toml: '{}' {}", self.field, self.message)
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl SkinmashConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.output.path.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.path".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        for (field, url) in
            [("api.profile_url", &self.api.profile_url), ("api.session_url", &self.api.session_url)]
        {
            if !is_http_url(url) {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be an http:// or https:// URL".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: SkinmashConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.path, PathBuf::from("output.png"));
        assert_eq!(config.interactive.prompt, "skinmash> ");
        assert_eq!(config.api.timeout_secs, 0);
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[output]
path = "out/combined.png"

[api]
profile_url = "http://localhost:8080/profiles/"
session_url = "http://localhost:8080/session/"
timeout_secs = 5

[interactive]
prompt = "> "
"#;
        let config: SkinmashConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.path, PathBuf::from("out/combined.png"));
        assert_eq!(config.api.profile_url, "http://localhost:8080/profiles/");
        assert_eq!(config.api.session_url, "http://localhost:8080/session/");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.interactive.prompt, "> ");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: SkinmashConfig = toml::from_str("[api]\ntimeout_secs = 15\n").unwrap();
        assert_eq!(config.api.timeout_secs, 15);
        assert!(config.api.profile_url.contains("api.mojang.com"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = SkinmashConfig::default();
        config.api.session_url = "ftp://example.com/".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "api.session_url");
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let mut config = SkinmashConfig::default();
        config.output.path = PathBuf::new();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "output.path"));
        assert!(errors[0].to_string().starts_with("skinmash.toml:"));
    }
}
