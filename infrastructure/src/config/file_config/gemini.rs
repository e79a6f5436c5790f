//! Gemini provider configuration from TOML (`[gemini]` section)

use super::ConfigError;
use crate::gemini::gateway::{DEFAULT_ENDPOINT, GeminiSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wordcraft_domain::{ConfigIssue, ConfigIssueCode};

/// Gemini API configuration.
///
/// # Example
///
/// ```toml
/// [gemini]
/// endpoint = "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Full `generateContent` URL, without the `key` query parameter.
    pub endpoint: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; prefer the env var).
    pub api_key: Option<String>,
    /// Request timeout in seconds; unset waits indefinitely.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: direct value first, then the named env var.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.to_string());
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            }),
        }
    }

    /// Build adapter settings, resolving the API key.
    pub fn to_settings(&self) -> Result<GeminiSettings, ConfigError> {
        let mut settings =
            GeminiSettings::new(self.resolve_api_key()?).with_endpoint(self.endpoint.clone());
        if let Some(secs) = self.timeout_seconds.filter(|s| *s > 0) {
            settings = settings.with_timeout(Duration::from_secs(secs));
        }
        Ok(settings)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.endpoint.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "gemini.endpoint".to_string(),
                },
                "gemini.endpoint cannot be empty",
            ));
        }
        if self.api_key.is_none() && self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "gemini.api_key_env".to_string(),
                },
                "gemini.api_key_env cannot be empty when gemini.api_key is not set",
            ));
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroValue {
                    field: "gemini.timeout_seconds".to_string(),
                },
                "gemini.timeout_seconds is 0, requests will not time out",
            ));
        }
        issues
    }
}
