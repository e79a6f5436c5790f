//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into adapter settings and
//! application parameters on demand.

mod game;
mod gemini;
mod output;

pub use game::FileGameConfig;
pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordcraft_domain::ConfigIssue;

/// Errors raised while turning configuration into runnable settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gemini API key not found: set {env} (environment or .env) or gemini.api_key")]
    MissingApiKey { env: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini endpoint and credentials
    pub gemini: FileGeminiConfig,
    /// Game loop settings
    pub game: FileGameConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.gemini.validate());
        issues.extend(self.game.validate());
        issues
    }
}
