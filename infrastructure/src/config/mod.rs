//! Configuration file loading for wordcraft
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WORDCRAFT_*` environment variables (`WORDCRAFT_GAME__MAX_ROUNDS=5`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./wordcraft.toml` or `./.wordcraft.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wordcraft/config.toml`
//! 5. Default values
//!
//! A `.env` file in the working directory is loaded into the process
//! environment first, so `GEMINI_API_KEY` can live there.

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileConfig, FileGameConfig, FileGeminiConfig, FileOutputConfig};
pub use loader::ConfigLoader;
