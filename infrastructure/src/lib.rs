//! Infrastructure layer for wordcraft
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileGameConfig, FileGeminiConfig, FileOutputConfig,
};
pub use gemini::gateway::{DEFAULT_ENDPOINT, GeminiCombinationGateway, GeminiSettings};
