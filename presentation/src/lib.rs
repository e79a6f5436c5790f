//! Presentation layer for wordcraft
//!
//! This crate contains the fuzzy concept picker, CLI definitions,
//! progress reporters and console output.

pub mod cli;
pub mod output;
pub mod picker;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OnErrorArg};
pub use output::console::ConsoleFormatter;
pub use picker::FuzzyPicker;
pub use progress::reporter::{RoundReporter, SimpleProgress};
