//! Domain layer for wordcraft
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Concept**: a word the player knows, compared by exact text
//! - **Vocabulary**: every concept discovered so far, seeded with
//!   `water`, `earth`, `air` and `fire`
//! - **Discovery**: whether a combination produced something new

pub mod config;
pub mod core;
pub mod game;
pub mod prompt;
pub mod vocabulary;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{concept::Concept, error::DomainError};
pub use game::ErrorPolicy;
pub use prompt::PromptTemplate;
pub use vocabulary::{
    discovery::{Discovery, RoundStatus},
    entities::{SEED_CONCEPTS, Vocabulary},
};
