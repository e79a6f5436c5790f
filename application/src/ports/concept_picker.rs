//! Concept picker port for choosing a combination input.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ConceptPicker`] - defined here in application layer
//! - **Adapter**: `FuzzyPicker` - implemented in presentation layer
//!
//! # Contract
//!
//! - Every concept in the vocabulary is offered, in vocabulary order.
//! - Exactly one concept is returned per call.
//! - The `header` is shown above the list; it may be empty.
//! - The call blocks until the player selects or cancels. No timeout.

use async_trait::async_trait;
use thiserror::Error;
use wordcraft_domain::{Concept, Vocabulary};

/// Errors that can occur while picking a concept.
///
/// None of these are retried by the game loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// Player aborted the selection (Esc, Ctrl+C).
    #[error("Selection cancelled")]
    Cancelled,

    /// There was nothing to choose from.
    #[error("Vocabulary is empty")]
    EmptyVocabulary,

    /// The terminal could not be driven (not a TTY, I/O failure).
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl PickerError {
    /// Check if this error represents a player cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PickerError::Cancelled)
    }
}

/// Port for interactively choosing one concept from the vocabulary.
#[async_trait]
pub trait ConceptPicker: Send + Sync {
    /// Present the vocabulary with `header` above it and return the choice.
    async fn pick(&self, vocabulary: &Vocabulary, header: &str) -> Result<Concept, PickerError>;
}
