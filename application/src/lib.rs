//! Application layer for wordcraft
//!
//! This crate contains the game loop use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameParams;
pub use ports::{
    combination_gateway::{CombinationGateway, ExtractionError, GatewayError},
    concept_picker::{ConceptPicker, PickerError},
    round_observer::{NoRoundObserver, RoundObserver},
};
pub use use_cases::play_game::{
    GameEnd, GameState, GameSummary, PlayGameError, PlayGameUseCase, RoundOutcome,
};
