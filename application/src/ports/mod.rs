//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod combination_gateway;
pub mod concept_picker;
pub mod round_observer;
