//! Round observer port
//!
//! Defines the interface for reporting game progress between picks.

use crate::ports::combination_gateway::GatewayError;
use wordcraft_domain::{Concept, Discovery};

/// Callback for progress updates during a game
///
/// Implementations live in the presentation layer (spinner, console
/// messages). All methods default to no-ops.
pub trait RoundObserver: Send + Sync {
    /// Called before the first pick of a round (1-based)
    fn on_round_start(&self, _round: usize) {}

    /// Called right before the generator is asked
    fn on_combine_start(&self, _first: &Concept, _second: &Concept) {}

    /// Called when the generator call finished, successfully or not
    fn on_combine_end(&self, _success: bool) {}

    /// Called after the vocabulary has been updated
    fn on_discovery(&self, _round: usize, _discovery: &Discovery) {}

    /// Called when a failed combination was skipped by policy
    fn on_round_skipped(&self, _round: usize, _error: &GatewayError) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoRoundObserver;

impl RoundObserver for NoRoundObserver {}
