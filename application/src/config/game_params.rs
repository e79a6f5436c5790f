//! Game parameters: loop control for [`PlayGameUseCase`](crate::use_cases::play_game::PlayGameUseCase).

use serde::{Deserialize, Serialize};
use wordcraft_domain::ErrorPolicy;

/// Loop control parameters.
///
/// | Field          | Default  | Effect                                  |
/// |----------------|----------|-----------------------------------------|
/// | `max_rounds`   | `None`   | Stop after this many completed rounds   |
/// | `error_policy` | `Fatal`  | What a failed combination does          |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    /// Upper bound on completed rounds; `None` plays until cancelled.
    pub max_rounds: Option<usize>,
    /// Policy applied to combination failures.
    pub error_policy: ErrorPolicy,
}

impl GameParams {
    // ==================== Builder Methods ====================

    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = Some(max);
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Whether `rounds_played` has reached the configured bound
    pub fn round_limit_reached(&self, rounds_played: usize) -> bool {
        self.max_rounds.is_some_and(|max| rounds_played >= max)
    }
}
