//! Discovery outcome and round status

use crate::core::concept::Concept;
use serde::Serialize;

/// Result of checking a combination against the vocabulary (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "concept", rename_all = "snake_case")]
pub enum Discovery {
    /// The concept was absent and has been appended
    New(Concept),
    /// The concept was already in the vocabulary
    Known(Concept),
}

impl Discovery {
    pub fn concept(&self) -> &Concept {
        match self {
            Discovery::New(c) | Discovery::Known(c) => c,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Discovery::New(_))
    }

    /// Status line shown above the next round's first pick
    pub fn status(&self) -> RoundStatus {
        match self {
            Discovery::New(c) => RoundStatus::new(format!("You got: {} !!", c)),
            Discovery::Known(c) => RoundStatus::new(format!("You already have: {}", c)),
        }
    }
}

/// Header text carried from one round into the next (Value Object)
///
/// Empty for the very first pick of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundStatus {
    text: String,
}

impl RoundStatus {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Status shown when a round was skipped after a failed combination
    pub fn combination_failed(reason: impl std::fmt::Display) -> Self {
        Self::new(format!("Combination failed: {}", reason))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_discovery_status() {
        let d = Discovery::New(Concept::new("steam").unwrap());
        assert!(d.is_new());
        assert_eq!(d.status().as_str(), "You got: steam !!");
    }

    #[test]
    fn test_known_discovery_status() {
        let d = Discovery::Known(Concept::new("steam").unwrap());
        assert!(!d.is_new());
        assert_eq!(d.status().as_str(), "You already have: steam");
    }

    #[test]
    fn test_initial_status_is_empty() {
        assert!(RoundStatus::default().is_empty());
    }
}
