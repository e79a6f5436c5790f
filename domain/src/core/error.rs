//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Concept cannot be empty")]
    EmptyConcept,

    #[error("Invalid error policy: {0} (expected \"fatal\" or \"skip-round\")")]
    InvalidErrorPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyConcept.to_string(), "Concept cannot be empty");
        assert_eq!(
            DomainError::InvalidErrorPolicy("retry".to_string()).to_string(),
            "Invalid error policy: retry (expected \"fatal\" or \"skip-round\")"
        );
    }
}
