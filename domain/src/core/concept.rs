//! Concept value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// A word or expression the player has discovered (Value Object)
///
/// Identity is exact text equality: `"Steam"` and `"steam"` are two
/// different concepts. No trimming or case folding happens here; callers
/// that receive text from outside decide how to clean it first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Concept {
    name: String,
}

impl Concept {
    /// Create a new concept, rejecting empty or whitespace-only text
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyConcept);
        }
        Ok(Self { name })
    }

    /// Build a concept from compile-time text known to be non-empty
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(!name.trim().is_empty());
        Self {
            name: name.to_string(),
        }
    }

    /// Get the concept text
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Concept {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Concept::new(s)
    }
}

impl AsRef<str> for Concept {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl<'de> Deserialize<'de> for Concept {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Concept::new(s).map_err(serde::de::Error::custom)
    }
}
