//! What the game loop does when a combination fails

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error policy for failed combinations (Value Object)
///
/// | Policy      | Behaviour                                               |
/// |-------------|---------------------------------------------------------|
/// | `Fatal`     | The error ends the game and is returned to the caller   |
/// | `SkipRound` | The error is logged, shown in the header, play goes on  |
///
/// Picker failures always end the game regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorPolicy {
    #[default]
    Fatal,
    SkipRound,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Fatal => "fatal",
            ErrorPolicy::SkipRound => "skip-round",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorPolicy::Fatal)
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(ErrorPolicy::Fatal),
            "skip-round" | "skip_round" | "skip" => Ok(ErrorPolicy::SkipRound),
            other => Err(DomainError::InvalidErrorPolicy(other.to_string())),
        }
    }
}

impl Serialize for ErrorPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
