//! Game configuration from TOML (`[game]` section)

use serde::{Deserialize, Serialize};
use wordcraft_application::GameParams;
use wordcraft_domain::{ConfigIssue, ConfigIssueCode, ErrorPolicy};

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// on_error = "skip-round"   # "fatal" or "skip-round"
/// max_rounds = 20           # omit to play until cancelled
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// What a failed combination does: "fatal" or "skip-round"
    pub on_error: String,
    /// Stop after this many rounds
    pub max_rounds: Option<usize>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Fatal.to_string(),
            max_rounds: None,
        }
    }
}

impl FileGameConfig {
    /// Parse on_error string into ErrorPolicy, returning warnings on failure.
    pub fn parse_error_policy(&self) -> (ErrorPolicy, Vec<ConfigIssue>) {
        match self.on_error.parse::<ErrorPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "game.on_error".to_string(),
                        value: self.on_error.clone(),
                        valid_values: vec!["fatal".to_string(), "skip-round".to_string()],
                    },
                    format!(
                        "game.on_error: unknown value '{}', falling back to 'fatal'",
                        self.on_error
                    ),
                );
                (ErrorPolicy::default(), vec![issue])
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_error_policy().1;
        if self.max_rounds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroValue {
                    field: "game.max_rounds".to_string(),
                },
                "game.max_rounds is 0, the game will end before the first round",
            ));
        }
        issues
    }

    /// Convert to application-level parameters
    pub fn to_game_params(&self) -> GameParams {
        GameParams {
            max_rounds: self.max_rounds,
            error_policy: self.parse_error_policy().0,
        }
    }
}
