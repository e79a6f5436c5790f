//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wordcraft_domain::ErrorPolicy;

/// What to do when a combination fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnErrorArg {
    /// Abort the game with an error
    Fatal,
    /// Show the failure in the header and keep playing
    SkipRound,
}

impl From<OnErrorArg> for ErrorPolicy {
    fn from(arg: OnErrorArg) -> Self {
        match arg {
            OnErrorArg::Fatal => ErrorPolicy::Fatal,
            OnErrorArg::SkipRound => ErrorPolicy::SkipRound,
        }
    }
}

/// CLI arguments for wordcraft
#[derive(Parser, Debug)]
#[command(name = "wordcraft")]
#[command(author, version, about = "Combine concepts with an LLM and grow your vocabulary")]
#[command(long_about = r#"
Wordcraft starts you with water, earth, air and fire. Each round you pick two
concepts and Gemini names what they make together. New results join your
vocabulary; repeats are reported as already known.

Press Esc or Ctrl+C in the picker to end the game.

The API key is read from GEMINI_API_KEY (a .env file in the working
directory is loaded first).

Configuration files are loaded from (in priority order):
1. WORDCRAFT_* environment variables (e.g. WORDCRAFT_GAME__MAX_ROUNDS=10)
2. --config <path>     Explicit config file
3. ./wordcraft.toml    Project-level config
4. ~/.config/wordcraft/config.toml   Global config
"#)]
pub struct Cli {
    /// Stop after this many rounds
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_rounds: Option<u64>,

    /// Behaviour when a combination fails (overrides config)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<OnErrorArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wordcraft"]);
        assert_eq!(cli.max_rounds, None);
        assert_eq!(cli.on_error, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "wordcraft",
            "--max-rounds",
            "5",
            "--on-error",
            "skip-round",
            "-vv",
        ]);
        assert_eq!(cli.max_rounds, Some(5));
        assert_eq!(cli.on_error, Some(OnErrorArg::SkipRound));
        assert_eq!(ErrorPolicy::from(OnErrorArg::SkipRound), ErrorPolicy::SkipRound);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_max_rounds_rejected() {
        assert!(Cli::try_parse_from(["wordcraft", "--max-rounds", "0"]).is_err());
    }
}
