//! Application configuration
//!
//! Static parameters consumed by use cases. They are assembled by the CLI
//! from file configuration and command-line flags.

mod game_params;

pub use game_params::GameParams;
