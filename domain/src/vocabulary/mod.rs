//! Vocabulary subdomain: the growing set of discovered concepts.
//!
//! - [`entities::Vocabulary`]: ordered store seeded with the four elements
//! - [`discovery::Discovery`]: whether a combination result was new or known
//! - [`discovery::RoundStatus`]: the header text carried into the next round

pub mod discovery;
pub mod entities;
