//! Core domain concepts shared across all subdomains.
//!
//! - [`concept::Concept`]: a discovered or seed word usable as a combination input
//! - [`error::DomainError`]: domain-level errors

pub mod concept;
pub mod error;
