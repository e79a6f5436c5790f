//! Gemini adapter
//!
//! Implements CombinationGateway against the Gemini `generateContent`
//! REST endpoint.

pub mod gateway;
pub mod protocol;
