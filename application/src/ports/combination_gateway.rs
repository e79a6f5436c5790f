//! Combination gateway port
//!
//! Defines the interface for asking a text generator what two concepts
//! combine into. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;
use wordcraft_domain::Concept;

/// Reasons a well-formed response still carried no usable result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("response has no candidates")]
    NoCandidates,

    #[error("first candidate has no content parts")]
    NoParts,

    #[error("generated text is empty")]
    EmptyText,
}

/// Errors that can occur during a combination request
///
/// Every failure of the external call is classified here; adapters must
/// never panic on malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Unusable response: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for concept combination
///
/// Returns the generated text for `first + second`. Membership in the
/// vocabulary is not decided here.
#[async_trait]
pub trait CombinationGateway: Send + Sync {
    async fn combine(&self, first: &Concept, second: &Concept) -> Result<String, GatewayError>;
}
