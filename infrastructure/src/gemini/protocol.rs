//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Request:
//!
//! ```json
//! {"contents":[{"parts":[{"text":"<prompt>"}]}]}
//! ```
//!
//! Response (only the fields we read):
//!
//! ```json
//! {"candidates":[{"content":{"parts":[{"text":"<result>"}]}}]}
//! ```
//!
//! Missing arrays deserialize as empty so that a blocked or truncated
//! answer surfaces as an [`ExtractionError`] instead of a parse failure.

use serde::{Deserialize, Serialize};
use wordcraft_application::ExtractionError;

/// A single text fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A content block made of parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// One content block with one part holding `prompt`
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// A generated candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, trimmed.
    pub fn first_text(&self) -> Result<&str, ExtractionError> {
        let candidate = self
            .candidates
            .first()
            .ok_or(ExtractionError::NoCandidates)?;
        let part = candidate
            .content
            .parts
            .first()
            .ok_or(ExtractionError::NoParts)?;

        let text = part.text.trim();
        if text.is_empty() {
            return Err(ExtractionError::EmptyText);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::from_prompt("fire + water");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "fire + water"}]}]})
        );
    }

    #[test]
    fn test_first_text() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"steam"}]}}]}"#);
        assert_eq!(response.first_text(), Ok("steam"));
    }

    #[test]
    fn test_first_text_ignores_later_candidates_and_parts() {
        let response = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"steam"},{"text":"fog"}],"role":"model"},"finishReason":"STOP"},
                {"content":{"parts":[{"text":"cloud"}]}}
            ]}"#,
        );
        assert_eq!(response.first_text(), Ok("steam"));
    }

    #[test]
    fn test_first_text_trims_whitespace() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"Steam\n"}]}}]}"#);
        assert_eq!(response.first_text(), Ok("Steam"));
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(
            parse(r#"{"candidates":[]}"#).first_text(),
            Err(ExtractionError::NoCandidates)
        );
        assert_eq!(parse("{}").first_text(), Err(ExtractionError::NoCandidates));
    }

    #[test]
    fn test_candidate_without_parts() {
        assert_eq!(
            parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#).first_text(),
            Err(ExtractionError::NoParts)
        );
        // Safety-blocked answers come back without content at all.
        assert_eq!(
            parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).first_text(),
            Err(ExtractionError::NoParts)
        );
    }

    #[test]
    fn test_blank_text() {
        assert_eq!(
            parse(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#).first_text(),
            Err(ExtractionError::EmptyText)
        );
    }
}
