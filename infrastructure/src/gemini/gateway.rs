//! Gemini combination gateway implementation

use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};
use wordcraft_application::{CombinationGateway, GatewayError};
use wordcraft_domain::{Concept, PromptTemplate};

/// Default `generateContent` endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Maximum number of characters of an error body kept in [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY: usize = 500;

/// Connection settings resolved from configuration
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub api_key: String,
    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Combination gateway backed by Gemini `generateContent`
pub struct GeminiCombinationGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiCombinationGateway {
    /// Create a gateway with its own HTTP client
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        info!("GeminiCombinationGateway initialized ({})", settings.endpoint);

        Ok(Self { client, settings })
    }

    /// Create a gateway sharing an existing client
    pub fn with_client(client: reqwest::Client, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

/// Map a reqwest failure without leaking the API key in the URL.
fn classify_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(err.without_url().to_string())
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY).collect();
    truncated.push_str("...");
    truncated
}

#[async_trait]
impl CombinationGateway for GeminiCombinationGateway {
    async fn combine(&self, first: &Concept, second: &Concept) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::combine(first, second);
        debug!("Combination prompt: {}", prompt);

        let payload = serde_json::to_vec(&GenerateContentRequest::from_prompt(prompt))
            .map_err(|e| GatewayError::RequestBuild(e.to_string()))?;

        let response = self
            .client
            .post(&self.settings.endpoint)
            .query(&[("key", self.settings.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::BodyRead(e.without_url().to_string())
            }
        })?;

        debug!("Gemini raw response ({}): {}", status, body);

        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Parse(e.to_string()))?;
        debug!("Gemini parsed response: {:?}", parsed);

        let text = parsed.first_text()?;
        Ok(text.to_string())
    }
}
