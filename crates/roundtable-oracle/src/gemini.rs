//! Gemini API client for text generation.
//!
//! Speaks the `generateContent` REST API: one user message carrying the
//! whole prompt, optional generation config, text pulled from the first
//! candidate.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::GenerationConfig;
use crate::error::{OracleError, Result};
use crate::oracle::Oracle;

/// Environment variable for the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini generateContent endpoint base.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model when none is configured.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini API client.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Uses the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            OracleError::Configuration(format!(
                "Missing {} environment variable",
                GEMINI_API_KEY_ENV
            ))
        })?;
        Ok(Self::new(api_key))
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    ///
    /// A timed-out call surfaces as [`OracleError::Unavailable`], distinct
    /// from malformed-output errors.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl Oracle for GeminiClient {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: if config.is_empty() {
                None
            } else {
                Some(config.clone())
            },
        };

        trace!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Unavailable(format!("request timed out: {}", e))
                } else {
                    OracleError::Transport(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::ResponseParse(format!("Failed to parse response: {}", e)))?;

        let text = response.text().ok_or(OracleError::Empty)?;
        debug!(model = %self.model, response_len = text.len(), "Generation response received");
        Ok(text)
    }
}

/// generateContent request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// A message in the request.
#[derive(Debug, Clone, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

/// A text part of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// generateContent response body.
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        if parts.is_empty() {
            return None;
        }
        Some(
            parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

/// A completion candidate.
#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}
