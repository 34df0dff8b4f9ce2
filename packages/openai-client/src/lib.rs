//! Minimal OpenAI chat completion client.
//!
//! Supports blocking and SSE-streaming chat completions, nothing else.
//! The client is constructed once from environment credentials and shared
//! read-only across requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use openai_client::{CompletionRequest, OpenAIClient};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let mut stream = client
//!     .completion_stream(
//!         CompletionRequest::new("gpt-4o-mini", "Hello!")
//!             .temperature(0.7)
//!             .max_tokens(16384),
//!     )
//!     .await?;
//!
//! while let Some(chunk) = stream.next().await {
//!     let chunk = chunk?;
//!     if chunk.done {
//!         break;
//!     }
//!     print!("{}", chunk.delta);
//! }
//! ```

pub mod error;
pub mod streaming;
pub mod types;

pub use error::{OpenAIError, Result};
pub use streaming::{CompletionStream, StreamChunk};
pub use types::{CompletionRequest, CompletionResponse, Message, Usage};

use reqwest::{header, Client};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat completion client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Chat completion, returned as a single string once the model finishes.
    pub async fn completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!("OpenAI API error: {}", error_text)));
        }

        let raw: types::CompletionResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Api("No response from OpenAI".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(CompletionResponse {
            content,
            usage: raw.usage,
        })
    }

    /// Streaming chat completion.
    ///
    /// Sends the request with `stream: true` and returns a stream of
    /// `StreamChunk` values parsed from the SSE response.
    pub async fn completion_stream(&self, request: CompletionRequest) -> Result<CompletionStream> {
        let mut body = serde_json::to_value(&request)
            .map_err(|e| OpenAIError::Parse(format!("Failed to serialize request: {}", e)))?;
        body["stream"] = serde_json::Value::Bool(true);

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI streaming request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI streaming API error");
            return Err(OpenAIError::Api(format!(
                "OpenAI streaming API error: {}",
                error_text
            )));
        }

        Ok(CompletionStream::new(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_default_base_url() {
        let client = OpenAIClient::new("sk-test");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
