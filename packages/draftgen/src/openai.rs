//! OpenAI-backed completion model.

use async_trait::async_trait;
use futures::future;
use futures::{StreamExt, TryStreamExt};
use tracing::debug;

use openai_client::{CompletionRequest, OpenAIClient};

use crate::error::{DraftError, Result};
use crate::model::{CompletionModel, FragmentStream};

/// Default model, matching the hosted generators.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion length cap.
pub const DEFAULT_MAX_TOKENS: u32 = 16384;

/// [`CompletionModel`] implementation over the OpenAI chat completion API.
///
/// Holds the shared client plus the per-workflow sampling configuration.
/// Built once at startup from environment credentials and reused for every
/// request; never mutated after construction.
pub struct OpenAIModel {
    client: OpenAIClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIModel {
    /// Wrap a configured client with the given model id.
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion length cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl CompletionModel for OpenAIModel {
    async fn stream_completion(&self, prompt: &str) -> Result<FragmentStream> {
        let request = CompletionRequest::new(&self.model, prompt)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens);

        debug!(model = %self.model, prompt_len = prompt.len(), "Starting streaming completion");

        let stream = self.client.completion_stream(request).await?;

        let fragments = stream
            .map_err(DraftError::from)
            .try_take_while(|chunk| future::ready(Ok(!chunk.done)))
            .try_filter_map(|chunk| {
                future::ready(Ok(if chunk.delta.is_empty() {
                    None
                } else {
                    Some(chunk.delta)
                }))
            })
            .boxed();

        Ok(fragments)
    }
}
