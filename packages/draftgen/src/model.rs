//! Completion model trait.
//!
//! Abstracts the hosted completion API behind a small seam so the pipeline
//! can run against the real client or a scripted mock. Implementations wrap
//! a specific provider and its request configuration; the pipeline only
//! needs fragments in arrival order.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;

/// Stream of response text fragments, in arrival order.
pub type FragmentStream = BoxStream<'static, Result<String>>;

/// A completion backend that can stream a response for a rendered prompt.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Start a streaming completion for the prompt.
    ///
    /// The returned stream yields text fragments that concatenate to the
    /// full response. A stream error aborts the whole request; there is no
    /// partial result.
    async fn stream_completion(&self, prompt: &str) -> Result<FragmentStream>;
}
