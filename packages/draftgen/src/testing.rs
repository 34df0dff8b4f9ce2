//! Testing utilities including a scripted completion model.
//!
//! Useful for exercising the pipeline without real API calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::StreamExt;

use openai_client::OpenAIError;

use crate::error::{DraftError, Result};
use crate::model::{CompletionModel, FragmentStream};

/// A mock completion model that replays scripted fragments.
///
/// Fragments are delivered in order; optionally the stream fails after a
/// given number of fragments, or the request fails before streaming starts.
/// Prompts passed in are recorded for assertions.
#[derive(Default)]
pub struct MockModel {
    fragments: Vec<String>,
    fail_after: Option<usize>,
    fail_on_start: bool,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// Create a mock that streams the given fragments then ends.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Fail the stream after `n` fragments have been delivered.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Fail the request before any fragment is delivered.
    pub fn failing_on_start(mut self) -> Self {
        self.fail_on_start = true;
        self
    }

    /// Prompts this mock has been asked to complete.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn stream_completion(&self, prompt: &str) -> Result<FragmentStream> {
        self.prompts.write().unwrap().push(prompt.to_string());

        if self.fail_on_start {
            return Err(DraftError::Completion(OpenAIError::Api(
                "scripted request failure".into(),
            )));
        }

        let mut items: Vec<Result<String>> = self
            .fragments
            .iter()
            .cloned()
            .map(Ok)
            .collect();

        if let Some(n) = self.fail_after {
            items.truncate(n);
            items.push(Err(DraftError::Completion(OpenAIError::Network(
                "scripted stream failure".into(),
            ))));
        }

        Ok(futures::stream::iter(items).boxed())
    }
}
