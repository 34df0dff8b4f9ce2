//! The generation pipeline.
//!
//! One request per invocation: validate the form, render the prompt, stream
//! the completion while notifying a display sink per fragment, then extract
//! the workflow's sections from the final text. The accumulation buffer is
//! owned by the call and dropped with the returned document; nothing is
//! shared across requests.

use futures::StreamExt;
use tracing::{debug, info};

use crate::error::Result;
use crate::form::{self, ParameterMapping};
use crate::model::CompletionModel;
use crate::workflow::Workflow;

/// One extracted section of a completed response.
#[derive(Debug, Clone)]
pub struct Section {
    /// Display label from the section rule
    pub label: &'static str,

    /// Extracted text, absent when the markers were not found
    pub content: Option<String>,
}

/// The result of one completed generation.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// Full response text, always available for export
    pub full_text: String,

    /// Sections in rule order, present or absent per marker search
    pub sections: Vec<Section>,
}

impl GeneratedDocument {
    /// Look up an extracted section by label.
    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .and_then(|s| s.content.as_deref())
    }
}

/// Run one generation end to end.
///
/// `sink` is invoked once per incoming fragment, in arrival order, and is
/// meant only for live display; extraction operates on the final
/// concatenated text after the stream ends. Any upstream failure returns an
/// error before any extracted state exists — either the flow completes and
/// extraction runs once, or nothing is produced.
pub async fn run<M, F>(
    model: &M,
    workflow: &Workflow,
    mapping: &ParameterMapping,
    mut sink: F,
) -> Result<GeneratedDocument>
where
    M: CompletionModel + ?Sized,
    F: FnMut(&str),
{
    form::validate(workflow.fields, mapping)?;

    let prompt = workflow.template.render(mapping)?;
    debug!(
        workflow = workflow.name,
        prompt_len = prompt.len(),
        "Prompt rendered"
    );

    let mut stream = model.stream_completion(&prompt).await?;

    let mut full_text = String::new();
    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        full_text.push_str(&fragment);
        sink(&fragment);
    }

    info!(
        workflow = workflow.name,
        response_len = full_text.len(),
        "Completion finished"
    );

    let sections = workflow
        .sections
        .iter()
        .map(|rule| Section {
            label: rule.label,
            content: rule.extract(&full_text),
        })
        .collect();

    Ok(GeneratedDocument {
        full_text,
        sections,
    })
}
