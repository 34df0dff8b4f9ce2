//! Prompt-driven document generation.
//!
//! Two generators (a project-scaffold generator and a PRD generator) share
//! one pipeline: collect typed form fields, interpolate them into a fixed
//! prompt template, stream the completion from a hosted model, then extract
//! marker-delimited sections from the finished text for display and export.
//!
//! # Usage
//!
//! ```rust,ignore
//! use draftgen::{pipeline, OpenAIModel, ParameterMapping, Workflow};
//! use openai_client::OpenAIClient;
//!
//! let model = OpenAIModel::new(OpenAIClient::from_env()?, "gpt-4o-mini");
//! let workflow = Workflow::prd();
//!
//! let mut mapping = ParameterMapping::new();
//! for field in workflow.fields {
//!     mapping.insert(field.key, collect_value(field));
//! }
//!
//! let document = pipeline::run(&model, &workflow, &mapping, |fragment| {
//!     print!("{fragment}");
//! })
//! .await?;
//!
//! if let Some(prd) = document.section("PRD") {
//!     println!("{prd}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`form`] - field declarations and submission validation
//! - [`template`] / [`prompts`] - placeholder templates and the shipped prompts
//! - [`extract`] - marker-pair section extraction
//! - [`workflow`] - per-generator configuration
//! - [`pipeline`] - the streaming generation flow
//! - [`export`] - file export of the full response
//! - [`model`] / [`openai`] - completion backend seam and OpenAI implementation
//! - [`testing`] - scripted mock backend

pub mod error;
pub mod export;
pub mod extract;
pub mod form;
pub mod model;
pub mod openai;
pub mod pipeline;
pub mod prompts;
pub mod template;
pub mod testing;
pub mod workflow;

pub use error::{DraftError, Result};
pub use export::{write_export, FileExport};
pub use extract::{extract_section, SectionRule};
pub use form::{Field, ParameterMapping};
pub use model::{CompletionModel, FragmentStream};
pub use openai::OpenAIModel;
pub use pipeline::{run, GeneratedDocument, Section};
pub use template::PromptTemplate;
pub use workflow::Workflow;
