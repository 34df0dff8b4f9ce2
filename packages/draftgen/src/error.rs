//! Typed errors for the generation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure class.

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, DraftError>;

/// Errors that can occur while generating a document.
///
/// A marker pair that never matches is not an error anywhere in this crate;
/// extraction yields absent sections instead.
#[derive(Debug, Error)]
pub enum DraftError {
    /// One or more declared form fields is empty
    #[error("please fill in all fields")]
    IncompleteForm,

    /// A template placeholder has no value in the parameter mapping
    #[error("no value provided for placeholder: {placeholder}")]
    MissingPlaceholder { placeholder: String },

    /// The completion backend failed (network, auth, rate limit, parse)
    #[error("completion failed: {0}")]
    Completion(#[from] openai_client::OpenAIError),

    /// Writing an exported file failed
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
