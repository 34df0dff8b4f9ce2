//! Form fields and submission validation.
//!
//! Each workflow declares a fixed set of input fields. Submission is
//! all-or-nothing: every field must be non-empty, otherwise the caller gets
//! a single [`DraftError::IncompleteForm`] and no request is made. There are
//! no per-field error messages and no partial submission.

use crate::error::{DraftError, Result};

/// A declared input field for a workflow.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Placeholder key in the prompt template
    pub key: &'static str,

    /// Label shown when collecting the value
    pub label: &'static str,

    /// Optional guidance shown alongside the label
    pub help: Option<&'static str>,
}

/// User-supplied values keyed by field, in declaration order.
///
/// Scoped to a single submission; nothing persists across requests.
#[derive(Debug, Clone, Default)]
pub struct ParameterMapping {
    entries: Vec<(&'static str, String)>,
}

impl ParameterMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a field key, replacing any previous value.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value for a field key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Validate a submission against the declared fields.
///
/// Every field must be present with a non-blank value. Any violation yields
/// the single form warning; the caller shows it and sends nothing.
pub fn validate(fields: &[Field], mapping: &ParameterMapping) -> Result<()> {
    let complete = fields
        .iter()
        .all(|field| matches!(mapping.get(field.key), Some(v) if !v.trim().is_empty()));

    if complete {
        Ok(())
    } else {
        Err(DraftError::IncompleteForm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[Field] = &[
        Field {
            key: "product",
            label: "Product",
            help: None,
        },
        Field {
            key: "audience",
            label: "Audience",
            help: None,
        },
    ];

    fn full_mapping() -> ParameterMapping {
        let mut mapping = ParameterMapping::new();
        mapping.insert("product", "Widget");
        mapping.insert("audience", "Everyone");
        mapping
    }

    #[test]
    fn test_complete_submission_passes() {
        assert!(validate(FIELDS, &full_mapping()).is_ok());
    }

    #[test]
    fn test_missing_field_blocks() {
        let mut mapping = ParameterMapping::new();
        mapping.insert("product", "Widget");

        let err = validate(FIELDS, &mapping).unwrap_err();
        assert!(matches!(err, DraftError::IncompleteForm));
    }

    #[test]
    fn test_empty_field_blocks() {
        let mut mapping = full_mapping();
        mapping.insert("audience", "");

        assert!(validate(FIELDS, &mapping).is_err());
    }

    #[test]
    fn test_whitespace_only_field_blocks() {
        let mut mapping = full_mapping();
        mapping.insert("audience", "   \n");

        assert!(validate(FIELDS, &mapping).is_err());
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut mapping = full_mapping();
        mapping.insert("product", "Gadget");

        assert_eq!(mapping.get("product"), Some("Gadget"));
        assert_eq!(mapping.iter().count(), 2);
    }
}
