//! Prompt template rendering.
//!
//! A template is a fixed string with `{placeholder}` tokens, one template per
//! workflow, never mutated at runtime. Rendering is literal substitution:
//! values are inserted as-is with no escaping, and the result is treated as
//! plain prompt text by callers.

use crate::error::{DraftError, Result};
use crate::form::ParameterMapping;

/// An immutable prompt template with named placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// Template text containing `{key}` tokens
    pub text: &'static str,

    /// Placeholder keys the template expects
    pub keys: &'static [&'static str],
}

impl PromptTemplate {
    /// Replace every placeholder with its value from the mapping.
    ///
    /// Fails if any declared key is absent from the mapping. Form validation
    /// runs before rendering, so this is unreachable in the normal flow.
    pub fn render(&self, mapping: &ParameterMapping) -> Result<String> {
        let mut rendered = self.text.to_string();
        for key in self.keys {
            let value = mapping
                .get(key)
                .ok_or_else(|| DraftError::MissingPlaceholder {
                    placeholder: (*key).to_string(),
                })?;
            rendered = rendered.replace(&format!("{{{}}}", key), value);
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: PromptTemplate = PromptTemplate {
        text: "Build {thing} for {audience}. Remember: {thing}.",
        keys: &["thing", "audience"],
    };

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let mut mapping = ParameterMapping::new();
        mapping.insert("thing", "a parser");
        mapping.insert("audience", "compilers");

        let rendered = TEMPLATE.render(&mapping).unwrap();
        assert_eq!(
            rendered,
            "Build a parser for compilers. Remember: a parser."
        );
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_render_contains_every_value_verbatim() {
        let mut mapping = ParameterMapping::new();
        mapping.insert("thing", "x & <y> \"z\"");
        mapping.insert("audience", "no one");

        let rendered = TEMPLATE.render(&mapping).unwrap();
        assert!(rendered.contains("x & <y> \"z\""));
        assert!(rendered.contains("no one"));
    }

    #[test]
    fn test_render_missing_key_fails() {
        let mut mapping = ParameterMapping::new();
        mapping.insert("thing", "a parser");

        let err = TEMPLATE.render(&mapping).unwrap_err();
        match err {
            DraftError::MissingPlaceholder { placeholder } => {
                assert_eq!(placeholder, "audience");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
