//! Marker-pair section extraction from completed responses.
//!
//! One routine covers both marker policies: fenced code blocks
//! (start `` ```bash ``, end `` ``` ``) and tag pairs (`<PRD>` / `</PRD>`).
//! Search is literal, case-sensitive, first-occurrence substring search over
//! the final text; there is no pattern matching and no nesting awareness.
//!
//! Known caveat, kept on purpose: if the end marker substring occurs inside
//! the intended content (an inner fence, say), extraction stops at that inner
//! occurrence rather than spanning to a later one. Callers treat an absent or
//! truncated section as a degraded display, never as a failure; the full
//! response text stays available either way.

/// A named marker pair describing one extractable section.
#[derive(Debug, Clone, Copy)]
pub struct SectionRule {
    /// Heading under which the section is displayed
    pub label: &'static str,

    /// Literal start marker
    pub start: &'static str,

    /// Literal end marker, searched after the start marker's end offset
    pub end: &'static str,
}

impl SectionRule {
    /// Run this rule against a completed response.
    pub fn extract(&self, text: &str) -> Option<String> {
        extract_section(text, self.start, self.end)
    }
}

/// Extract the text strictly between the first occurrence of `start` and the
/// first occurrence of `end` after it, trimmed.
///
/// Returns `None` when either marker is missing. Pure function of the input;
/// distinct marker pairs searched over the same text do not affect each other.
pub fn extract_section(text: &str, start: &str, end: &str) -> Option<String> {
    let start_pos = text.find(start)?;
    let content_start = start_pos + start.len();
    let end_offset = text[content_start..].find(end)?;
    Some(text[content_start..content_start + end_offset].trim().to_string())
}
