//! Workflow configurations.
//!
//! The two shipped generators share one pipeline shape: collect a form,
//! render a fixed prompt, stream the completion, extract marker-delimited
//! sections, export the full text. A `Workflow` captures everything that
//! differs between them as data.

use crate::export::FileExport;
use crate::extract::SectionRule;
use crate::form::Field;
use crate::prompts;
use crate::template::PromptTemplate;

/// Everything that distinguishes one generator from another.
#[derive(Debug, Clone, Copy)]
pub struct Workflow {
    /// Short machine name (also the CLI subcommand)
    pub name: &'static str,

    /// Title shown above the form
    pub title: &'static str,

    /// Explanation shown before the fields
    pub intro: &'static str,

    /// Prompt template for this workflow
    pub template: PromptTemplate,

    /// Input fields, in display order
    pub fields: &'static [Field],

    /// Sections to extract from the completed response
    pub sections: &'static [SectionRule],

    /// Export descriptor for the full response
    pub export: FileExport,
}

const SCAFFOLD_INTRO: &str = "\
This AI Project Generator helps you create a comprehensive project outline and implementation details for your AI product.
To use it:
1. Enter your AI Product name
2. Specify the AI Technology, Language, or Framework you want to use
3. List the Key Features of your project
4. Generate to get detailed project information, including folder structure, implementation plan, and sample code.";

const SCAFFOLD_FIELDS: &[Field] = &[
    Field {
        key: "AI_PRODUCT",
        label: "AI Product",
        help: None,
    },
    Field {
        key: "AI_TECH_LANG_FRAME",
        label: "AI Technology/Language/Framework",
        help: None,
    },
    Field {
        key: "KEY_FEATURES",
        label: "Key Features",
        help: None,
    },
];

const SCAFFOLD_SECTIONS: &[SectionRule] = &[SectionRule {
    label: "Bash Script for Project Structure",
    start: "```bash",
    end: "```",
}];

const PRD_INTRO: &str = "\
This tool helps you create a comprehensive Product Requirements Document (PRD) based on your product strategy hypothesis.
Fill in the fields below with your product details and generate to get a well-structured document.

If you're unsure about any field, you can enter '[TBD]' and revisit it later.";

const PRD_FIELDS: &[Field] = &[
    Field {
        key: "product_description",
        label: "1. Product & Description",
        help: Some("Enter your product name and a brief explanation of what it does."),
    },
    Field {
        key: "target_audience",
        label: "2. Target Audience",
        help: Some(
            "Describe your primary market segment and any secondary users you might explore in the future.",
        ),
    },
    Field {
        key: "problem_statement",
        label: "3. Problem Statement, Goal, and Motivation",
        help: Some(
            "Explain the end outcome users want to achieve, why they want it, and the current pain points or unmet needs.",
        ),
    },
    Field {
        key: "unique_value_prop",
        label: "4. Unique Value Proposition",
        help: Some(
            "Describe how your product solves key user pain points, include a one-liner tagline, and any potential user skepticism.",
        ),
    },
    Field {
        key: "differentiation",
        label: "5. Differentiation and Alternatives",
        help: Some(
            "List current solutions or workarounds, their drawbacks, and your product's unique differentiators.",
        ),
    },
    Field {
        key: "monetization",
        label: "6. Monetization Strategy",
        help: Some(
            "Identify the decision-maker, price point, reasons for willingness to pay, related past purchases, and potential buying frictions.",
        ),
    },
    Field {
        key: "acquisition_channel",
        label: "7. Acquisition Channel",
        help: Some(
            "Describe where your target users spend their time (online or offline) that you can reach them.",
        ),
    },
];

const PRD_SECTIONS: &[SectionRule] = &[
    SectionRule {
        label: "PRD",
        start: "<PRD>",
        end: "</PRD>",
    },
    SectionRule {
        label: "Follow-up Questions",
        start: "<QUESTIONS>",
        end: "</QUESTIONS>",
    },
];

impl Workflow {
    /// Project-scaffold generator: outline, implementation plan, and a bash
    /// script for the folder structure.
    pub const fn scaffold() -> Self {
        Self {
            name: "scaffold",
            title: "AI Project Generator",
            intro: SCAFFOLD_INTRO,
            template: prompts::scaffold_template(),
            fields: SCAFFOLD_FIELDS,
            sections: SCAFFOLD_SECTIONS,
            export: FileExport {
                file_name: "project_details.txt",
                mime_type: "text/plain",
            },
        }
    }

    /// Product-requirements-document generator.
    pub const fn prd() -> Self {
        Self {
            name: "prd",
            title: "PRD Generator",
            intro: PRD_INTRO,
            template: prompts::prd_template(),
            fields: PRD_FIELDS,
            sections: PRD_SECTIONS,
            export: FileExport {
                file_name: "product_requirements_document.md",
                mime_type: "text/markdown",
            },
        }
    }

    /// All shipped workflows, in menu order.
    pub fn all() -> &'static [Workflow] {
        const ALL: &[Workflow] = &[Workflow::scaffold(), Workflow::prd()];
        ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_match_template_keys() {
        for workflow in Workflow::all() {
            let field_keys: Vec<&str> = workflow.fields.iter().map(|f| f.key).collect();
            assert_eq!(
                field_keys, workflow.template.keys,
                "field/template key mismatch in {}",
                workflow.name
            );
        }
    }

    #[test]
    fn test_scaffold_exports_plain_text() {
        let workflow = Workflow::scaffold();
        assert_eq!(workflow.export.file_name, "project_details.txt");
        assert_eq!(workflow.export.mime_type, "text/plain");
        assert_eq!(workflow.fields.len(), 3);
        assert_eq!(workflow.sections.len(), 1);
    }

    #[test]
    fn test_prd_exports_markdown() {
        let workflow = Workflow::prd();
        assert_eq!(workflow.export.file_name, "product_requirements_document.md");
        assert_eq!(workflow.export.mime_type, "text/markdown");
        assert_eq!(workflow.fields.len(), 7);
        assert_eq!(workflow.sections.len(), 2);
    }

    #[test]
    fn test_workflow_names_unique() {
        let names: Vec<&str> = Workflow::all().iter().map(|w| w.name).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
