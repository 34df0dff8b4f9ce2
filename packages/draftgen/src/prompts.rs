//! Fixed prompt texts for the shipped workflows.
//!
//! These are the exact prompts sent to the completion API, with `{key}`
//! placeholders filled in from the submitted form.

use crate::template::PromptTemplate;

/// Placeholder keys for the project-scaffold prompt.
pub const SCAFFOLD_KEYS: &[&str] = &["AI_PRODUCT", "AI_TECH_LANG_FRAME", "KEY_FEATURES"];

/// Prompt for generating a project outline and implementation details.
pub const SCAFFOLD_PROMPT: &str = r#"
Generate a comprehensive project outline and implementation details for an {AI_PRODUCT} using {AI_TECH_LANG_FRAME}. The core features for this Proof of Concept (POC) are: {KEY_FEATURES}

Please provide:
1. A detailed folder and file structure following clean architecture principles.
2. An explanation of the main files and their purposes.
3. A comprehensive implementation plan, detailing each step of the development process.
4. Best practices and potential challenges for this type of project.
5. A bash script to create the folder and file structure.
6. Sample code for key components (e.g., main application file, crucial models, important functions).
7. A requirements.txt file listing all necessary dependencies.

Ensure that the output is detailed enough to serve as a complete guide for implementing the project.
"#;

/// Placeholder keys for the PRD prompt.
pub const PRD_KEYS: &[&str] = &[
    "product_description",
    "target_audience",
    "problem_statement",
    "unique_value_prop",
    "differentiation",
    "monetization",
    "acquisition_channel",
];

/// Prompt for drafting a product requirements document.
///
/// Asks the model to wrap the document in `<PRD>` tags and follow-up
/// questions in `<QUESTIONS>` tags, which is what section extraction
/// looks for afterwards.
pub const PRD_PROMPT: &str = r#"
You are an expert writer of Product Requirements Documents (PRDs). Your task is to draft a comprehensive PRD based on the information provided and make targeted assumptions where necessary. The goal is to create a document that leaves no questions unanswered for designers and engineers.

Here's the template structure you should follow for the PRD:

1. Problem
2. High Level Approach
3. Narrative
4. Goals
   4.1 Metrics
   4.2 Impact Sizing Model
5. Non-goals
6. Solution Alignment
7. Key Features
   7.1 Plan of record
   7.2 Future considerations
8. Key Flows
9. Key Logic
10. Launch Plan
11. Key Milestones

Use the following information as the foundation for your PRD:

1. Product & Description:
{product_description}

2. Target Audience:
{target_audience}

3. Problem Statement, Goal, and Motivation:
{problem_statement}

4. Unique Value Proposition & Benefit to Key Users' Pain Point:
{unique_value_prop}

5. Differentiation and Alternatives:
{differentiation}

6. Monetization, Willingness to Pay, Friction:
{monetization}

7. Acquisition Channel:
{acquisition_channel}

Where the provided information is incomplete, make informed assumptions based on industry best practices and your expertise. Ensure these assumptions align with the overall product strategy and user needs.

For each section of the PRD:
1. Start with the known information provided.
2. Expand on this information using your expertise and reasonable assumptions.
3. Ensure each section is detailed and leaves no room for ambiguity.
4. Use clear, concise language that both technical and non-technical stakeholders can understand.

When drafting the PRD:
- In the Problem section, clearly articulate the user pain point and business opportunity.
- For the High Level Approach, outline a strategic plan that addresses the problem effectively.
- In the Narrative, create compelling user stories that cover both common and edge cases.
- For Goals and Metrics, set ambitious yet achievable targets. Include specific numbers where possible.
- In the Impact Sizing Model, show your calculations and reasoning clearly.
- For Non-goals, be explicit about what's out of scope and why.
- In the Solution Alignment and Key Features sections, be specific about what will be built.
- For Key Flows and Key Logic, provide detailed step-by-step descriptions.
- In the Launch Plan, create a realistic timeline with clear phase definitions.
- For Key Milestones, include specific dates or timeframes where possible.

Format your PRD using markdown for readability. Use headers, bullet points, and tables where appropriate.

After completing the PRD draft, identify any areas where you made significant assumptions or where more information would be beneficial. List these as follow-up questions at the end of your document.

Present your final PRD draft within <PRD> tags, and list your follow-up questions within <QUESTIONS> tags.

Remember to approach this task with confidence, demonstrating strong strategic thinking, UX sensibility, and business acumen throughout the document.
"#;

/// The project-scaffold template.
pub const fn scaffold_template() -> PromptTemplate {
    PromptTemplate {
        text: SCAFFOLD_PROMPT,
        keys: SCAFFOLD_KEYS,
    }
}

/// The PRD template.
pub const fn prd_template() -> PromptTemplate {
    PromptTemplate {
        text: PRD_PROMPT,
        keys: PRD_KEYS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ParameterMapping;

    fn placeholder_present(text: &str, key: &str) -> bool {
        text.contains(&format!("{{{}}}", key))
    }

    #[test]
    fn test_scaffold_template_declares_its_placeholders() {
        for key in SCAFFOLD_KEYS {
            assert!(
                placeholder_present(SCAFFOLD_PROMPT, key),
                "missing placeholder {{{key}}}"
            );
        }
    }

    #[test]
    fn test_prd_template_declares_its_placeholders() {
        for key in PRD_KEYS {
            assert!(
                placeholder_present(PRD_PROMPT, key),
                "missing placeholder {{{key}}}"
            );
        }
    }

    #[test]
    fn test_scaffold_render_leaves_no_placeholders() {
        let mut mapping = ParameterMapping::new();
        mapping.insert("AI_PRODUCT", "image classifier");
        mapping.insert("AI_TECH_LANG_FRAME", "Rust and candle");
        mapping.insert("KEY_FEATURES", "training, inference, CLI");

        let rendered = scaffold_template().render(&mapping).unwrap();
        for key in SCAFFOLD_KEYS {
            assert!(!placeholder_present(&rendered, key));
        }
        assert!(rendered.contains("image classifier"));
        assert!(rendered.contains("Rust and candle"));
        assert!(rendered.contains("training, inference, CLI"));
    }

    #[test]
    fn test_prd_render_leaves_no_placeholders() {
        let mut mapping = ParameterMapping::new();
        for &key in PRD_KEYS {
            mapping.insert(key, format!("value for {key}"));
        }

        let rendered = prd_template().render(&mapping).unwrap();
        for key in PRD_KEYS {
            assert!(!placeholder_present(&rendered, key));
            assert!(rendered.contains(&format!("value for {key}")));
        }
    }
}
