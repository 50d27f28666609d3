//! Prompt domain
//!
//! Instruction text handed to the external menu-generation model.

mod template;

pub use template::MenuPromptTemplate;

use crate::course::idea::CourseIdea;

/// Render the host's custom courses as generation instructions.
///
/// Empty when `raw_text` is blank or yields no ideas.
pub fn build_prompt(raw_text: &str, ideas: &[CourseIdea]) -> String {
    MenuPromptTemplate::custom_courses(raw_text, ideas)
}
