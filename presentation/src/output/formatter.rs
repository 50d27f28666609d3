//! Output formatter trait

use planner_application::PlanMenusOutput;

/// Trait for formatting planning results
pub trait OutputFormatter {
    /// Format the complete result
    fn format(&self, result: &PlanMenusOutput) -> String;

    /// Format as JSON
    fn format_json(&self, result: &PlanMenusOutput) -> String;

    /// Format the menus only (concise output)
    fn format_menus_only(&self, result: &PlanMenusOutput) -> String;
}
