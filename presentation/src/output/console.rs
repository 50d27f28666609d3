//! Console output formatter for planning results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use planner_application::{MenuSource, PlanMenusOutput};
use planner_domain::{CourseIdea, FidelityReport, MenuVariant, SlotAssignment};
use serde::Serialize;

/// Formats planning results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(result: &PlanMenusOutput) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Tasting Menu Plan"));
        output.push('\n');

        output.push_str(&Self::section_header("Host's Ideas"));
        output.push_str(&Self::format_ideas(&result.ideas));

        output.push_str(&Self::section_header("Course Slots"));
        output.push_str(&Self::format_assignment(&result.assignment));

        output.push_str(&Self::section_header("Menus"));
        output.push_str(&Self::format_menus(&result.menus));

        output.push_str(&Self::section_header("Fidelity"));
        output.push_str(&Self::format_report(&result.report));

        output.push_str(&format!(
            "\n{} {}\n",
            "Source:".cyan().bold(),
            Self::source_label(result)
        ));
        if !result.failures.is_empty() {
            output.push_str(&format!("{}\n", "Rejected attempts:".yellow().bold()));
            for failure in &result.failures {
                output.push_str(&format!("  * {}\n", failure));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Disable ANSI colors globally when `enabled` is false
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the menus only (concise output)
    pub fn format_menus_only(result: &PlanMenusOutput) -> String {
        Self::format_menus(&result.menus)
    }

    /// Numbered list of extracted ideas
    pub fn format_ideas(ideas: &[CourseIdea]) -> String {
        if ideas.is_empty() {
            return format!("  {}\n", "(none: menus are unconstrained)".dimmed());
        }
        ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| format!("  {}. {}\n", i + 1, idea))
            .collect()
    }

    /// Slot table with placement provenance and dropped ideas
    pub fn format_assignment(assignment: &SlotAssignment) -> String {
        let mut output = String::new();
        for (slot, assigned) in assignment.iter() {
            match assigned {
                Some(idea) => output.push_str(&format!(
                    "  {:<13} {} {}\n",
                    slot.label().bold(),
                    idea.text,
                    format!("[{}]", idea.placement).dimmed()
                )),
                None => output.push_str(&format!(
                    "  {:<13} {}\n",
                    slot.label().bold(),
                    "(open)".dimmed()
                )),
            }
        }
        if !assignment.dropped().is_empty() {
            output.push_str(&format!("  {}\n", "Dropped (no free slot):".red().bold()));
            for idea in assignment.dropped() {
                output.push_str(&format!("    - {}\n", idea));
            }
        }
        output
    }

    /// All menus with their courses, wines and budgets
    pub fn format_menus(menus: &[MenuVariant]) -> String {
        let mut output = String::new();
        for menu in menus {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {}. {} ──", menu.id, menu.style).yellow().bold()
            ));
            if !menu.description.is_empty() {
                output.push_str(&format!("{}\n", menu.description.dimmed()));
            }
            for course in &menu.courses {
                output.push_str(&format!("  {:<13} {}\n", course.slot.bold(), course.name));
                if let Some(wine) = &course.wine {
                    output.push_str(&format!("  {:<13} {} {}\n", "", "wine:".dimmed(), wine));
                }
            }
            output.push_str(&format!(
                "  {} {}   {} {}\n",
                "Food:".cyan(),
                menu.food_cost,
                "Wine:".cyan(),
                menu.wine_cost
            ));
        }
        output
    }

    /// Fidelity verdict with per-slot drift details
    pub fn format_report(report: &FidelityReport) -> String {
        if !report.constrained {
            return format!("  {}\n", "No host ideas to check against.".dimmed());
        }

        let mut output = String::new();
        if report.passed() {
            output.push_str(&format!(
                "  {} all {} menu(s) keep the host's {} course(s)\n",
                "PASS".green().bold(),
                report.menus.len(),
                report.slots_checked
            ));
            return output;
        }

        if report.menus.is_empty() {
            output.push_str(&format!("  {} no menus to check\n", "FAIL".red().bold()));
            return output;
        }

        output.push_str(&format!(
            "  {} {} drifted slot(s)\n",
            "FAIL".red().bold(),
            report.drift_count()
        ));
        for menu in report.failing_menus() {
            output.push_str(&format!("  Menu {} ({}):\n", menu.menu_id, menu.style));
            for drift in &menu.drifts {
                output.push_str(&format!(
                    "    {} expected \"{}\", got {}\n",
                    drift.slot.label().bold(),
                    drift.expected,
                    drift
                        .produced
                        .as_deref()
                        .map(|p| format!("\"{}\"", p))
                        .unwrap_or_else(|| "nothing".to_string())
                ));
            }
        }
        output
    }

    /// Custom-course block and full prompt, as printed by `prompt`
    pub fn format_prompt(custom_courses: &str, full_prompt: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Custom Course Instruction"));
        if custom_courses.is_empty() {
            output.push_str(&format!("{}\n", "(empty: no custom text)".dimmed()));
        } else {
            output.push_str(custom_courses);
        }
        output.push_str(&Self::section_header("Generation Prompt"));
        output.push_str(full_prompt);
        output.push('\n');
        output
    }

    /// Prompt pieces as JSON, as printed by `prompt --output json`
    pub fn format_prompt_json(
        ideas: &[CourseIdea],
        system: &str,
        custom_courses: &str,
        full_prompt: &str,
    ) -> String {
        Self::format_json(&serde_json::json!({
            "ideas": ideas,
            "system": system,
            "custom_courses": custom_courses,
            "prompt": full_prompt,
        }))
    }

    fn source_label(result: &PlanMenusOutput) -> String {
        match (result.source, result.attempts) {
            (MenuSource::Generated, n) => format!("generated (attempt {})", n),
            (MenuSource::Fallback, 0) => "deterministic variants".to_string(),
            (MenuSource::Fallback, n) => {
                format!("deterministic fallback after {} failed attempt(s)", n)
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &PlanMenusOutput) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &PlanMenusOutput) -> String {
        Self::format_json(result)
    }

    fn format_menus_only(&self, result: &PlanMenusOutput) -> String {
        Self::format_menus_only(result)
    }
}
