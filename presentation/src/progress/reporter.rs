//! Progress reporting for menu generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use planner_application::{AttemptOutcome, ProgressNotifier};
use planner_domain::{CourseIdea, SlotAssignment};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during generation with a spinner per attempt
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn outcome_line(outcome: &AttemptOutcome) -> String {
        match outcome {
            AttemptOutcome::Accepted => format!("{} menus accepted", "v".green()),
            other => format!("{} {}", "x".red(), other),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_ideas_assigned(&self, ideas: &[CourseIdea], assignment: &SlotAssignment) {
        eprintln!(
            "{} {} idea(s), {} slot(s) assigned",
            "->".cyan(),
            ideas.len(),
            assignment.assigned_count()
        );
    }

    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Attempt {}/{}", attempt, max_attempts));
        pb.set_message("waiting for the generator...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_attempt_complete(&self, _attempt: usize, outcome: &AttemptOutcome) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_with_message(Self::outcome_line(outcome));
        }
    }

    fn on_fallback(&self, attempts: usize) {
        eprintln!(
            "{} {}",
            "!".yellow().bold(),
            format!(
                "All {} attempt(s) failed; using deterministic menus",
                attempts
            )
            .yellow()
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("Attempt {}/{}", attempt, max_attempts).bold()
        );
    }

    fn on_attempt_complete(&self, _attempt: usize, outcome: &AttemptOutcome) {
        eprintln!("  {}", ProgressReporter::outcome_line(outcome));
    }

    fn on_fallback(&self, attempts: usize) {
        eprintln!(
            "  {} falling back to deterministic menus after {} attempt(s)",
            "!".yellow(),
            attempts
        );
    }
}
