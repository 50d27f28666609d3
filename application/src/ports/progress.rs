//! Progress notification port
//!
//! Defines the interface for reporting progress during menu generation.

use planner_domain::{CourseIdea, SlotAssignment};

/// Result of a single generation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Menus parsed and passed the fidelity check
    Accepted,
    /// Menus parsed but drifted from the host's ideas
    Rejected { drift_count: usize },
    /// Response could not be parsed into menus
    Malformed(String),
    /// The generator call itself failed
    Failed(String),
}

impl AttemptOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AttemptOutcome::Accepted)
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptOutcome::Accepted => write!(f, "accepted"),
            AttemptOutcome::Rejected { drift_count } => {
                write!(f, "menus drifted from the host's courses ({} slots)", drift_count)
            }
            AttemptOutcome::Malformed(e) => write!(f, "malformed response: {}", e),
            AttemptOutcome::Failed(e) => write!(f, "generator failed: {}", e),
        }
    }
}

/// Callback for progress updates during menu generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once the host's text has been segmented and assigned
    fn on_ideas_assigned(&self, _ideas: &[CourseIdea], _assignment: &SlotAssignment) {}

    /// Called before each generator call
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize);

    /// Called after each generator call has been parsed and checked
    fn on_attempt_complete(&self, attempt: usize, outcome: &AttemptOutcome);

    /// Called when every attempt failed and deterministic menus are used
    fn on_fallback(&self, _attempts: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _attempt: usize, _max_attempts: usize) {}
    fn on_attempt_complete(&self, _attempt: usize, _outcome: &AttemptOutcome) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(AttemptOutcome::Accepted.to_string(), "accepted");
        assert_eq!(
            AttemptOutcome::Rejected { drift_count: 2 }.to_string(),
            "menus drifted from the host's courses (2 slots)"
        );
        assert_eq!(
            AttemptOutcome::Failed("Timeout".to_string()).to_string(),
            "generator failed: Timeout"
        );
    }

    #[test]
    fn test_is_accepted() {
        assert!(AttemptOutcome::Accepted.is_accepted());
        assert!(!AttemptOutcome::Malformed("x".to_string()).is_accepted());
    }
}
