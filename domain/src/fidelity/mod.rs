//! Fidelity checks for generated menus
//!
//! After the generation model returns menus, each one must still serve the
//! host's ideas in the slots they were assigned to. Matching is fuzzy:
//! models add technique and garnish words, so an idea only has to be
//! recognizable inside the produced course name.
//!
//! ```text
//! ideas ──► assign_slots ──► for each menu, for each assigned slot:
//!                               course_matches(idea, menu.course_at(slot))
//! ```

mod report;

pub use report::{FidelityReport, MenuFidelity, SlotDrift};

use crate::core::string::normalize_for_match;
use crate::course::assignment::assign_slots;
use crate::course::idea::CourseIdea;
use crate::menu::entities::MenuVariant;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the fuzzy match
///
/// A course matches an idea when the normalized idea is a substring of the
/// normalized course name, or when at least
/// `min(min_word_matches, significant words)` of the idea's significant
/// words (at least `min_word_len` characters) appear in the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FidelityPolicy {
    pub min_word_matches: usize,
    pub min_word_len: usize,
}

impl Default for FidelityPolicy {
    fn default() -> Self {
        Self {
            min_word_matches: 2,
            min_word_len: 3,
        }
    }
}

impl FidelityPolicy {
    pub fn with_min_word_matches(mut self, n: usize) -> Self {
        self.min_word_matches = n;
        self
    }

    pub fn with_min_word_len(mut self, n: usize) -> Self {
        self.min_word_len = n;
        self
    }

    /// Check whether a produced course name still carries the host's idea.
    pub fn course_matches(&self, idea: &str, course_name: &str) -> bool {
        let idea = normalize_for_match(idea);
        let name = normalize_for_match(course_name);

        if name.contains(&idea) {
            return true;
        }

        let significant: Vec<&str> = idea
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_word_len)
            .collect();
        let required = self.min_word_matches.min(significant.len());
        let hits = significant.iter().filter(|w| name.contains(*w)).count();

        hits >= required
    }
}

/// Check generated menus against the host's ideas with a given policy.
pub fn check_menus(
    menus: &[MenuVariant],
    ideas: &[CourseIdea],
    policy: &FidelityPolicy,
) -> FidelityReport {
    if ideas.is_empty() {
        return FidelityReport::unconstrained(menus);
    }

    let assignment = assign_slots(ideas);
    let results = menus
        .iter()
        .map(|menu| {
            let drifts = assignment
                .assigned()
                .filter_map(|(slot, idea)| {
                    let produced = menu.course_at(slot).map(|c| c.name.clone());
                    let matched = produced
                        .as_deref()
                        .is_some_and(|name| policy.course_matches(&idea.text, name));
                    (!matched).then(|| SlotDrift {
                        slot,
                        expected: idea.text.clone(),
                        produced,
                    })
                })
                .collect();
            MenuFidelity {
                menu_id: menu.id,
                style: menu.style.clone(),
                drifts,
            }
        })
        .collect();

    FidelityReport::constrained(assignment.assigned_count(), results)
}

/// Check whether every generated menu respects the host's ideas.
///
/// Always true when there are no ideas. Otherwise the menu set must be
/// non-empty and every menu must pass.
///
/// # Examples
///
/// ```
/// use planner_domain::course::extract_ideas;
/// use planner_domain::fidelity::menus_respect_ideas;
/// use planner_domain::menu::{BudgetContext, build_variant_menus_from_ideas};
///
/// let ideas = extract_ideas("Dessert: panna cotta\nduck breast");
/// let menus = build_variant_menus_from_ideas(&ideas, &BudgetContext::default());
/// assert!(menus_respect_ideas(&menus, &ideas));
/// assert!(!menus_respect_ideas(&[], &ideas));
/// ```
pub fn menus_respect_ideas(menus: &[MenuVariant], ideas: &[CourseIdea]) -> bool {
    check_menus(menus, ideas, &FidelityPolicy::default()).passed()
}
