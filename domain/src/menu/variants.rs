//! Deterministic menu variants
//!
//! Expands one [`SlotAssignment`] into five menus, one per
//! [`VariantStyle`]. This is the offline path: no dish names are invented,
//! the host's ideas are echoed with a style descriptor and empty slots get a
//! generic placeholder.

use crate::course::assignment::{SlotAssignment, assign_slots};
use crate::course::idea::CourseIdea;
use crate::course::slot::CourseSlot;
use crate::menu::entities::{BudgetContext, Course, MenuVariant};
use crate::menu::style::{VARIANT_STYLES, VariantStyle};

/// Placeholder wine note for courses that carry a pairing
pub const SOMMELIER_SELECTION: &str = "Sommelier selection";

/// Build one menu per style from a slot assignment.
///
/// Every variant has exactly five courses in serving order. Costs are copied
/// verbatim from `budget`.
pub fn build_variant_menus(
    assignment: &SlotAssignment,
    budget: &BudgetContext,
) -> [MenuVariant; 5] {
    VARIANT_STYLES.map(|style| build_variant(assignment, budget, &style))
}

/// Assign `ideas` to slots, then build the variants.
///
/// # Examples
///
/// ```
/// use planner_domain::course::extract_ideas;
/// use planner_domain::menu::{BudgetContext, build_variant_menus_from_ideas};
///
/// let ideas = extract_ideas("Amuse: Oyster\nSteak");
/// let menus = build_variant_menus_from_ideas(&ideas, &BudgetContext::default());
/// assert_eq!(menus.len(), 5);
/// assert_eq!(menus[0].courses[0].name, "Oyster (classic variation)");
/// ```
pub fn build_variant_menus_from_ideas(
    ideas: &[CourseIdea],
    budget: &BudgetContext,
) -> [MenuVariant; 5] {
    build_variant_menus(&assign_slots(ideas), budget)
}

fn build_variant(
    assignment: &SlotAssignment,
    budget: &BudgetContext,
    style: &VariantStyle,
) -> MenuVariant {
    let courses = CourseSlot::ALL
        .into_iter()
        .map(|slot| {
            let name = match assignment.text(slot) {
                Some(idea) => format!("{} ({})", idea, style.variation_label()),
                None => slot.fallback_name().to_string(),
            };
            let course = Course::new(slot, name);
            if slot.carries_wine() {
                course.with_wine(SOMMELIER_SELECTION)
            } else {
                course
            }
        })
        .collect();

    MenuVariant {
        id: style.id,
        style: style.label.to_string(),
        description: style.description.to_string(),
        courses,
        food_cost: budget.food_cost().to_string(),
        wine_cost: budget.wine_cost().to_string(),
    }
}
